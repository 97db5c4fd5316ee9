use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_LABEL_PREFIX;
use crate::types::GitHubLabel;

/// Selects labels by a literal, case-sensitive name prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelFilter {
    pub prefix: String,
}

impl Default for LabelFilter {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL_PREFIX)
    }
}

impl LabelFilter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn matches(&self, label: &GitHubLabel) -> bool {
        label.name.starts_with(&self.prefix)
    }

    /// The label name with the prefix removed, or `None` for labels the
    /// filter drops. Whitespace after the prefix is kept.
    pub fn tag_key<'a>(&self, name: &'a str) -> Option<&'a str> {
        name.strip_prefix(self.prefix.as_str())
    }
}
