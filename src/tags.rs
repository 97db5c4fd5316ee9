use indexmap::IndexMap;
use log::{debug, warn};
use url::Url;

use crate::error::{Result, TagGenError};
use crate::filters::LabelFilter;
use crate::types::{GitHubLabel, Repository, Tag};

/// Key reserved for the schema marker in the generated document.
pub const SCHEMA_KEY: &str = "$schema";

/// Tags keyed by name, in the order their labels were seen.
pub type TagSet = IndexMap<String, Tag>;

/// Turns feature labels into tags that link back to the label's issue search.
#[derive(Debug, Clone)]
pub struct TagDeriver {
    filter: LabelFilter,
    issues_url: Url,
}

impl TagDeriver {
    pub fn new(filter: LabelFilter, web_base_url: &str, repo: &Repository) -> Result<Self> {
        let mut issues_url = Url::parse(web_base_url)?;
        issues_url
            .path_segments_mut()
            .map_err(|_| {
                TagGenError::ConfigError(format!("Not a base URL: {}", web_base_url))
            })?
            .pop_if_empty()
            .extend([repo.owner.as_str(), repo.name.as_str(), "issues"]);

        Ok(Self { filter, issues_url })
    }

    /// Issue search link for everything carrying `label_name`.
    pub fn search_url(&self, label_name: &str) -> String {
        let mut url = self.issues_url.clone();
        url.query_pairs_mut()
            .append_pair("q", &format!("label:{}", label_name));
        url.to_string()
    }

    pub fn derive(&self, label: &GitHubLabel) -> Option<(String, Tag)> {
        let key = self.filter.tag_key(&label.name)?;

        let summary = if label.description().is_empty() {
            String::new()
        } else {
            format!("{}. ", label.description().trim())
        };

        let description = format!(
            "{}Corresponds to the [{}]({}) label on GitHub.",
            summary,
            label.name,
            self.search_url(&label.name)
        );

        Some((key.to_string(), Tag { description }))
    }

    /// Builds the tag set. A later label reducing to an existing key replaces
    /// that tag's value; the key keeps its original position.
    pub fn build(&self, labels: &[GitHubLabel]) -> TagSet {
        let mut tags = TagSet::new();

        for (key, tag) in labels.iter().filter_map(|label| self.derive(label)) {
            if key == SCHEMA_KEY {
                warn!("Skipping tag '{}': the key is reserved", key);
                continue;
            }

            if let Some(previous) = tags.insert(key, tag) {
                debug!("Replaced tag with description: {}", previous.description);
            }
        }

        tags
    }
}
