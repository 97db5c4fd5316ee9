use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_SCHEMA: &str = "moz://mozilla.org/schemas/glean/tags/1-0-0";
pub const DEFAULT_LABEL_PREFIX: &str = "Feature:";
pub const DEFAULT_LINE_WIDTH: usize = 78;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub github: GitHubConfig,
    pub tags: TagConfig,
    pub output: OutputConfig,
}

impl GeneratorConfig {
    /// Parses a YAML config. Missing sections and fields keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    pub api_base_url: String,
    pub web_base_url: String,
    /// `owner/name` or a github.com repository URL.
    pub repository: String,
    pub per_page: u8,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.github.com".to_string(),
            web_base_url: "https://github.com".to_string(),
            repository: "mozilla-mobile/fenix".to_string(),
            per_page: 100,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TagConfig {
    pub label_prefix: String,
    pub schema: String,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            label_prefix: DEFAULT_LABEL_PREFIX.to_string(),
            schema: DEFAULT_SCHEMA.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub line_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

/// `app/tags.yaml` next to the directory holding this crate.
pub fn default_output_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("app")
        .join("tags.yaml")
}
