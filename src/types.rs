use std::path::PathBuf;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TagGenError};

/// A label as returned by `GET /repos/{owner}/{repo}/labels`.
///
/// Only the fields the generator reads are decoded. A missing or `null`
/// description is treated the same as an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubLabel {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl GitHubLabel {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
        }
    }

    pub fn without_description(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub owner: String,
    pub name: String,
    pub full_name: String,
}

impl Repository {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        let owner = owner.into();
        let name = name.into();
        let full_name = format!("{}/{}", owner, name);
        Self {
            owner,
            name,
            full_name,
        }
    }

    /// Accepts `owner/name`, `https://github.com/owner/name` and the same URL
    /// with a trailing slash or `.git` suffix.
    pub fn parse(reference: &str) -> Result<Self> {
        let re = Regex::new(r"^(?:https?://github\.com/)?([^/\s]+)/([^/\s]+?)(?:\.git)?/?$")
            .map_err(|e| TagGenError::ConfigError(format!("Invalid regex: {}", e)))?;

        let captures = re.captures(reference.trim()).ok_or_else(|| {
            TagGenError::InvalidRepository(format!(
                "Expected 'owner/name' or a GitHub URL, got: {}",
                reference
            ))
        })?;

        Ok(Self::new(&captures[1], &captures[2]))
    }
}

/// A single Glean tag entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelCollection {
    pub repository: Repository,
    pub labels: Vec<GitHubLabel>,
    /// Number of page requests issued, including the final empty page.
    pub pages_requested: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub repository: Repository,
    pub output_path: PathBuf,
    pub labels_fetched: usize,
    pub pages_requested: u32,
    pub tags_written: usize,
    pub generated_at: DateTime<Utc>,
}
