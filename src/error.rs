use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagGenError {
    #[error("GitHub API error: {0}")]
    ApiError(String),

    #[error("Invalid repository format: {0}")]
    InvalidRepository(String),

    #[error("Octocrab error: {0}")]
    OctocrabError(#[from] octocrab::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to write {}: {source}", path.display())]
    OutputError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TagGenError>;
