use async_trait::async_trait;
use log::{debug, info};
use octocrab::Octocrab;

use crate::config::GitHubConfig;
use crate::error::{Result, TagGenError};
use crate::types::{GitHubLabel, LabelCollection, Repository};

/// A paged source of repository labels.
#[async_trait]
pub trait LabelSource: Send + Sync {
    /// Fetches one page of labels. Pages are 1-based; an empty page means
    /// there is nothing left to fetch.
    async fn fetch_label_page(
        &self,
        repo: &Repository,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<GitHubLabel>>;
}

/// Anonymous GitHub REST client.
pub struct GitHubClient {
    octocrab: Octocrab,
}

impl GitHubClient {
    pub fn new() -> Result<Self> {
        Self::with_config(&GitHubConfig::default())
    }

    pub fn with_config(config: &GitHubConfig) -> Result<Self> {
        let mut builder = Octocrab::builder();

        if !config.api_base_url.is_empty() && config.api_base_url != "https://api.github.com" {
            builder = builder
                .base_uri(config.api_base_url.as_str())
                .map_err(|e| TagGenError::ConfigError(format!("Invalid base URI: {}", e)))?;
        }

        Ok(Self {
            octocrab: builder.build()?,
        })
    }
}

#[async_trait]
impl LabelSource for GitHubClient {
    async fn fetch_label_page(
        &self,
        repo: &Repository,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<GitHubLabel>> {
        let route = format!(
            "/repos/{}/{}/labels?per_page={}&page={}",
            repo.owner, repo.name, per_page, page
        );

        self.octocrab
            .get(&route, None::<&()>)
            .await
            .map_err(|e| {
                TagGenError::ApiError(format!("Failed to fetch labels page {}: {}", page, e))
            })
    }
}

/// Requests pages 1, 2, ... in order until a page comes back empty.
///
/// Pages are requested one at a time; the first failing request aborts the
/// whole collection.
pub async fn fetch_all_labels<S>(
    source: &S,
    repo: &Repository,
    per_page: u8,
) -> Result<LabelCollection>
where
    S: LabelSource + ?Sized,
{
    info!("Collecting labels from {}", repo.full_name);

    let mut labels = Vec::new();
    let mut page = 1u32;

    loop {
        debug!("Fetching label page {} for {}", page, repo.full_name);

        let batch = source.fetch_label_page(repo, page, per_page).await?;

        if batch.is_empty() {
            break;
        }

        labels.extend(batch);
        page += 1;
    }

    info!(
        "Collected {} labels from {} in {} requests",
        labels.len(),
        repo.full_name,
        page
    );

    Ok(LabelCollection {
        repository: repo.clone(),
        labels,
        pages_requested: page,
    })
}
