pub mod client;
pub mod config;
pub mod document;
pub mod error;
pub mod filters;
pub mod tags;
pub mod types;

use std::path::PathBuf;

use chrono::Utc;
use log::info;

pub use client::{fetch_all_labels, GitHubClient, LabelSource};
pub use config::{GeneratorConfig, GitHubConfig, OutputConfig, TagConfig};
pub use document::TagDocument;
pub use error::{Result, TagGenError};
pub use filters::LabelFilter;
pub use tags::{TagDeriver, TagSet};
pub use types::{GenerationReport, GitHubLabel, LabelCollection, Repository, Tag};

/// Fetch, derive, render and write, in that order.
pub struct TagGenerator<S = GitHubClient> {
    source: S,
    config: GeneratorConfig,
    repository: Repository,
    deriver: TagDeriver,
}

impl TagGenerator<GitHubClient> {
    pub fn new() -> Result<Self> {
        Self::with_config(GeneratorConfig::default())
    }

    pub fn with_config(config: GeneratorConfig) -> Result<Self> {
        let client = GitHubClient::with_config(&config.github)?;
        Self::with_source(client, config)
    }
}

impl<S: LabelSource> TagGenerator<S> {
    pub fn with_source(source: S, config: GeneratorConfig) -> Result<Self> {
        if config.github.per_page == 0 {
            return Err(TagGenError::ConfigError(
                "per_page must be at least 1".to_string(),
            ));
        }

        let repository = Repository::parse(&config.github.repository)?;
        let deriver = TagDeriver::new(
            LabelFilter::new(config.tags.label_prefix.as_str()),
            &config.github.web_base_url,
            &repository,
        )?;

        Ok(Self {
            source,
            config,
            repository,
            deriver,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub async fn collect_labels(&self) -> Result<LabelCollection> {
        fetch_all_labels(&self.source, &self.repository, self.config.github.per_page).await
    }

    pub fn build_document(&self, labels: &[GitHubLabel]) -> TagDocument {
        TagDocument::new(self.config.tags.schema.as_str(), self.deriver.build(labels))
            .with_line_width(self.config.output.line_width)
    }

    pub async fn generate(&self) -> Result<TagDocument> {
        let collection = self.collect_labels().await?;
        Ok(self.build_document(&collection.labels))
    }

    /// Runs the whole pipeline and overwrites the configured output file.
    ///
    /// Nothing is written unless every page was fetched successfully.
    pub async fn run(&self) -> Result<GenerationReport> {
        let collection = self.collect_labels().await?;
        let document = self.build_document(&collection.labels);

        let output_path = self.config.output.path.clone();
        document.write_to(&output_path)?;

        info!(
            "Generated {} tags from {} labels in {}",
            document.len(),
            collection.labels.len(),
            self.repository.full_name
        );

        Ok(GenerationReport {
            repository: collection.repository,
            output_path,
            labels_fetched: collection.labels.len(),
            pages_requested: collection.pages_requested,
            tags_written: document.len(),
            generated_at: Utc::now(),
        })
    }
}

pub struct TagGeneratorBuilder {
    config: GeneratorConfig,
}

impl TagGeneratorBuilder {
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
        }
    }

    pub fn from_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn repository(mut self, repository: impl Into<String>) -> Self {
        self.config.github.repository = repository.into();
        self
    }

    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.github.api_base_url = url.into();
        self
    }

    pub fn web_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.github.web_base_url = url.into();
        self
    }

    pub fn per_page(mut self, per_page: u8) -> Self {
        self.config.github.per_page = per_page;
        self
    }

    pub fn label_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.tags.label_prefix = prefix.into();
        self
    }

    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.config.tags.schema = schema.into();
        self
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output.path = path.into();
        self
    }

    pub fn line_width(mut self, width: usize) -> Self {
        self.config.output.line_width = width;
        self
    }

    pub fn build(self) -> Result<TagGenerator> {
        TagGenerator::with_config(self.config)
    }

    pub fn build_with_source<S: LabelSource>(self, source: S) -> Result<TagGenerator<S>> {
        TagGenerator::with_source(source, self.config)
    }
}

impl Default for TagGeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
