use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use update_glean_tags::{GeneratorConfig, TagGeneratorBuilder};

/// Regenerates the Glean tags file from the repository's `Feature:` labels.
#[derive(Parser, Debug)]
#[command(name = "update-glean-tags", version, about)]
struct Cli {
    /// YAML file with generator settings
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Where to write the tags file
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Repository to read labels from, as `owner/name` or a GitHub URL
    #[arg(long, value_name = "REPO")]
    repo: Option<String>,

    /// GitHub REST API root
    #[arg(long, value_name = "URL")]
    api_base_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GeneratorConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    let mut builder = TagGeneratorBuilder::from_config(config);
    if let Some(output) = cli.output {
        builder = builder.output_path(output);
    }
    if let Some(repo) = cli.repo {
        builder = builder.repository(repo);
    }
    if let Some(url) = cli.api_base_url {
        builder = builder.api_base_url(url);
    }

    let generator = builder.build()?;
    let report = generator.run().await?;

    println!(
        "Wrote {} tags ({} labels, {} requests) from {} to {}",
        report.tags_written,
        report.labels_fetched,
        report.pages_requested,
        report.repository.full_name,
        report.output_path.display()
    );

    Ok(())
}
