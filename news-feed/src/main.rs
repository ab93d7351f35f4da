use clap::Parser;
use news_feed::{FeedAggregator, FeedConfig, FeedError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Convert a directory of markdown articles into a JSON news feed
#[derive(Debug, Parser)]
#[command(name = "news-feed", version)]
struct Cli {
    /// Directory holding the markdown articles
    #[arg(default_value = "content/articles")]
    articles_dir: PathBuf,

    /// Where to write the generated feed
    #[arg(default_value = "feed/news-feed.json")]
    output_file: PathBuf,

    /// Log per-file details
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = FeedConfig::from_env()?.with_paths(cli.articles_dir, cli.output_file);
    info!(
        "Generating feed from {} into {}",
        config.articles_dir.display(),
        config.output_file.display()
    );

    let aggregator = FeedAggregator::new(config);
    match aggregator.run() {
        Ok(_) => Ok(ExitCode::SUCCESS),
        // Already reported by the aggregator
        Err(FeedError::DirectoryNotFound { .. }) => Ok(ExitCode::FAILURE),
        Err(e) => Err(e.into()),
    }
}
