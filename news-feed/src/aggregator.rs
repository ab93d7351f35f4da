use crate::builder::ArticleRecordBuilder;
use crate::traits::{Clock, SystemClock};
use crate::types::{
    ArticleImage, ArticleRecord, Feed, FeedConfig, FeedError, FeedMeta, RawDocument, Result,
};
use crate::utils::time;
use crate::writer::FeedWriter;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Collects every article in a directory into a single feed
pub struct FeedAggregator<C: Clock = SystemClock> {
    config: FeedConfig,
    builder: ArticleRecordBuilder,
    clock: C,
}

impl FeedAggregator<SystemClock> {
    pub fn new(config: FeedConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> FeedAggregator<C> {
    pub fn with_clock(config: FeedConfig, clock: C) -> Self {
        let builder = ArticleRecordBuilder::new().with_words_per_minute(config.words_per_minute);

        Self {
            config,
            builder,
            clock,
        }
    }

    /// Build the feed and write it to the configured output file
    pub fn run(&self) -> Result<Feed> {
        let feed = self.generate()?;
        FeedWriter::write(&feed, &self.config.output_file)?;

        info!("Generated feed with {} articles", feed.meta.total_articles);
        info!("Output: {}", self.config.output_file.display());
        Ok(feed)
    }

    /// Build the feed from the configured articles directory without writing it
    pub fn generate(&self) -> Result<Feed> {
        let dir = &self.config.articles_dir;
        if !dir.is_dir() {
            error!("Articles directory not found: {}", dir.display());
            return Err(FeedError::DirectoryNotFound { path: dir.clone() });
        }

        let files = list_article_files(dir)?;
        info!("Found {} markdown files in {}", files.len(), dir.display());

        let mut articles = Vec::new();
        for path in files {
            let Some(file_name) = file_name(&path) else {
                continue;
            };

            // Drafts
            if file_name.starts_with('_') {
                debug!("Skipping {}", file_name);
                continue;
            }

            if let Some(article) = self.process_file(&path) {
                info!("Processed: {}", file_name);
                articles.push(article);
            }
        }

        let now = self.clock.now();
        if articles.is_empty() {
            warn!("No articles found!");
            articles.push(placeholder_article(&now));
        }

        Ok(Feed {
            meta: FeedMeta {
                title: self.config.title.clone(),
                description: self.config.description.clone(),
                last_updated: time::format_timestamp(&now),
                total_articles: articles.len(),
                version: self.config.version.clone(),
            },
            articles,
        })
    }

    /// Build a single article, logging and swallowing any failure so one bad
    /// file never stops the run
    pub fn process_file(&self, path: &Path) -> Option<ArticleRecord> {
        let result = read_document(path).and_then(|document| self.builder.build(&document));

        match result {
            Ok(article) => Some(article),
            Err(e @ FeedError::MissingField { .. }) => {
                warn!("{}", e);
                None
            }
            Err(e) => {
                warn!("Error processing {}: {}", path.display(), e);
                None
            }
        }
    }
}

/// Markdown files directly inside `dir`, newest name first
pub fn list_article_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_markdown = path.extension().is_some_and(|ext| ext == "md");
        if is_markdown && path.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| b.file_name().cmp(&a.file_name()));
    Ok(files)
}

/// Read a file along with the timestamp used when no other date is available
pub fn read_document(path: &Path) -> Result<RawDocument> {
    let content = fs::read_to_string(path)?;
    let metadata = fs::metadata(path)?;

    // Not every filesystem records creation time
    let created = metadata.created().or_else(|_| metadata.modified())?;

    Ok(RawDocument {
        path: path.to_path_buf(),
        file_name: file_name(path).unwrap_or_default(),
        content,
        created_at: DateTime::<Local>::from(created),
    })
}

/// Stand-in article used when the directory holds nothing publishable
pub fn placeholder_article(now: &DateTime<Local>) -> ArticleRecord {
    ArticleRecord {
        id: "welcome".to_string(),
        title: "Welcome to SarvadarshiTarang".to_string(),
        description: concat!(
            "Your news app is ready! ",
            "Start adding articles to the content/articles/ folder."
        )
        .to_string(),
        image: ArticleImage {
            url: "https://images.unsplash.com/photo-1504711434969-e33886168f5c?w=800".to_string(),
            alt: "Welcome".to_string(),
        },
        date: time::format_date(now),
        author: "SarvadarshiTarang Team".to_string(),
        category: "Tech".to_string(),
        content: "<p>Start publishing by adding markdown files to content/articles/</p>"
            .to_string(),
        blog_url: "https://github.com/yourusername/SarvadarshiTarang".to_string(),
        read_time: 1,
    }
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name().map(|name| name.to_string_lossy().into_owned())
}
