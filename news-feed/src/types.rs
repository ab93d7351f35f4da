use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

/// A markdown file as read from disk, before any parsing
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub path: PathBuf,
    pub file_name: String,
    pub content: String,
    pub created_at: DateTime<Local>,
}

/// A single value from a frontmatter block
#[derive(Debug, Clone, PartialEq)]
pub enum FrontmatterValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
    /// Sequences and nested mappings, kept as-is
    Other(serde_yaml::Value),
}

impl FrontmatterValue {
    /// Text form of a scalar value, `None` for null and non-scalars
    pub fn as_text(&self) -> Option<String> {
        match self {
            FrontmatterValue::String(s) => Some(s.clone()),
            FrontmatterValue::Integer(i) => Some(i.to_string()),
            FrontmatterValue::Float(f) => Some(f.to_string()),
            FrontmatterValue::Bool(b) => Some(b.to_string()),
            FrontmatterValue::Null | FrontmatterValue::Other(_) => None,
        }
    }

    /// Mirrors the usual truthiness of header values: empty strings, zero,
    /// false and null are all "not set"
    pub fn is_truthy(&self) -> bool {
        match self {
            FrontmatterValue::String(s) => !s.is_empty(),
            FrontmatterValue::Integer(i) => *i != 0,
            FrontmatterValue::Float(f) => *f != 0.0,
            FrontmatterValue::Bool(b) => *b,
            FrontmatterValue::Null => false,
            FrontmatterValue::Other(value) => match value {
                serde_yaml::Value::Sequence(seq) => !seq.is_empty(),
                serde_yaml::Value::Mapping(map) => !map.is_empty(),
                _ => true,
            },
        }
    }
}

impl From<serde_yaml::Value> for FrontmatterValue {
    fn from(value: serde_yaml::Value) -> Self {
        match value {
            serde_yaml::Value::Null => FrontmatterValue::Null,
            serde_yaml::Value::Bool(b) => FrontmatterValue::Bool(b),
            serde_yaml::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FrontmatterValue::Integer(i)
                } else {
                    FrontmatterValue::Float(n.as_f64().unwrap_or_default())
                }
            }
            serde_yaml::Value::String(s) => FrontmatterValue::String(s),
            serde_yaml::Value::Tagged(tagged) => FrontmatterValue::from(tagged.value),
            other => FrontmatterValue::Other(other),
        }
    }
}

/// Header fields keyed by name; no schema is enforced at parse time
pub type Frontmatter = HashMap<String, FrontmatterValue>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleImage {
    pub url: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: ArticleImage,
    pub date: String,
    pub author: String,
    pub category: String,
    pub content: String,
    pub blog_url: String,
    pub read_time: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedMeta {
    pub title: String,
    pub description: String,
    pub last_updated: String,
    pub total_articles: usize,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    pub meta: FeedMeta,
    pub articles: Vec<ArticleRecord>,
}

#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub articles_dir: PathBuf,
    pub output_file: PathBuf,
    pub title: String,
    pub description: String,
    pub version: String,
    pub words_per_minute: u32,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            articles_dir: PathBuf::from("content/articles"),
            output_file: PathBuf::from("feed/news-feed.json"),
            title: "SarvadarshiTarang News Feed".to_string(),
            description: "Latest news and updates".to_string(),
            version: "1.0".to_string(),
            words_per_minute: 200,
        }
    }
}

impl FeedConfig {
    /// Defaults overlaid with the optional environment variables:
    /// - `NEWS_FEED_TITLE`
    /// - `NEWS_FEED_DESCRIPTION`
    /// - `NEWS_FEED_WORDS_PER_MINUTE`
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(title) = env::var("NEWS_FEED_TITLE") {
            config.title = title;
        }
        if let Ok(description) = env::var("NEWS_FEED_DESCRIPTION") {
            config.description = description;
        }
        if let Ok(wpm) = env::var("NEWS_FEED_WORDS_PER_MINUTE") {
            config.words_per_minute = match wpm.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(FeedError::Config(format!(
                        "NEWS_FEED_WORDS_PER_MINUTE must be a positive integer, got '{}'",
                        wpm
                    )))
                }
            };
        }

        Ok(config)
    }

    pub fn with_paths(
        mut self,
        articles_dir: impl Into<PathBuf>,
        output_file: impl Into<PathBuf>,
    ) -> Self {
        self.articles_dir = articles_dir.into();
        self.output_file = output_file.into();
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Articles directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("Missing required field '{field}' in {}", path.display())]
    MissingField { field: String, path: PathBuf },

    #[error("Invalid field '{field}' in {}: {reason}", path.display())]
    InvalidField { field: String, path: PathBuf, reason: String },

    #[error("Frontmatter parse error: {0}")]
    Frontmatter(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FeedError>;
