use crate::markdown::MiniMarkdownRenderer;
use crate::parser::FrontmatterParser;
use crate::types::{
    ArticleImage, ArticleRecord, FeedError, Frontmatter, FrontmatterValue, RawDocument, Result,
};
use crate::utils::{text, time};
use std::path::Path;
use tracing::debug;

/// Header fields every article must carry
pub const REQUIRED_FIELDS: [&str; 5] = ["title", "description", "author", "category", "blog_url"];

/// Turns one markdown document into a validated article record
pub struct ArticleRecordBuilder {
    words_per_minute: u32,
}

impl ArticleRecordBuilder {
    pub fn new() -> Self {
        Self {
            words_per_minute: text::WORDS_PER_MINUTE,
        }
    }

    pub fn with_words_per_minute(mut self, words_per_minute: u32) -> Self {
        self.words_per_minute = words_per_minute;
        self
    }

    pub fn build(&self, document: &RawDocument) -> Result<ArticleRecord> {
        let (frontmatter, body) = FrontmatterParser::split(&document.content)?;
        let path = document.path.as_path();

        // Checked in REQUIRED_FIELDS order, first missing one is reported
        let title = required_text(&frontmatter, "title", path)?;
        let description = required_text(&frontmatter, "description", path)?;
        let author = required_text(&frontmatter, "author", path)?;
        let category = required_text(&frontmatter, "category", path)?;
        let blog_url = required_text(&frontmatter, "blog_url", path)?;

        // Filename prefix wins over the header, which wins over the file timestamp
        let date = match time::date_prefix(&document.file_name) {
            Some(prefix) => prefix.to_string(),
            None => match optional_text(&frontmatter, "date") {
                Some(date) => date,
                None => time::format_date(&document.created_at),
            },
        };

        let content = MiniMarkdownRenderer::render(body);

        let read_time = match explicit_read_time(&frontmatter) {
            Some(minutes) => minutes,
            None => text::estimate_read_time(body, self.words_per_minute),
        };

        let id = frontmatter
            .get("id")
            .filter(|value| value.is_truthy())
            .and_then(FrontmatterValue::as_text)
            .unwrap_or_else(|| article_slug(&document.file_name));

        let image = ArticleImage {
            url: optional_text(&frontmatter, "image_url").unwrap_or_default(),
            alt: optional_text(&frontmatter, "image_alt").unwrap_or_else(|| title.clone()),
        };

        debug!("Built article {} ({} min read, dated {})", id, read_time, date);

        Ok(ArticleRecord {
            id,
            title,
            description,
            image,
            date,
            author,
            category,
            content,
            blog_url,
            read_time,
        })
    }
}

impl Default for ArticleRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// File name without its `.md` extension
pub fn article_slug(file_name: &str) -> String {
    file_name
        .strip_suffix(".md")
        .unwrap_or(file_name)
        .to_string()
}

fn required_text(frontmatter: &Frontmatter, field: &str, path: &Path) -> Result<String> {
    match frontmatter.get(field) {
        None | Some(FrontmatterValue::Null) => Err(FeedError::MissingField {
            field: field.to_string(),
            path: path.to_path_buf(),
        }),
        Some(value) => value.as_text().ok_or_else(|| FeedError::InvalidField {
            field: field.to_string(),
            path: path.to_path_buf(),
            reason: "expected a scalar value".to_string(),
        }),
    }
}

fn optional_text(frontmatter: &Frontmatter, field: &str) -> Option<String> {
    frontmatter.get(field).and_then(FrontmatterValue::as_text)
}

/// A header `read_time` counts only when it is truthy and a positive whole
/// number of minutes can be read from it
fn explicit_read_time(frontmatter: &Frontmatter) -> Option<u32> {
    let value = frontmatter.get("read_time").filter(|value| value.is_truthy())?;

    let minutes = match value {
        FrontmatterValue::Integer(i) => *i,
        FrontmatterValue::Float(f) => f.trunc() as i64,
        FrontmatterValue::String(s) => s.trim().parse::<i64>().ok()?,
        _ => return None,
    };

    u32::try_from(minutes).ok().filter(|minutes| *minutes > 0)
}
