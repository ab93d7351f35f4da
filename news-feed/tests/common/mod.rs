#![allow(dead_code)]

// Re-export commonly used test types and utilities
pub use news_feed::{FeedConfig, FixedClock, RawDocument};

use chrono::{DateTime, Local, TimeZone};
use std::path::{Path, PathBuf};
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .try_init()
            .ok();
    });
}

/// Fixed instant used wherever a test needs "now"
pub fn frozen_now() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 5, 17, 9, 30, 0)
        .single()
        .expect("unambiguous local time")
}

pub fn frozen_clock() -> FixedClock {
    FixedClock(frozen_now())
}

/// Frontmatter carrying all five required fields plus `extra` lines
pub fn article_source(title: &str, extra: &str, body: &str) -> String {
    format!(
        concat!(
            "---\ntitle: {title}\ndescription: About {title}\nauthor: Jane Doe\n",
            "category: Tech\nblog_url: https://example.com/{title}\n{extra}---\n{body}"
        ),
        title = title,
        extra = extra,
        body = body
    )
}

/// Write `content` to `dir/name`, returning the full path
pub fn write_article(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write article fixture");
    path
}

/// In-memory document with a fixed creation timestamp
pub fn document(file_name: &str, content: &str) -> RawDocument {
    RawDocument {
        path: PathBuf::from("content/articles").join(file_name),
        file_name: file_name.to_string(),
        content: content.to_string(),
        created_at: frozen_now(),
    }
}

/// Config reading from `articles_dir` and writing to `output_file`
pub fn config_for(articles_dir: &Path, output_file: &Path) -> FeedConfig {
    FeedConfig::default().with_paths(articles_dir, output_file)
}

/// `count` space-separated words
pub fn words(count: usize) -> String {
    vec!["word"; count].join(" ")
}
