use crate::types::{Feed, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Writes a feed as pretty-printed JSON
pub struct FeedWriter;

impl FeedWriter {
    /// Replaces whatever is at `path`, creating parent directories first
    pub fn write(feed: &Feed, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = Self::to_json(feed)?;
        fs::write(path, &json)?;

        debug!("Wrote {} bytes to {}", json.len(), path.display());
        Ok(())
    }

    /// Two-space indentation, non-ASCII left unescaped
    pub fn to_json(feed: &Feed) -> Result<String> {
        Ok(serde_json::to_string_pretty(feed)?)
    }
}
