use crate::types::{FeedError, Frontmatter, FrontmatterValue, Result};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

// Opening and closing `---` lines may carry trailing whitespace; the block
// itself is matched lazily so the first closing delimiter wins.
static FRONTMATTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A---\s*\n(.*?)\n---\s*\n(.*)").expect("valid regex"));

/// Splits a markdown document into its YAML header block and body
pub struct FrontmatterParser;

impl FrontmatterParser {
    /// Returns the parsed header mapping and the remaining body text.
    ///
    /// Documents without a leading `---` block yield an empty mapping and the
    /// whole text as body. A block that is not a YAML mapping is an error.
    pub fn split(content: &str) -> Result<(Frontmatter, &str)> {
        let Some(caps) = FRONTMATTER_RE.captures(content) else {
            debug!("No frontmatter block found ({} bytes)", content.len());
            return Ok((Frontmatter::new(), content));
        };

        let block = caps.get(1).map_or("", |m| m.as_str());
        let body = caps.get(2).map_or("", |m| m.as_str());

        let frontmatter = Self::parse_block(block)?;
        debug!("Parsed frontmatter with {} fields", frontmatter.len());

        Ok((frontmatter, body))
    }

    /// Parses the text between the delimiters into a flat field mapping
    pub fn parse_block(block: &str) -> Result<Frontmatter> {
        if block.trim().is_empty() {
            return Ok(Frontmatter::new());
        }

        // A plain map keeps the last value of a repeated key
        let mapping: HashMap<serde_yaml::Value, serde_yaml::Value> =
            match serde_yaml::from_str(block) {
                Ok(mapping) => mapping,
                Err(e) => return Self::classify_failure(block, e),
            };

        let mut frontmatter = Frontmatter::new();
        for (key, value) in mapping {
            let key = match FrontmatterValue::from(key).as_text() {
                Some(key) => key,
                None => {
                    return Err(FeedError::Frontmatter(
                        "Frontmatter keys must be scalars".to_string(),
                    ))
                }
            };
            frontmatter.insert(key, FrontmatterValue::from(value));
        }

        Ok(frontmatter)
    }

    /// Works out why a block did not read as a mapping
    fn classify_failure(block: &str, error: serde_yaml::Error) -> Result<Frontmatter> {
        match serde_yaml::from_str::<serde_yaml::Value>(block) {
            // A block holding only comments parses to null
            Ok(serde_yaml::Value::Null) => Ok(Frontmatter::new()),
            Ok(serde_yaml::Value::Mapping(_)) | Err(_) => Err(FeedError::Frontmatter(format!(
                "Failed to parse YAML: {}",
                error
            ))),
            Ok(other) => Err(FeedError::Frontmatter(format!(
                "Expected a mapping, found {}",
                yaml_kind(&other)
            ))),
        }
    }
}

fn yaml_kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a nested mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}
