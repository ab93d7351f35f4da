/// Text processing utilities
pub mod text {
    /// Default reading speed used for read-time estimates
    pub const WORDS_PER_MINUTE: u32 = 200;

    /// Count whitespace-delimited words
    pub fn word_count(text: &str) -> usize {
        text.split_whitespace().count()
    }

    /// Estimate reading time in whole minutes, never less than one.
    ///
    /// Halves round to even: 500 words at 200 wpm is 2 minutes, 700 is 4.
    pub fn estimate_read_time(text: &str, words_per_minute: u32) -> u32 {
        let minutes = word_count(text) as f64 / words_per_minute.max(1) as f64;
        (minutes.round_ties_even() as u32).max(1)
    }
}

/// Date and time formatting
pub mod time {
    use chrono::{DateTime, Local, SecondsFormat};
    use regex::Regex;
    use std::sync::LazyLock;

    static DATE_PREFIX_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^(\d{4}-\d{2}-\d{2})").expect("valid regex"));

    /// `YYYY-MM-DD` prefix of a file name such as `2024-03-01-launch.md`
    pub fn date_prefix(file_name: &str) -> Option<&str> {
        DATE_PREFIX_RE
            .captures(file_name)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    pub fn format_date(timestamp: &DateTime<Local>) -> String {
        timestamp.format("%Y-%m-%d").to_string()
    }

    /// ISO-8601 timestamp with seconds precision and local offset
    pub fn format_timestamp(timestamp: &DateTime<Local>) -> String {
        timestamp.to_rfc3339_opts(SecondsFormat::Secs, false)
    }
}
