use regex::Regex;
use std::sync::LazyLock;

static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid regex"));
static ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.+?)\*").expect("valid regex"));

/// Renders the small markdown subset used in article bodies: bold, italic and
/// paragraph breaks. Everything else passes through untouched.
///
/// Content is not HTML-escaped, so raw markup in an article body reaches the
/// feed as-is.
pub struct MiniMarkdownRenderer;

impl MiniMarkdownRenderer {
    pub fn render(markdown: &str) -> String {
        // Bold runs first so that `**x**` never reaches the italic pass
        let html = BOLD_RE.replace_all(markdown, "<strong>${1}</strong>");
        let html = ITALIC_RE.replace_all(&html, "<em>${1}</em>");
        let html = html.replace("\n\n", "</p><p>");

        format!("<p>{}</p>", html).replace("<p></p>", "")
    }
}
