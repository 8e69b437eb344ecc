//! Markup helpers.
//!
//! Note content is HTML produced by a rich-text editor. These helpers
//! reduce it to plain text for previews, search and the assistant.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid tag regex"));
static BLOCK_BREAK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<(br\s*/?|/p|/div|/li|/h[1-6])>").expect("valid block regex")
});
static SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").expect("valid space regex"));

/// Strip markup and decode the handful of entities editors emit.
pub fn to_plain_text(html: &str) -> String {
    let with_breaks = BLOCK_BREAK.replace_all(html, "$0\n");
    let stripped = TAG.replace_all(&with_breaks, "");
    let decoded = decode_entities(&stripped);
    let collapsed = SPACES.replace_all(&decoded, " ");
    collapsed
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Single-line plain text preview of at most `max_chars` characters.
pub fn preview(html: &str, max_chars: usize) -> String {
    let plain = to_plain_text(html).replace('\n', " ");
    if plain.chars().count() <= max_chars {
        return plain;
    }
    let truncated: String = plain.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", truncated.trim_end())
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
