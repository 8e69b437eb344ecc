//! Small string shapers shared by tables, receipts and previews.

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

const ELLIPSIS: &str = "...";

/// Cut `text` to at most `max_chars` characters, marking the cut with `...`.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some(_) if max_chars <= ELLIPSIS.len() => text.chars().take(max_chars).collect(),
        Some(_) => {
            let kept: String = text.chars().take(max_chars - ELLIPSIS.len()).collect();
            format!("{}{}", kept.trim_end(), ELLIPSIS)
        }
    }
}

/// First 8 characters of a UUID.
pub fn short_id(id: &Uuid) -> String {
    id.simple().to_string()[..8].to_string()
}

/// Minutes for people, full RFC 3339 seconds for scripts.
pub fn format_datetime(dt: &DateTime<Utc>, pretty: bool) -> String {
    match pretty {
        true => dt.format("%Y-%m-%d %H:%M UTC").to_string(),
        false => dt.to_rfc3339_opts(SecondsFormat::Secs, true),
    }
}

/// Comma-joined tag list, or `-` when there are none.
pub fn format_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        "-".to_string()
    } else {
        tags.join(",")
    }
}

/// Replace newlines so a value fits on one line.
pub fn single_line(s: &str) -> String {
    s.replace('\n', " ").replace('\r', "")
}
