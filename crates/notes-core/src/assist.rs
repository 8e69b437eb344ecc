//! Note assistant: summaries, tag suggestions and key terms.
//!
//! The assistant is best-effort. Its output only ever fills in metadata,
//! so a failing assistant must never block saving a note.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use crate::error::{NotesError, Result};
use crate::html::to_plain_text;
use crate::note::{normalize_tags, Note, NotePatch};
use crate::store::NoteStore;

const SUMMARY_SENTENCE_LIMIT: usize = 200;
const SUMMARY_FALLBACK_CHARS: usize = 120;
const MAX_SUGGESTED_TAGS: usize = 5;
const FALLBACK_WORD_WINDOW: usize = 10;
const MAX_TERMS: usize = 6;
const MIN_TERM_CHARS: usize = 4;

const TAG_CANDIDATES: &[&str] = &[
    "todo", "idea", "meeting", "project", "summary", "bug", "note", "research",
];

static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.?!]\s").expect("valid sentence regex"));
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").expect("valid word regex"));

/// What the assistant should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssistMode {
    #[default]
    Summarize,
    Tags,
    Terms,
}

impl AssistMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssistMode::Summarize => "summarize",
            AssistMode::Tags => "tags",
            AssistMode::Terms => "terms",
        }
    }
}

impl fmt::Display for AssistMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssistMode {
    type Err = NotesError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "summarize" | "summary" => Ok(AssistMode::Summarize),
            "tags" => Ok(AssistMode::Tags),
            "terms" => Ok(AssistMode::Terms),
            other => Err(NotesError::InvalidInput(format!(
                "Unknown assist mode: {}",
                other
            ))),
        }
    }
}

/// Something that can turn note text into a summary, tags or terms.
///
/// `Tags` and `Terms` results are comma-separated.
pub trait Assistant: Send + Sync {
    fn run(&self, mode: AssistMode, text: &str) -> Result<String>;
}

/// Offline assistant built from simple text heuristics.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAssistant;

impl Assistant for HeuristicAssistant {
    fn run(&self, mode: AssistMode, text: &str) -> Result<String> {
        let plain = to_plain_text(text).replace('\n', " ");
        Ok(match mode {
            AssistMode::Summarize => summarize(&plain),
            AssistMode::Tags => suggest_tags(&plain).join(", "),
            AssistMode::Terms => key_terms(&plain).join(", "),
        })
    }
}

fn summarize(plain: &str) -> String {
    let plain = plain.trim();
    if plain.is_empty() {
        return String::new();
    }

    let first = SENTENCE_END.split(plain).next().unwrap_or("");
    let length = first.chars().count();
    if length > 0 && length < SUMMARY_SENTENCE_LIMIT {
        if first.ends_with('.') {
            return first.to_string();
        }
        return format!("{}.", first);
    }

    let head: String = plain.chars().take(SUMMARY_FALLBACK_CHARS).collect();
    if plain.chars().count() > SUMMARY_FALLBACK_CHARS {
        format!("{}...", head)
    } else {
        head
    }
}

fn words(plain: &str) -> impl Iterator<Item = String> + '_ {
    NON_WORD
        .split(plain)
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
}

fn suggest_tags(plain: &str) -> Vec<String> {
    let lower = plain.to_lowercase();
    let picks: Vec<String> = TAG_CANDIDATES
        .iter()
        .filter(|candidate| lower.contains(*candidate))
        .take(MAX_SUGGESTED_TAGS)
        .map(|candidate| candidate.to_string())
        .collect();
    if !picks.is_empty() {
        return picks;
    }

    let mut fallback: Vec<String> = Vec::new();
    for word in words(plain).take(FALLBACK_WORD_WINDOW) {
        if !fallback.contains(&word) {
            fallback.push(word);
        }
    }
    fallback.truncate(MAX_SUGGESTED_TAGS);
    fallback
}

fn key_terms(plain: &str) -> Vec<String> {
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (position, word) in words(plain).enumerate() {
        if word.chars().count() < MIN_TERM_CHARS || !word.chars().all(char::is_alphabetic) {
            continue;
        }
        counts.entry(word).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(String, (usize, usize))> = counts.into_iter().collect();
    // Most frequent first; ties keep reading order.
    ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
    ranked
        .into_iter()
        .take(MAX_TERMS)
        .map(|(word, _)| word)
        .collect()
}

/// Split a comma-separated assistant answer into trimmed items.
pub fn split_list(answer: &str) -> Vec<String> {
    answer
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

/// Regenerate a note's summary and tags.
///
/// Encrypted notes are returned untouched. A failing assistant is logged
/// and the note keeps its previous values for that field.
pub fn refresh_insights<S>(store: &mut S, id: &Uuid, assistant: &dyn Assistant) -> Result<Note>
where
    S: NoteStore + ?Sized,
{
    let note = store.require_note(id)?;
    let content = match note.content() {
        Some(content) => content.to_string(),
        None => {
            tracing::debug!(note_id = %id, "Skipping insights for encrypted note");
            return Ok(note);
        }
    };

    let mut patch = NotePatch::new();

    match assistant.run(AssistMode::Summarize, &content) {
        Ok(summary) => patch = patch.summary(summary),
        Err(err) => tracing::warn!(note_id = %id, error = %err, "Summary generation failed"),
    }

    match assistant.run(AssistMode::Tags, &content) {
        Ok(answer) => {
            // Drop suggestions that would not pass tag validation.
            let tags: Vec<String> = split_list(&answer)
                .into_iter()
                .filter(|tag| normalize_tags(std::slice::from_ref(tag)).is_ok())
                .collect();
            patch = patch.tags(tags);
        }
        Err(err) => tracing::warn!(note_id = %id, error = %err, "Tag suggestion failed"),
    }

    if patch.is_empty() {
        return Ok(note);
    }
    store.update_note(id, &patch)
}
