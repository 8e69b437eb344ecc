//! Note values and their lifecycle transitions.
//!
//! A `Note` is never edited in place: every change produces a new value
//! from the previous one, which the store then persists with a single row
//! replacement. Readers therefore never see a half-updated note.

use std::collections::HashSet;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::crypto::CipherBundle;
use crate::error::{NotesError, Result};

/// Title given to notes created without one.
pub const DEFAULT_TITLE: &str = "Untitled";

const MAX_TAGS_PER_NOTE: usize = 20;
const MAX_TAG_BYTES: usize = 64;

/// Body of a note: readable markup, or an encrypted bundle.
///
/// "Content absent because encrypted" and "content is empty" are distinct
/// states: `Encrypted(_)` versus `Plain("")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteBody {
    Plain(String),
    Encrypted(CipherBundle),
}

/// A note record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Unique identifier, immutable after creation
    pub id: Uuid,

    pub title: String,

    /// Plaintext content or encrypted payload, never both
    pub body: NoteBody,

    pub pinned: bool,

    /// Normalized tags (lowercase, deduplicated)
    pub tags: Vec<String>,

    /// Short summary (assistant-generated or user-supplied)
    pub summary: String,

    pub created_at: DateTime<Utc>,

    /// Refreshed on every content-affecting change
    pub updated_at: DateTime<Utc>,
}

/// Builder for creating new notes.
#[derive(Debug, Clone, Default)]
pub struct NewNote {
    pub title: Option<String>,
    pub content: String,
    pub tags: Vec<String>,
    pub summary: String,
}

impl NewNote {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }
}

/// A partial update. `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub summary: Option<String>,
}

impl NotePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.tags.is_none() && self.summary.is_none()
    }
}

impl Note {
    /// Create a fresh, unencrypted note.
    pub fn create(new: &NewNote) -> Result<Self> {
        let now = timestamp_now();
        Ok(Self {
            id: Uuid::new_v4(),
            title: normalize_title(new.title.as_deref()),
            body: NoteBody::Plain(new.content.clone()),
            pinned: false,
            tags: normalize_tags(&new.tags)?,
            summary: new.summary.trim().to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn is_encrypted(&self) -> bool {
        matches!(self.body, NoteBody::Encrypted(_))
    }

    /// Plaintext content, or `None` while the note is encrypted.
    pub fn content(&self) -> Option<&str> {
        match &self.body {
            NoteBody::Plain(content) => Some(content),
            NoteBody::Encrypted(_) => None,
        }
    }

    /// Encrypted payload, or `None` while the note is readable.
    pub fn bundle(&self) -> Option<&CipherBundle> {
        match &self.body {
            NoteBody::Plain(_) => None,
            NoteBody::Encrypted(bundle) => Some(bundle),
        }
    }

    /// Produce the note that results from applying `patch`.
    ///
    /// # Errors
    ///
    /// - `NotesError::InvalidState` when the patch replaces the content of an
    ///   encrypted note
    /// - `NotesError::InvalidInput` for invalid tags
    pub fn apply(&self, patch: &NotePatch) -> Result<Self> {
        if patch.is_empty() {
            return Ok(self.clone());
        }
        if patch.content.is_some() && self.is_encrypted() {
            return Err(NotesError::InvalidState(
                "Cannot edit the content of an encrypted note; unlock it first".to_string(),
            ));
        }

        let mut next = self.clone();
        if let Some(ref title) = patch.title {
            next.title = normalize_title(Some(title));
        }
        if let Some(ref content) = patch.content {
            next.body = NoteBody::Plain(content.clone());
        }
        if let Some(ref tags) = patch.tags {
            next.tags = normalize_tags(tags)?;
        }
        if let Some(ref summary) = patch.summary {
            next.summary = summary.trim().to_string();
        }
        next.updated_at = timestamp_now();
        Ok(next)
    }

    /// Pinning is metadata only and leaves `updated_at` alone.
    pub fn toggled_pin(&self) -> Self {
        Self {
            pinned: !self.pinned,
            ..self.clone()
        }
    }

    /// Transition to the encrypted state, dropping the plaintext.
    pub fn sealed(&self, bundle: CipherBundle) -> Result<Self> {
        if self.is_encrypted() {
            return Err(NotesError::InvalidState(
                "Note is already encrypted".to_string(),
            ));
        }
        Ok(Self {
            body: NoteBody::Encrypted(bundle),
            updated_at: timestamp_now(),
            ..self.clone()
        })
    }

    /// Transition back to plaintext, discarding the bundle.
    pub fn unsealed(&self, plaintext: String) -> Result<Self> {
        if !self.is_encrypted() {
            return Err(NotesError::InvalidState("Note is not encrypted".to_string()));
        }
        Ok(Self {
            body: NoteBody::Plain(plaintext),
            updated_at: timestamp_now(),
            ..self.clone()
        })
    }

    /// Case-insensitive match on title and, when readable, content.
    ///
    /// `query` must already be lowercase.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        if self.title.to_lowercase().contains(query) {
            return true;
        }
        self.content()
            .map(|content| content.to_lowercase().contains(query))
            .unwrap_or(false)
    }
}

/// Flat, JSON-friendly form of a note.
///
/// This is the shape used for export: `content` and `encryptedPayload`
/// are both optional, with `encrypted` saying which one is populated.
/// Reading also accepts records saved by the browser app, where
/// `updatedAt` is epoch milliseconds and `createdAt` is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredRecord")]
pub struct NoteRecord {
    pub id: Uuid,
    pub title: String,
    pub content: Option<String>,
    pub pinned: bool,
    pub summary: String,
    pub tags: Vec<String>,
    pub encrypted: bool,
    pub encrypted_payload: Option<CipherBundle>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredRecord {
    id: Uuid,
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    pinned: bool,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    encrypted: bool,
    #[serde(default)]
    encrypted_payload: Option<CipherBundle>,
    #[serde(default)]
    created_at: Option<Timestamp>,
    updated_at: Timestamp,
}

/// RFC 3339 text, or epoch milliseconds as written by `Date.now()`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Timestamp {
    Millis(i64),
    Text(DateTime<Utc>),
}

impl Timestamp {
    fn resolve(self) -> Result<DateTime<Utc>> {
        match self {
            Self::Text(at) => Ok(at),
            Self::Millis(millis) => DateTime::from_timestamp_millis(millis).ok_or_else(|| {
                NotesError::InvalidInput(format!("Timestamp out of range: {}", millis))
            }),
        }
    }
}

impl TryFrom<StoredRecord> for NoteRecord {
    type Error = NotesError;

    fn try_from(stored: StoredRecord) -> Result<Self> {
        let updated_at = stored.updated_at.resolve()?;
        let created_at = match stored.created_at {
            Some(at) => at.resolve()?,
            None => updated_at,
        };
        Ok(Self {
            id: stored.id,
            title: stored.title,
            content: stored.content,
            pinned: stored.pinned,
            summary: stored.summary,
            tags: stored.tags,
            encrypted: stored.encrypted,
            encrypted_payload: stored.encrypted_payload,
            created_at,
            updated_at,
        })
    }
}

impl From<&Note> for NoteRecord {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id,
            title: note.title.clone(),
            content: note.content().map(String::from),
            pinned: note.pinned,
            summary: note.summary.clone(),
            tags: note.tags.clone(),
            encrypted: note.is_encrypted(),
            encrypted_payload: note.bundle().cloned(),
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

impl TryFrom<NoteRecord> for Note {
    type Error = NotesError;

    fn try_from(record: NoteRecord) -> Result<Self> {
        let body = match (record.encrypted, record.encrypted_payload) {
            (false, None) => NoteBody::Plain(record.content.unwrap_or_default()),
            (true, Some(bundle)) => {
                if record.content.as_deref().is_some_and(|c| !c.is_empty()) {
                    return Err(NotesError::InvalidInput(format!(
                        "Note {} has both content and an encrypted payload",
                        record.id
                    )));
                }
                NoteBody::Encrypted(bundle)
            }
            (true, None) => {
                return Err(NotesError::InvalidInput(format!(
                    "Note {} is marked encrypted but has no payload",
                    record.id
                )))
            }
            (false, Some(_)) => {
                return Err(NotesError::InvalidInput(format!(
                    "Note {} has an encrypted payload but is not marked encrypted",
                    record.id
                )))
            }
        };

        Ok(Self {
            id: record.id,
            title: record.title,
            body,
            pinned: record.pinned,
            tags: record.tags,
            summary: record.summary,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

/// Current time at the precision the store persists (microseconds).
pub(crate) fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

fn normalize_title(title: Option<&str>) -> String {
    match title.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => DEFAULT_TITLE.to_string(),
    }
}

/// Trim, lowercase and deduplicate tags, preserving first-seen order.
pub fn normalize_tags(tags: &[String]) -> Result<Vec<String>> {
    if tags.len() > MAX_TAGS_PER_NOTE {
        return Err(NotesError::InvalidInput(format!(
            "Too many tags (max {})",
            MAX_TAGS_PER_NOTE
        )));
    }

    let mut seen = HashSet::with_capacity(tags.len());
    let mut normalized = Vec::with_capacity(tags.len());

    for tag in tags {
        let trimmed = tag.trim().to_lowercase();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.len() > MAX_TAG_BYTES {
            return Err(NotesError::InvalidInput(format!(
                "Tag too long (max {} bytes)",
                MAX_TAG_BYTES
            )));
        }
        if !trimmed
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == ':')
        {
            return Err(NotesError::InvalidInput(format!(
                "Tag \"{}\" may only contain letters, digits, '-', '_' or ':'",
                trimmed
            )));
        }
        if seen.insert(trimmed.clone()) {
            normalized.push(trimmed);
        }
    }

    Ok(normalized)
}
