//! Query and metadata types for the storage layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata for a note store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreMetadata {
    /// Format version (e.g., "1")
    pub format_version: String,

    /// When this store was created
    pub created_at: DateTime<Utc>,

    /// Number of notes currently stored
    pub note_count: usize,

    /// How many of those are encrypted
    pub encrypted_count: usize,
}

/// Filter for listing notes.
#[derive(Debug, Clone, Default)]
pub struct NoteFilter {
    /// Only notes carrying this tag
    pub tag: Option<String>,

    /// Only pinned notes
    pub pinned_only: bool,

    /// `Some(true)` for encrypted notes only, `Some(false)` for plaintext only
    pub encrypted: Option<bool>,

    /// Maximum number of results
    pub limit: Option<usize>,
}

impl NoteFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn pinned_only(mut self) -> Self {
        self.pinned_only = true;
        self
    }

    pub fn encrypted(mut self, encrypted: bool) -> Self {
        self.encrypted = Some(encrypted);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
