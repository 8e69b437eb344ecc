//! Note row type for database queries.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::crypto::CipherBundle;
use crate::error::{NotesError, Result};
use crate::note::{Note, NoteRecord};

/// Column list matching the field order of `NoteRow`.
pub(super) const NOTE_COLUMNS: &str =
    "id, title, content, pinned, summary, tags_json, payload_json, created_at, updated_at";

/// Raw row data from the notes table, before parsing into domain types.
#[derive(Debug)]
pub struct NoteRow {
    pub id: String,
    pub title: String,
    pub content: Option<String>,
    pub pinned: bool,
    pub summary: String,
    pub tags_json: String,
    pub payload_json: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl NoteRow {
    pub fn from_sql(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            content: row.get(2)?,
            pinned: row.get(3)?,
            summary: row.get(4)?,
            tags_json: row.get(5)?,
            payload_json: row.get(6)?,
            created_at: row.get(7)?,
            updated_at: row.get(8)?,
        })
    }
}

impl TryFrom<NoteRow> for Note {
    type Error = NotesError;

    fn try_from(row: NoteRow) -> Result<Self> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| NotesError::Storage(format!("Invalid note UUID: {}", e)))?;
        let created_at = parse_timestamp(&row.created_at)?;
        let updated_at = parse_timestamp(&row.updated_at)?;
        let tags: Vec<String> = serde_json::from_str(&row.tags_json)
            .map_err(|e| NotesError::Storage(format!("Invalid tags JSON: {}", e)))?;
        let payload: Option<CipherBundle> = row
            .payload_json
            .as_ref()
            .map(|value| {
                serde_json::from_str(value)
                    .map_err(|e| NotesError::Storage(format!("Invalid payload JSON: {}", e)))
            })
            .transpose()?;

        let record = NoteRecord {
            id,
            title: row.title,
            content: row.content,
            pinned: row.pinned,
            summary: row.summary,
            tags,
            encrypted: payload.is_some(),
            encrypted_payload: payload,
            created_at,
            updated_at,
        };

        Note::try_from(record).map_err(|e| NotesError::Storage(e.to_string()))
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value)
        .map_err(|e| NotesError::Storage(format!("Invalid timestamp: {}", e)))?
        .with_timezone(&Utc))
}
