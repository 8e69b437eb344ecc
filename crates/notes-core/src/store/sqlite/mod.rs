//! SQLite storage backend.
//!
//! Notes live in a single `notes` table. Encrypted notes keep their
//! `CipherBundle` as JSON in `payload_json` and a NULL `content`; a table
//! constraint rejects any row holding both or neither.

mod row;

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::error::{NotesError, Result};
use crate::note::{timestamp_now, NewNote, Note, NoteBody};
use crate::store::traits::NoteStore;
use crate::store::types::{NoteFilter, StoreMetadata};

use row::{NoteRow, NOTE_COLUMNS};

/// Current on-disk format version.
pub const FORMAT_VERSION: &str = "1";

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS meta (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS notes (
        id TEXT PRIMARY KEY,
        title TEXT NOT NULL,
        content TEXT,
        pinned INTEGER NOT NULL DEFAULT 0,
        summary TEXT NOT NULL DEFAULT '',
        tags_json TEXT NOT NULL DEFAULT '[]',
        payload_json TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,

        CHECK ((content IS NULL) != (payload_json IS NULL))
    );

    CREATE INDEX IF NOT EXISTS idx_notes_order ON notes(pinned DESC, updated_at DESC);
"#;

/// SQLite-backed note store.
pub struct SqliteNoteStore {
    path: Option<PathBuf>,
    conn: Mutex<Connection>,
}

impl SqliteNoteStore {
    /// Open the store at `path`, creating the file and schema on first use.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        let store = Self::init(conn, Some(path.to_path_buf()))?;
        tracing::debug!(path = %path.display(), "Opened note store");
        Ok(store)
    }

    /// Open a throwaway store that lives only as long as the value.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?, None)
    }

    /// Location of the database file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn init(conn: Connection, path: Option<PathBuf>) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;

        let existing: Option<String> = conn
            .query_row(
                "SELECT value FROM meta WHERE key = 'format_version'",
                [],
                |row| row.get(0),
            )
            .optional()?;
        match existing.as_deref() {
            Some(FORMAT_VERSION) => {}
            Some(other) => {
                return Err(NotesError::Storage(format!(
                    "Unsupported store format version: {}",
                    other
                )))
            }
            None => {
                conn.execute(
                    "INSERT INTO meta (key, value) VALUES ('format_version', ?1), ('created_at', ?2)",
                    params![FORMAT_VERSION, format_timestamp(&timestamp_now())],
                )?;
            }
        }

        Ok(Self {
            path,
            conn: Mutex::new(conn),
        })
    }

    /// Lock the database connection, returning an error if the mutex is poisoned.
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| NotesError::Storage("SQLite connection poisoned".to_string()))
    }

    /// Rows that fail validation are skipped with a warning so one damaged
    /// note cannot hide the rest. `check_integrity` reports them.
    fn query_notes(
        conn: &Connection,
        sql: &str,
        params: &[Box<dyn rusqlite::ToSql>],
    ) -> Result<Vec<Note>> {
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(rusqlite::params_from_iter(params.iter()), NoteRow::from_sql)?;

        let mut notes = Vec::new();
        for row in rows {
            let row = row?;
            let id = row.id.clone();
            match Note::try_from(row) {
                Ok(note) => notes.push(note),
                Err(err) => {
                    tracing::warn!(note_id = %id, error = %err, "Skipping invalid note row")
                }
            }
        }
        Ok(notes)
    }
}

/// Serialized columns that depend on the note body.
struct NoteColumns {
    content: Option<String>,
    tags_json: String,
    payload_json: Option<String>,
}

impl NoteColumns {
    fn of(note: &Note) -> Result<Self> {
        let (content, payload_json) = match &note.body {
            NoteBody::Plain(content) => (Some(content.clone()), None),
            NoteBody::Encrypted(bundle) => (None, Some(serde_json::to_string(bundle)?)),
        };
        Ok(Self {
            content,
            tags_json: serde_json::to_string(&note.tags)?,
            payload_json,
        })
    }
}

fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Micros, true)
}

impl NoteStore for SqliteNoteStore {
    fn metadata(&self) -> Result<StoreMetadata> {
        let conn = self.lock_conn()?;

        let format_version: String = conn.query_row(
            "SELECT value FROM meta WHERE key = 'format_version'",
            [],
            |row| row.get(0),
        )?;
        let created_at: String = conn.query_row(
            "SELECT value FROM meta WHERE key = 'created_at'",
            [],
            |row| row.get(0),
        )?;
        let created_at = DateTime::parse_from_rfc3339(&created_at)
            .map_err(|e| NotesError::Storage(format!("Invalid created_at: {}", e)))?
            .with_timezone(&Utc);
        let (note_count, encrypted_count): (i64, i64) = conn.query_row(
            "SELECT COUNT(*), COUNT(payload_json) FROM notes",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;

        Ok(StoreMetadata {
            format_version,
            created_at,
            note_count: note_count as usize,
            encrypted_count: encrypted_count as usize,
        })
    }

    fn create_note(&mut self, new: &NewNote) -> Result<Note> {
        let note = Note::create(new)?;
        let columns = NoteColumns::of(&note)?;

        let conn = self.lock_conn()?;
        conn.execute(
            &format!(
                "INSERT INTO notes ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                NOTE_COLUMNS
            ),
            params![
                note.id.to_string(),
                note.title,
                columns.content,
                note.pinned,
                note.summary,
                columns.tags_json,
                columns.payload_json,
                format_timestamp(&note.created_at),
                format_timestamp(&note.updated_at),
            ],
        )?;

        tracing::debug!(note_id = %note.id, "Note created");
        Ok(note)
    }

    fn get_note(&self, id: &Uuid) -> Result<Option<Note>> {
        let conn = self.lock_conn()?;

        let row = conn
            .query_row(
                &format!("SELECT {} FROM notes WHERE id = ?1", NOTE_COLUMNS),
                [id.to_string()],
                NoteRow::from_sql,
            )
            .optional()?;

        row.map(Note::try_from).transpose()
    }

    fn delete_note(&mut self, id: &Uuid) -> Result<()> {
        let conn = self.lock_conn()?;
        let deleted = conn.execute("DELETE FROM notes WHERE id = ?1", [id.to_string()])?;
        if deleted == 0 {
            return Err(NotesError::NoteNotFound(*id));
        }
        tracing::debug!(note_id = %id, "Note deleted");
        Ok(())
    }

    fn list_notes(&self, filter: &NoteFilter) -> Result<Vec<Note>> {
        let conn = self.lock_conn()?;

        let mut conditions: Vec<&str> = Vec::new();
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(ref tag) = filter.tag {
            let normalized = tag.trim().to_lowercase();
            if normalized.is_empty() {
                return Err(NotesError::InvalidInput("Invalid tag filter".to_string()));
            }
            conditions.push("EXISTS (SELECT 1 FROM json_each(n.tags_json) WHERE value = ?)");
            params.push(Box::new(normalized));
        }

        if filter.pinned_only {
            conditions.push("n.pinned = 1");
        }

        match filter.encrypted {
            Some(true) => conditions.push("n.payload_json IS NOT NULL"),
            Some(false) => conditions.push("n.payload_json IS NULL"),
            None => {}
        }

        let mut query = format!("SELECT {} FROM notes n", NOTE_COLUMNS);
        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }
        query.push_str(" ORDER BY n.pinned DESC, n.updated_at DESC, n.id");

        if let Some(limit) = filter.limit {
            query.push_str(" LIMIT ?");
            params.push(Box::new(limit as i64));
        }

        Self::query_notes(&conn, &query, &params)
    }

    fn search_notes(&self, query: &str) -> Result<Vec<Note>> {
        let needle = query.trim().to_lowercase();
        let notes = self.list_notes(&NoteFilter::default())?;
        // SQLite's LOWER() only folds ASCII, so matching happens here.
        Ok(notes.into_iter().filter(|note| note.matches(&needle)).collect())
    }

    fn replace_note(&mut self, note: &Note) -> Result<()> {
        let columns = NoteColumns::of(note)?;

        let conn = self.lock_conn()?;
        let updated = conn.execute(
            r#"
            UPDATE notes
            SET title = ?2, content = ?3, pinned = ?4, summary = ?5,
                tags_json = ?6, payload_json = ?7, updated_at = ?8
            WHERE id = ?1
            "#,
            params![
                note.id.to_string(),
                note.title,
                columns.content,
                note.pinned,
                note.summary,
                columns.tags_json,
                columns.payload_json,
                format_timestamp(&note.updated_at),
            ],
        )?;
        if updated == 0 {
            return Err(NotesError::NoteNotFound(note.id));
        }
        Ok(())
    }

    fn check_integrity(&self) -> Result<()> {
        let conn = self.lock_conn()?;

        let status: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
        if status != "ok" {
            return Err(NotesError::Storage(format!(
                "SQLite integrity check failed: {}",
                status
            )));
        }

        let metadata_count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM meta WHERE key IN ('format_version', 'created_at')",
            [],
            |row| row.get(0),
        )?;
        if metadata_count < 2 {
            return Err(NotesError::Storage(
                "Metadata table missing required keys".to_string(),
            ));
        }

        let mut stmt = conn.prepare(&format!("SELECT {} FROM notes", NOTE_COLUMNS))?;
        let rows = stmt.query_map([], NoteRow::from_sql)?;
        for row in rows {
            let row = row?;
            let id = row.id.clone();
            Note::try_from(row)
                .map_err(|e| NotesError::Storage(format!("Note {} is invalid: {}", id, e)))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::NotePatch;

    #[test]
    fn test_open_in_memory_records_format_version() {
        let store = SqliteNoteStore::open_in_memory().unwrap();
        let metadata = store.metadata().unwrap();
        assert_eq!(metadata.format_version, FORMAT_VERSION);
        assert_eq!(metadata.note_count, 0);
        assert!(store.path().is_none());
    }

    #[test]
    fn test_create_and_get() {
        let mut store = SqliteNoteStore::open_in_memory().unwrap();
        let note = store
            .create_note(&NewNote::new("<p>hello</p>").with_tags(vec!["Work".to_string()]))
            .unwrap();

        let loaded = store.get_note(&note.id).unwrap().unwrap();
        assert_eq!(loaded, note);
        assert_eq!(loaded.tags, vec!["work".to_string()]);
        assert!(store.get_note(&Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn test_check_constraint_rejects_both_columns() {
        let store = SqliteNoteStore::open_in_memory().unwrap();
        let conn = store.lock_conn().unwrap();
        let result = conn.execute(
            "INSERT INTO notes (id, title, content, payload_json, created_at, updated_at) VALUES ('x', 't', 'c', '{}', 'now', 'now')",
            [],
        );
        assert!(result.is_err());

        let result = conn.execute(
            "INSERT INTO notes (id, title, created_at, updated_at) VALUES ('y', 't', 'now', 'now')",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_replace_missing_note_fails() {
        let mut store = SqliteNoteStore::open_in_memory().unwrap();
        let note = Note::create(&NewNote::new("orphan")).unwrap();
        assert!(matches!(
            store.replace_note(&note),
            Err(NotesError::NoteNotFound(id)) if id == note.id
        ));
    }

    #[test]
    fn test_noop_patch_keeps_row() {
        let mut store = SqliteNoteStore::open_in_memory().unwrap();
        let note = store.create_note(&NewNote::new("same")).unwrap();
        let unchanged = store.update_note(&note.id, &NotePatch::new()).unwrap();
        assert_eq!(unchanged.updated_at, note.updated_at);
    }

    #[test]
    fn test_integrity_flags_corrupt_row() {
        let store = SqliteNoteStore::open_in_memory().unwrap();
        store.check_integrity().unwrap();

        {
            let conn = store.lock_conn().unwrap();
            conn.execute(
                "INSERT INTO notes (id, title, content, created_at, updated_at) VALUES ('not-a-uuid', 't', '', 'now', 'now')",
                [],
            )
            .unwrap();
        }

        assert!(matches!(
            store.check_integrity(),
            Err(NotesError::Storage(_))
        ));
    }

    #[test]
    fn test_listing_skips_invalid_rows() {
        let mut store = SqliteNoteStore::open_in_memory().unwrap();
        let good = store
            .create_note(&NewNote::new("<p>budget review</p>").with_title("Budget"))
            .unwrap();
        {
            let conn = store.lock_conn().unwrap();
            conn.execute(
                "INSERT INTO notes (id, title, content, created_at, updated_at) VALUES ('bad', 'Broken', '', 'now', 'now')",
                [],
            )
            .unwrap();
        }

        let listed = store.list_notes(&NoteFilter::default()).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, good.id);

        let found = store.search_notes("budget").unwrap();
        assert_eq!(found.len(), 1);

        assert!(store.check_integrity().is_err());
    }
}
