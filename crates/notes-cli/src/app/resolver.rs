//! Path and note ID resolution.

use std::path::{Path, PathBuf};

use notes_core::{NoteFilter, NoteStore};
use uuid::Uuid;

use crate::cli::Cli;
use crate::config::{default_config_path, default_store_path, NotesConfig};
use crate::constants::{CONFIG_ENV, MIN_ID_PREFIX};
use crate::errors::CliError;

/// Resolve the config file path, checking `NOTES_CONFIG` first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the store path: `--store` / `NOTES_PATH`, then config, then the XDG default.
pub fn resolve_store_path(cli: &Cli, config: &NotesConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.store.clone() {
        return Ok(path);
    }
    if let Some(path) = config.store.path.as_deref() {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    default_store_path()
}

/// Error returned when the store file does not exist.
pub fn missing_store_error(path: &Path) -> CliError {
    CliError::not_found(
        format!("No notes store found at {}", path.display()),
        "\nRun:\n  notes init\n\nOr specify a store path:\n  NOTES_PATH=/path/to/notes.db notes init",
    )
}

/// Resolve a full UUID or a unique prefix to a note ID.
pub fn resolve_note_id<S>(store: &S, raw: &str) -> anyhow::Result<Uuid>
where
    S: NoteStore + ?Sized,
{
    let raw = raw.trim();
    if let Ok(id) = Uuid::parse_str(raw) {
        return Ok(id);
    }

    let prefix = raw.to_lowercase();
    if prefix.chars().count() < MIN_ID_PREFIX {
        return Err(CliError::invalid_input(format!(
            "ID prefix must be at least {} characters: {}",
            MIN_ID_PREFIX, raw
        ))
        .into());
    }

    let matches: Vec<Uuid> = store
        .list_notes(&NoteFilter::new())?
        .into_iter()
        .map(|note| note.id)
        .filter(|id| id.to_string().starts_with(&prefix))
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(CliError::not_found(
            format!("No note matches ID {}", raw),
            "Hint: Run `notes list` to find note IDs.",
        )
        .into()),
        many => Err(CliError::invalid_input(format!(
            "ID prefix {} is ambiguous ({} notes match); use more characters",
            raw,
            many.len()
        ))
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use notes_core::{NewNote, SqliteNoteStore};

    #[test]
    fn test_store_flag_beats_config() {
        let cli = Cli::try_parse_from(["notes", "--store", "/tmp/flag.db", "check"]).unwrap();
        let config = NotesConfig::new(PathBuf::from("/tmp/config.db"), None);
        assert_eq!(
            resolve_store_path(&cli, &config).unwrap(),
            PathBuf::from("/tmp/flag.db")
        );
    }

    #[test]
    fn test_missing_store_error_suggests_init() {
        let err = missing_store_error(Path::new("/tmp/none.db"));
        assert!(err.to_string().contains("notes init"));
    }

    #[test]
    fn test_resolve_note_id_by_prefix() {
        let mut store = SqliteNoteStore::open_in_memory().unwrap();
        let note = store.create_note(&NewNote::new("hello")).unwrap();
        let full = note.id.to_string();

        assert_eq!(resolve_note_id(&store, &full).unwrap(), note.id);
        assert_eq!(resolve_note_id(&store, &full[..8]).unwrap(), note.id);
        assert_eq!(
            resolve_note_id(&store, &full[..6].to_uppercase()).unwrap(),
            note.id
        );
    }

    #[test]
    fn test_resolve_note_id_rejects_short_or_unknown() {
        let mut store = SqliteNoteStore::open_in_memory().unwrap();
        store.create_note(&NewNote::new("hello")).unwrap();

        let short = resolve_note_id(&store, "ab").unwrap_err();
        assert!(short.downcast_ref::<CliError>().is_some());

        let unknown = resolve_note_id(&store, "zzzzzzzz").unwrap_err();
        assert!(matches!(
            unknown.downcast_ref::<CliError>(),
            Some(CliError::NotFound { .. })
        ));
    }
}
