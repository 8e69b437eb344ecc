//! Password handling for protect and unlock, with retry logic.

use secrecy::{ExposeSecret, SecretString};
use uuid::Uuid;

use notes_core::{validate_password, Note, NoteStore, NotesError};

use crate::constants::UNLOCK_ATTEMPTS;
use crate::errors::{CliError, DECRYPTION_FAILED_MESSAGE};
use crate::helpers::{password_from_env, prompt_new_password, prompt_password};
use crate::ui::{with_spinner, UiContext};

const FORGOTTEN_PASSWORD_HINT: &str =
    "Hint: A forgotten password cannot be recovered. The note stays encrypted.";

/// Encrypt a note under a freshly chosen password.
///
/// The password must satisfy the configured policy before any key is
/// derived.
pub fn protect_with_prompt<S>(
    store: &mut S,
    id: &Uuid,
    ui: &UiContext,
    interactive: bool,
    min_length: usize,
) -> anyhow::Result<Note>
where
    S: NoteStore + ?Sized,
{
    // Fail on state before asking for a password.
    if store.require_note(id)?.is_encrypted() {
        return Err(CliError::invalid_input("Note is already encrypted").into());
    }

    let password = prompt_new_password(interactive)?;
    validate_password(password.expose_secret(), min_length)?;

    let note = with_spinner(ui, "Encrypting note", || {
        store.protect_note(id, password.expose_secret())
    })?;
    Ok(note)
}

/// Decrypt a note, prompting up to three times on a terminal.
///
/// A password from `NOTES_PASSWORD` or a non-interactive session gets a
/// single attempt. Every failure leaves the stored note unchanged.
pub fn unlock_with_retry<S>(
    store: &mut S,
    id: &Uuid,
    ui: &UiContext,
    interactive: bool,
) -> anyhow::Result<Note>
where
    S: NoteStore + ?Sized,
{
    if !store.require_note(id)?.is_encrypted() {
        return Err(CliError::invalid_input("Note is not encrypted").into());
    }

    let env_password = password_from_env();
    let max_attempts: u32 = if interactive && env_password.is_none() {
        UNLOCK_ATTEMPTS
    } else {
        1
    };

    if let Some(password) = env_password {
        return attempt_unlock(store, id, ui, password.expose_secret()).map_err(
            |err| -> anyhow::Error {
                match err {
                    NotesError::DecryptionFailed => {
                        CliError::auth_failed(DECRYPTION_FAILED_MESSAGE).into()
                    }
                    other => other.into(),
                }
            },
        );
    }

    unlock_by_prompt(store, id, ui, max_attempts, || prompt_password(interactive))
}

/// Prompt until the note opens or `max_attempts` passwords have failed.
/// An empty entry counts as a failed attempt.
fn unlock_by_prompt<S, P>(
    store: &mut S,
    id: &Uuid,
    ui: &UiContext,
    max_attempts: u32,
    mut next_password: P,
) -> anyhow::Result<Note>
where
    S: NoteStore + ?Sized,
    P: FnMut() -> anyhow::Result<SecretString>,
{
    for attempt in 1..=max_attempts {
        let password = next_password()?;
        let outcome = if password.expose_secret().is_empty() {
            Err(NotesError::DecryptionFailed)
        } else {
            attempt_unlock(store, id, ui, password.expose_secret())
        };
        match outcome {
            Ok(note) => return Ok(note),
            Err(NotesError::DecryptionFailed) => {
                let remaining = max_attempts - attempt;
                if remaining > 0 {
                    eprintln!(
                        "{} {} attempt{} remaining.",
                        DECRYPTION_FAILED_MESSAGE,
                        remaining,
                        if remaining == 1 { "" } else { "s" }
                    );
                }
            }
            Err(err) => return Err(err.into()),
        }
    }

    let err = if max_attempts > 1 {
        CliError::auth_failed_with_hint(
            "Too many failed password attempts.",
            FORGOTTEN_PASSWORD_HINT,
        )
    } else {
        CliError::auth_failed(DECRYPTION_FAILED_MESSAGE)
    };
    Err(err.into())
}

fn attempt_unlock<S>(
    store: &mut S,
    id: &Uuid,
    ui: &UiContext,
    password: &str,
) -> Result<Note, NotesError>
where
    S: NoteStore + ?Sized,
{
    with_spinner(ui, "Decrypting note", || store.unlock_note(id, password))
}

#[cfg(test)]
mod tests {
    use super::*;
    use notes_core::{NewNote, SqliteNoteStore};

    use crate::ui::OutputMode;

    fn plain_ui() -> UiContext {
        UiContext {
            is_tty: false,
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
        }
    }

    #[test]
    fn test_unlock_plain_note_is_invalid_input() {
        let mut store = SqliteNoteStore::open_in_memory().unwrap();
        let note = store.create_note(&NewNote::new("open")).unwrap();

        let err = unlock_with_retry(&mut store, &note.id, &plain_ui(), false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidInput(_))
        ));
    }

    fn scripted(entries: &[&str]) -> impl FnMut() -> anyhow::Result<SecretString> {
        let mut queue: Vec<SecretString> = entries
            .iter()
            .rev()
            .map(|entry| SecretString::from(entry.to_string()))
            .collect();
        move || Ok(queue.pop().expect("prompted more often than scripted"))
    }

    fn locked_store() -> (SqliteNoteStore, Uuid) {
        let mut store = SqliteNoteStore::open_in_memory().unwrap();
        let note = store.create_note(&NewNote::new("<p>secret</p>")).unwrap();
        store.protect_note(&note.id, "correct-horse").unwrap();
        (store, note.id)
    }

    #[test]
    fn test_empty_entry_uses_an_attempt() {
        let (mut store, id) = locked_store();
        let prompts = scripted(&["", "wrong-horse", "correct-horse"]);

        let note = unlock_by_prompt(&mut store, &id, &plain_ui(), 3, prompts).unwrap();
        assert_eq!(note.content(), Some("<p>secret</p>"));
    }

    #[test]
    fn test_empty_entries_end_as_auth_failure() {
        let (mut store, id) = locked_store();
        let prompts = scripted(&["", "", ""]);

        let err = unlock_by_prompt(&mut store, &id, &plain_ui(), 3, prompts).unwrap_err();
        let cli = err.downcast_ref::<CliError>().unwrap();
        assert!(matches!(cli, CliError::AuthFailed { .. }));
        assert!(store.get_note(&id).unwrap().unwrap().is_encrypted());
    }

    #[test]
    fn test_protect_encrypted_note_is_invalid_input() {
        let mut store = SqliteNoteStore::open_in_memory().unwrap();
        let note = store.create_note(&NewNote::new("secret")).unwrap();
        store.protect_note(&note.id, "correct-horse").unwrap();

        let err =
            protect_with_prompt(&mut store, &note.id, &plain_ui(), false, 8).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidInput(_))
        ));
    }
}
