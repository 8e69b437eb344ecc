//! Note store trait definition.
//!
//! The `NoteStore` trait is the persistence seam for notes. Backends only
//! implement row-level operations; the protect / unlock lifecycle is built
//! on top of them here so every backend shares one implementation.

use uuid::Uuid;

use super::types::{NoteFilter, StoreMetadata};
use crate::crypto::{decrypt, encrypt};
use crate::error::{NotesError, Result};
use crate::note::{NewNote, Note, NotePatch};

/// Storage interface for notes.
///
/// All implementations must ensure:
/// - A stored note holds plaintext content or an encrypted payload, never both
/// - Every mutation replaces a note's row in a single statement
/// - UUIDs are used for all identifiers
pub trait NoteStore: Send + Sync {
    /// Get store metadata.
    fn metadata(&self) -> Result<StoreMetadata>;

    /// Create a new, unencrypted note.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::InvalidInput` if the tags are invalid.
    fn create_note(&mut self, note: &NewNote) -> Result<Note>;

    /// Get a note by ID.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(note))` if found, `Ok(None)` if not found.
    fn get_note(&self, id: &Uuid) -> Result<Option<Note>>;

    /// Apply a patch and persist the resulting note.
    ///
    /// # Errors
    ///
    /// - `NotesError::NoteNotFound` if no note has this ID
    /// - `NotesError::InvalidState` if the patch edits an encrypted note's content
    fn update_note(&mut self, id: &Uuid, patch: &NotePatch) -> Result<Note> {
        let current = self.require_note(id)?;
        let next = current.apply(patch)?;
        if next != current {
            self.replace_note(&next)?;
        }
        Ok(next)
    }

    /// Delete a note.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::NoteNotFound` if no note has this ID.
    fn delete_note(&mut self, id: &Uuid) -> Result<()>;

    /// Flip the pinned flag. `updated_at` is left unchanged.
    fn toggle_pin(&mut self, id: &Uuid) -> Result<Note> {
        let next = self.require_note(id)?.toggled_pin();
        self.replace_note(&next)?;
        Ok(next)
    }

    /// List notes matching the filter.
    ///
    /// Pinned notes come first, then the most recently updated.
    fn list_notes(&self, filter: &NoteFilter) -> Result<Vec<Note>>;

    /// Case-insensitive search over titles and plaintext content.
    ///
    /// Encrypted notes match on title only. An empty query returns every
    /// note, in list order.
    fn search_notes(&self, query: &str) -> Result<Vec<Note>>;

    /// Overwrite a stored note with a new value in one step.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::NoteNotFound` if no note has this ID.
    fn replace_note(&mut self, note: &Note) -> Result<()>;

    /// Check store integrity.
    ///
    /// Verifies:
    /// - Backend consistency
    /// - Required metadata
    /// - Every stored note satisfies the content/payload invariant
    fn check_integrity(&self) -> Result<()>;

    /// Like `get_note`, but a missing note is an error.
    fn require_note(&self, id: &Uuid) -> Result<Note> {
        self.get_note(id)?.ok_or(NotesError::NoteNotFound(*id))
    }

    /// Encrypt a note's content under `password`.
    ///
    /// The plaintext is replaced by the bundle in one row replacement.
    /// Password policy is the caller's concern.
    ///
    /// # Errors
    ///
    /// - `NotesError::NoteNotFound` if no note has this ID
    /// - `NotesError::InvalidState` if the note is already encrypted
    /// - `NotesError::InvalidInput` if the password is empty
    fn protect_note(&mut self, id: &Uuid, password: &str) -> Result<Note> {
        let current = self.require_note(id)?;
        let content = current.content().ok_or_else(|| {
            NotesError::InvalidState("Note is already encrypted".to_string())
        })?;

        let bundle = encrypt(content, password)?;
        let sealed = current.sealed(bundle)?;
        self.replace_note(&sealed)?;

        tracing::debug!(note_id = %id, "Note protected");
        Ok(sealed)
    }

    /// Decrypt a note and store its plaintext again.
    ///
    /// On failure the stored note is left untouched.
    ///
    /// # Errors
    ///
    /// - `NotesError::NoteNotFound` if no note has this ID
    /// - `NotesError::InvalidState` if the note is not encrypted
    /// - `NotesError::DecryptionFailed` for a wrong password or a damaged payload
    fn unlock_note(&mut self, id: &Uuid, password: &str) -> Result<Note> {
        let current = self.require_note(id)?;
        let bundle = current
            .bundle()
            .ok_or_else(|| NotesError::InvalidState("Note is not encrypted".to_string()))?;

        let plaintext = match decrypt(bundle, password) {
            Ok(plaintext) => plaintext,
            Err(err) => {
                tracing::debug!(note_id = %id, "Unlock rejected");
                return Err(err);
            }
        };
        let opened = current.unsealed(plaintext)?;
        self.replace_note(&opened)?;

        tracing::debug!(note_id = %id, "Note unlocked");
        Ok(opened)
    }
}
