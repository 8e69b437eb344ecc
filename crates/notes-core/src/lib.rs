//! # Notes Core
//!
//! Core library for Notes - a personal note-taking client with optional
//! per-note password protection.
//!
//! This crate provides the note model, the note cipher, storage abstractions
//! and the offline assistant, independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **crypto**: Password-based key derivation and authenticated note encryption
//! - **note**: Note values, patches and the plaintext/encrypted body state
//! - **store**: Note store trait and the SQLite implementation
//! - **assist**: Best-effort summaries, tags and key terms
//! - **html**: Markup helpers for previews and search

pub mod assist;
pub mod crypto;
pub mod error;
pub mod fs;
pub mod html;
pub mod note;
pub mod store;

pub use assist::{refresh_insights, AssistMode, Assistant, HeuristicAssistant};
pub use crypto::{decrypt, derive_key, encrypt, validate_password, CipherBundle};
pub use error::{NotesError, Result};
pub use note::{NewNote, Note, NoteBody, NotePatch, NoteRecord};
pub use store::{NoteFilter, NoteStore, SqliteNoteStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
