//! Error types for Notes core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages and exit codes.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for Notes operations.
pub type Result<T> = std::result::Result<T, NotesError>;

/// Core error type for Notes operations.
#[derive(Debug, Error)]
pub enum NotesError {
    /// Wrong password or corrupted/tampered payload.
    ///
    /// The two causes are indistinguishable.
    #[error("Decryption failed")]
    DecryptionFailed,

    /// Cryptographic primitives (randomness, cipher engine) are unavailable
    #[error("Cryptography unavailable: {0}")]
    PlatformUnavailable(String),

    /// Invalid caller input (empty password, malformed patch, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Operation not allowed in the note's current state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Note not found by ID
    #[error("Note not found: {0}")]
    NoteNotFound(Uuid),

    /// Storage backend error (generic)
    #[error("Storage error: {0}")]
    Storage(String),

    /// SQLite-specific storage error
    #[error("SQLite error: {source}")]
    Sqlite {
        #[from]
        source: rusqlite::Error,
    },

    /// Assistant request failed
    #[error("Assistant error: {0}")]
    Assist(String),

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decryption_failed_message_is_fixed() {
        assert_eq!(NotesError::DecryptionFailed.to_string(), "Decryption failed");
    }

    #[test]
    fn test_io_error_converts() {
        let err: NotesError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, NotesError::Io { .. }));
        assert!(err.to_string().contains("gone"));
    }
}
