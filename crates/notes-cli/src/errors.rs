//! Failures that end the process with a specific exit code.

use notes_core::NotesError;
use thiserror::Error;

use crate::constants::exit_codes;

/// Message shown for every decryption failure.
pub const DECRYPTION_FAILED_MESSAGE: &str = "Incorrect password or corrupted note.";

/// A failure with a dedicated exit code. A hint, when present, is printed
/// on its own line after the message.
#[derive(Debug, Error)]
pub enum CliError {
    /// Store, config or note is missing
    #[error("{message}\n{hint}")]
    NotFound { message: String, hint: String },

    /// Wrong password, or the attempts ran out
    #[error("{message}{}", with_hint(.hint))]
    AuthFailed {
        message: String,
        hint: Option<String>,
    },

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    IntegrityFailed(String),
}

fn with_hint(hint: &Option<String>) -> String {
    hint.as_ref()
        .map(|text| format!("\n{}", text))
        .unwrap_or_default()
}

impl CliError {
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    pub fn auth_failed(message: impl Into<String>) -> Self {
        Self::AuthFailed {
            message: message.into(),
            hint: None,
        }
    }

    pub fn auth_failed_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::AuthFailed {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// The CLI counterpart of a core error, for the kinds that have their
    /// own exit code. Storage and crypto faults stay generic.
    pub fn from_core(err: &NotesError) -> Option<Self> {
        let mapped = match err {
            NotesError::NoteNotFound(id) => Self::not_found(
                format!("Note {} not found", id),
                "Hint: Run `notes list` to find note IDs.",
            ),
            NotesError::DecryptionFailed => Self::auth_failed(DECRYPTION_FAILED_MESSAGE),
            NotesError::InvalidInput(message) | NotesError::InvalidState(message) => {
                Self::invalid_input(message.as_str())
            }
            _ => return None,
        };
        Some(mapped)
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } => exit_codes::NOT_FOUND,
            Self::AuthFailed { .. } => exit_codes::AUTH_FAILED,
            Self::InvalidInput(_) => exit_codes::INVALID_INPUT,
            Self::IntegrityFailed(_) => exit_codes::INTEGRITY_FAILED,
        }
    }

    /// Report on stderr and terminate.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        std::process::exit(self.exit_code())
    }
}
