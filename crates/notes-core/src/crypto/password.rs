//! Password policy.
//!
//! Applied before a note is protected. Unlocking never re-checks the
//! policy, so notes protected under an older policy stay reachable.

use crate::error::{NotesError, Result};

/// Default minimum password length in characters.
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

/// Validate that a password meets the minimum requirements for protecting a note.
///
/// # Requirements
///
/// - Not empty or only whitespace
/// - At least `min_length` characters long
///
/// # Examples
///
/// ```
/// use notes_core::crypto::validate_password;
///
/// assert!(validate_password("correct-horse", 8).is_ok());
/// assert!(validate_password("short", 8).is_err());
/// ```
pub fn validate_password(password: &str, min_length: usize) -> Result<()> {
    if password.trim().is_empty() {
        return Err(NotesError::InvalidInput(
            "Password cannot be empty".to_string(),
        ));
    }

    let length = password.chars().count();
    if length < min_length {
        return Err(NotesError::InvalidInput(format!(
            "Password must be at least {} characters (got {})",
            min_length, length
        )));
    }

    Ok(())
}
