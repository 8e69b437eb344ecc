//! Exit codes, environment variable names and fixed limits.

/// Process exit codes. 1 is any unmapped error and 2 is a clap usage
/// error; the rest are ours.
pub mod exit_codes {
    /// No store, config or note by that name.
    pub const NOT_FOUND: i32 = 3;

    pub const INVALID_INPUT: i32 = 4;

    /// Wrong password, or every unlock attempt used up.
    pub const AUTH_FAILED: i32 = 5;

    /// `notes check` found damage.
    pub const INTEGRITY_FAILED: i32 = 6;
}

/// Password source for `--no-input` and scripted runs.
pub const PASSWORD_ENV: &str = "NOTES_PASSWORD";

pub const CONFIG_ENV: &str = "NOTES_CONFIG";

/// `tracing` filter directives, e.g. `notes_core=debug`.
pub const LOG_ENV: &str = "NOTES_LOG";

/// Fresh password prompts allowed when unlocking interactively.
pub const UNLOCK_ATTEMPTS: u32 = 3;

/// Shortest accepted note ID prefix.
pub const MIN_ID_PREFIX: usize = 4;

pub const DEFAULT_LIST_LIMIT: usize = 50;
