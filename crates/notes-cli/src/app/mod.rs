//! Application-level utilities for the Notes CLI.
//!
//! This module provides:
//! - The per-invocation context (CLI args plus lazily-loaded config)
//! - Path and note ID resolution
//! - Password prompting with retry logic

mod context;
mod password;
mod resolver;

pub use context::AppContext;
pub use password::{protect_with_prompt, unlock_with_retry};
pub use resolver::{resolve_config_path, resolve_note_id};
