//! UI primitives for the Notes CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badges, markers and owo-colors styles
//! - **Render**: Tables, headers, receipts, hints
//! - **Progress**: Spinner for key derivation
//! - **Format**: String utilities

mod context;
pub mod format;
mod mode;
pub mod progress;
pub mod render;
pub mod theme;

pub use context::{UiContext, UiFlags};
pub use mode::OutputMode;
pub use theme::Badge;

pub use render::{
    badge, blank_line, divider, header, hint, kv, print, print_error, receipt, simple_table,
};

pub use progress::with_spinner;

pub use format::{format_datetime, format_tags, short_id, single_line, truncate};
