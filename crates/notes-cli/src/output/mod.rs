//! Output formatting helpers for the CLI.
//!
//! JSON output uses the portable note record shape; text output goes
//! through the `ui` renderer.

mod json;
mod text;

pub use json::{note_json, notes_json};
pub use text::{print_note, print_note_list};
