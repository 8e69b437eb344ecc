//! Note storage.
//!
//! The `NoteStore` trait defines the persistence interface; `SqliteNoteStore`
//! is the bundled backend. Lifecycle transitions (protect / unlock) are
//! provided on the trait so every backend gets the same semantics.

pub mod sqlite;
pub mod traits;
pub mod types;

pub use sqlite::SqliteNoteStore;
pub use traits::NoteStore;
pub use types::{NoteFilter, StoreMetadata};
