//! JSON output for notes, in the portable record shape.

use notes_core::{Note, NoteRecord};

pub fn note_json(note: &Note) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::to_value(NoteRecord::from(note))?)
}

pub fn notes_json(notes: &[Note]) -> anyhow::Result<serde_json::Value> {
    let records: Vec<NoteRecord> = notes.iter().map(NoteRecord::from).collect();
    Ok(serde_json::to_value(records)?)
}
