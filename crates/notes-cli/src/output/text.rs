//! Text and table output for notes.

use notes_core::html::{preview, to_plain_text};
use notes_core::Note;

use crate::ui::theme::{LOCKED, PINNED};
use crate::ui::{
    blank_line, divider, format_datetime, format_tags, kv, print, short_id, simple_table,
    single_line, truncate, UiContext,
};

const PREVIEW_CHARS: usize = 60;
const TITLE_CHARS: usize = 40;
const LIST_HEADERS: [&str; 6] = ["ID", "Updated", "", "Title", "Tags", "Preview"];

/// Placeholder shown instead of an encrypted note's body.
pub fn locked_placeholder(note: &Note) -> String {
    format!(
        "This note is encrypted. Run `notes unlock {}` to read it.",
        short_id(&note.id)
    )
}

/// One-line preview: the summary when present, else the content.
pub fn note_preview(note: &Note) -> String {
    match note.content() {
        None => "(encrypted)".to_string(),
        Some(_) if !note.summary.trim().is_empty() => {
            truncate(&single_line(&note.summary), PREVIEW_CHARS)
        }
        Some(content) => preview(content, PREVIEW_CHARS),
    }
}

fn flags(ui: &UiContext, note: &Note) -> String {
    let mut out = Vec::new();
    if note.pinned {
        out.push(if ui.mode.is_pretty() {
            PINNED.get(ui.unicode)
        } else {
            "pinned"
        });
    }
    if note.is_encrypted() {
        out.push(if ui.mode.is_pretty() {
            LOCKED.get(ui.unicode)
        } else {
            "locked"
        });
    }
    if out.is_empty() {
        return if ui.mode.is_pretty() { String::new() } else { "-".to_string() };
    }
    out.join(if ui.mode.is_pretty() { " " } else { "," })
}

/// Print a single note.
pub fn print_note(ui: &UiContext, note: &Note, quiet: bool) {
    if !quiet {
        print(ui, &kv(ui, "ID", &note.id.to_string()));
        print(ui, &kv(ui, "Title", &note.title));
        print(ui, &kv(ui, "Created", &format_datetime(&note.created_at, ui.mode.is_pretty())));
        print(ui, &kv(ui, "Updated", &format_datetime(&note.updated_at, ui.mode.is_pretty())));
        if note.pinned {
            print(ui, &kv(ui, "Pinned", "yes"));
        }
        print(ui, &kv(ui, "Encrypted", if note.is_encrypted() { "yes" } else { "no" }));
        if !note.tags.is_empty() {
            print(ui, &kv(ui, "Tags", &note.tags.join(", ")));
        }
        if !note.summary.is_empty() && !note.is_encrypted() {
            print(ui, &kv(ui, "Summary", &single_line(&note.summary)));
        }
        print(ui, &divider(ui));
    }

    match note.content() {
        Some(content) => print(ui, &to_plain_text(content)),
        None => print(ui, &locked_placeholder(note)),
    }
}

/// Print a list of notes as a table (pretty) or tab-separated rows (plain).
pub fn print_note_list(ui: &UiContext, notes: &[Note], quiet: bool) {
    if notes.is_empty() {
        if !quiet {
            print(ui, "No notes found.");
        }
        return;
    }

    let pretty = ui.mode.is_pretty();
    let rows: Vec<Vec<String>> = notes
        .iter()
        .map(|note| {
            vec![
                short_id(&note.id),
                format_datetime(&note.updated_at, pretty),
                flags(ui, note),
                truncate(&single_line(&note.title), TITLE_CHARS),
                format_tags(&note.tags),
                note_preview(note),
            ]
        })
        .collect();

    print(ui, &simple_table(ui, &LIST_HEADERS, &rows));
    if pretty && !quiet {
        blank_line(ui);
        print(
            ui,
            &format!("{} note{}", notes.len(), if notes.len() == 1 { "" } else { "s" }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notes_core::{CipherBundle, NewNote};

    use crate::ui::OutputMode;

    fn plain_ui() -> UiContext {
        UiContext {
            is_tty: false,
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
        }
    }

    fn locked(note: &Note) -> Note {
        let bundle = CipherBundle::from_encoded("AAAA", "AAAA", "AAAA");
        note.sealed(bundle).unwrap()
    }

    #[test]
    fn test_preview_prefers_summary() {
        let note = Note::create(&NewNote::new("<p>Long body text</p>").with_summary("Short."))
            .unwrap();
        assert_eq!(note_preview(&note), "Short.");

        let bare = Note::create(&NewNote::new("<p>Long body text</p>")).unwrap();
        assert_eq!(note_preview(&bare), "Long body text");
    }

    #[test]
    fn test_encrypted_note_preview_hides_content() {
        let note = Note::create(&NewNote::new("secret").with_summary("leaky")).unwrap();
        let sealed = locked(&note);
        assert_eq!(note_preview(&sealed), "(encrypted)");
        assert!(locked_placeholder(&sealed).contains("notes unlock"));
    }

    #[test]
    fn test_plain_flags() {
        let ui = plain_ui();
        let note = Note::create(&NewNote::new("x")).unwrap();
        assert_eq!(flags(&ui, &note), "-");
        assert_eq!(flags(&ui, &locked(&note.toggled_pin())), "pinned,locked");
    }
}
