use std::io::Write;
use std::path::{Path, PathBuf};

use notes_core::fs::write_atomic;
use notes_core::{NoteFilter, NoteRecord, NoteStore};

use crate::app::{resolve_note_id, AppContext};
use crate::cli::{ExportArgs, ExportFormat};
use crate::errors::CliError;
use crate::ui::{print, receipt};

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    if let Some(raw_id) = &args.html {
        return export_html(ctx, &store, raw_id, args.output.as_deref());
    }

    let notes = store.list_notes(&NoteFilter::new())?;
    let records: Vec<NoteRecord> = notes.iter().map(NoteRecord::from).collect();
    let payload = render_records(&records, args.format)?;

    match &args.output {
        Some(path) => {
            write_atomic(path, payload.as_bytes())?;
            if !ctx.quiet() {
                let ui = ctx.ui(false, None);
                let count = records.len().to_string();
                let path = path.display().to_string();
                print(
                    &ui,
                    &receipt(
                        &ui,
                        "Exported notes",
                        &[("Notes", count.as_str()), ("File", path.as_str())],
                    ),
                );
            }
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(payload.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn render_records(records: &[NoteRecord], format: ExportFormat) -> anyhow::Result<String> {
    match format {
        ExportFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(records)?)),
        ExportFormat::Jsonl => {
            let mut out = String::new();
            for record in records {
                out.push_str(&serde_json::to_string(record)?);
                out.push('\n');
            }
            Ok(out)
        }
    }
}

/// Write one note's raw HTML content.
fn export_html<S>(
    ctx: &AppContext,
    store: &S,
    raw_id: &str,
    output: Option<&Path>,
) -> anyhow::Result<()>
where
    S: NoteStore + ?Sized,
{
    let id = resolve_note_id(store, raw_id)?;
    let note = store.require_note(&id)?;
    let content = note.content().ok_or_else(|| {
        CliError::invalid_input("Note is encrypted; unlock it before exporting HTML")
    })?;

    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(html_file_name(&note.title)));
    write_atomic(&path, content.as_bytes())?;

    if !ctx.quiet() {
        let ui = ctx.ui(false, None);
        let path = path.display().to_string();
        print(
            &ui,
            &receipt(
                &ui,
                "Exported HTML",
                &[("Title", note.title.as_str()), ("File", path.as_str())],
            ),
        );
    }
    Ok(())
}

/// File name derived from a note title, safe on common filesystems.
fn html_file_name(title: &str) -> String {
    let cleaned: String = title
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        "note.html".to_string()
    } else {
        format!("{}.html", cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notes_core::{NewNote, Note};

    #[test]
    fn test_html_file_name() {
        assert_eq!(html_file_name("Meeting notes"), "Meeting notes.html");
        assert_eq!(html_file_name("a/b:c"), "a_b_c.html");
        assert_eq!(html_file_name("   "), "note.html");
    }

    #[test]
    fn test_jsonl_has_one_record_per_line() {
        let first = Note::create(&NewNote::new("one")).unwrap();
        let second = Note::create(&NewNote::new("two")).unwrap();
        let records = vec![NoteRecord::from(&first), NoteRecord::from(&second)];

        let out = render_records(&records, ExportFormat::Jsonl).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        let parsed: NoteRecord = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(parsed.content.as_deref(), Some("two"));
    }

    #[test]
    fn test_json_export_is_array() {
        let note = Note::create(&NewNote::new("one")).unwrap();
        let out = render_records(&[NoteRecord::from(&note)], ExportFormat::Json).unwrap();
        let parsed: Vec<NoteRecord> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.len(), 1);
    }
}
