use notes_core::{refresh_insights, HeuristicAssistant, NotePatch, NoteStore};

use crate::app::{resolve_note_id, AppContext};
use crate::cli::EditArgs;
use crate::errors::CliError;
use crate::helpers::{edit_in_editor, read_stdin};
use crate::ui::{print, receipt};

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let id = resolve_note_id(&store, &args.id)?;
    let note = store.require_note(&id)?;

    let mut patch = NotePatch::new();
    if let Some(title) = &args.title {
        patch = patch.title(title.clone());
    }
    if !args.tag.is_empty() {
        patch = patch.tags(args.tag.clone());
    }

    let mut body = args.body.clone();
    if body.is_none() && patch.is_empty() {
        body = match read_stdin()? {
            Some(piped) => Some(piped),
            None if args.no_input => {
                return Err(CliError::invalid_input(
                    "Nothing to change; pass --title, --body or --tag",
                )
                .into())
            }
            None => {
                let current = note.content().ok_or_else(|| {
                    CliError::invalid_input("Unlock the note before editing its content")
                })?;
                Some(edit_in_editor(ctx.editor()?, current)?)
            }
        };
    }
    let content_changed = body.is_some();
    if let Some(body) = body {
        patch = patch.content(body);
    }

    let mut updated = store.update_note(&id, &patch)?;
    if content_changed && args.tag.is_empty() && ctx.auto_refresh()? {
        updated = refresh_insights(&mut store, &id, &HeuristicAssistant)?;
    }

    if !ctx.quiet() {
        let ui = ctx.ui(false, None);
        let id = updated.id.to_string();
        print(
            &ui,
            &receipt(&ui, "Updated note", &[("ID", id.as_str()), ("Title", updated.title.as_str())]),
        );
    }
    Ok(())
}
