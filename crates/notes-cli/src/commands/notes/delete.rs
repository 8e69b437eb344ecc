use notes_core::NoteStore;

use crate::app::{resolve_note_id, AppContext};
use crate::cli::DeleteArgs;
use crate::errors::CliError;
use crate::helpers::confirm;
use crate::ui::{print, receipt};

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let id = resolve_note_id(&store, &args.id)?;
    let note = store.require_note(&id)?;
    let ui = ctx.ui(false, None);

    if !args.yes {
        if !ui.is_interactive() {
            return Err(CliError::invalid_input(
                "Refusing to delete without confirmation; pass --yes",
            )
            .into());
        }
        let prompt = format!("Delete \"{}\"? This cannot be undone", note.title);
        if !confirm(&prompt, true)? {
            print(&ui, "Cancelled.");
            return Ok(());
        }
    }

    store.delete_note(&id)?;
    if !ctx.quiet() {
        let id = id.to_string();
        print(
            &ui,
            &receipt(&ui, "Deleted note", &[("ID", id.as_str()), ("Title", note.title.as_str())]),
        );
    }
    Ok(())
}
