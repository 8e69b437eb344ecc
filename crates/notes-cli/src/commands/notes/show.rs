use notes_core::NoteStore;

use crate::app::{resolve_note_id, AppContext};
use crate::cli::ShowArgs;
use crate::output::{note_json, print_note};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let id = resolve_note_id(&store, &args.id)?;
    let note = store.require_note(&id)?;

    let ui = ctx.ui(args.json, None);
    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&note_json(&note)?)?);
    } else {
        print_note(&ui, &note, ctx.quiet());
    }
    Ok(())
}
