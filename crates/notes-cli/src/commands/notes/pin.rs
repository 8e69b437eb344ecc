use notes_core::NoteStore;

use crate::app::{resolve_note_id, AppContext};
use crate::cli::IdArgs;
use crate::ui::{print, receipt};

pub fn handle_pin(ctx: &AppContext, args: &IdArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let id = resolve_note_id(&store, &args.id)?;
    let note = store.toggle_pin(&id)?;

    if !ctx.quiet() {
        let ui = ctx.ui(false, None);
        let title = if note.pinned { "Pinned note" } else { "Unpinned note" };
        let id = note.id.to_string();
        print(&ui, &receipt(&ui, title, &[("ID", id.as_str()), ("Title", note.title.as_str())]));
    }
    Ok(())
}
