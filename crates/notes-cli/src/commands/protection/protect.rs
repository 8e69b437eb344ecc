use notes_core::Note;

use crate::app::{protect_with_prompt, resolve_note_id, AppContext};
use crate::cli::LockArgs;
use crate::ui::{hint, print, receipt, short_id};

pub fn handle_protect(ctx: &AppContext, args: &LockArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let id = resolve_note_id(&store, &args.id)?;
    let ui = ctx.ui(false, None);
    let interactive = ui.is_interactive() && !args.no_input;

    let note = protect_with_prompt(
        &mut store,
        &id,
        &ui,
        interactive,
        ctx.min_password_length()?,
    )?;

    if !ctx.quiet() {
        let id = note.id.to_string();
        print(
            &ui,
            &receipt(&ui, "Protected note", &receipt_items(&id, &note)),
        );
        print(
            &ui,
            &hint(
                &ui,
                &format!(
                    "The password cannot be recovered. Read it again with `notes unlock {}`.",
                    short_id(&note.id)
                ),
            ),
        );
    }
    Ok(())
}

/// The assistant summary is metadata and is not sealed with the content.
const SUMMARY_NOTICE: &str = "kept in plaintext";

fn receipt_items<'a>(id: &'a str, note: &'a Note) -> Vec<(&'a str, &'a str)> {
    let mut items = vec![("ID", id), ("Title", note.title.as_str())];
    if !note.summary.is_empty() {
        items.push(("Summary", SUMMARY_NOTICE));
    }
    items
}
