use crate::app::{resolve_note_id, unlock_with_retry, AppContext};
use crate::cli::LockArgs;
use crate::ui::{print, receipt};

pub fn handle_unlock(ctx: &AppContext, args: &LockArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let id = resolve_note_id(&store, &args.id)?;
    let ui = ctx.ui(false, None);
    let interactive = ui.is_interactive() && !args.no_input;

    let note = unlock_with_retry(&mut store, &id, &ui, interactive)?;

    if !ctx.quiet() {
        let id = note.id.to_string();
        print(
            &ui,
            &receipt(
                &ui,
                "Unlocked note",
                &[("ID", id.as_str()), ("Title", note.title.as_str())],
            ),
        );
    }
    Ok(())
}
