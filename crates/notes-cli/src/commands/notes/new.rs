use notes_core::{refresh_insights, HeuristicAssistant, NewNote, NoteStore};

use crate::app::AppContext;
use crate::cli::NewArgs;
use crate::helpers::read_note_body;
use crate::ui::{format_tags, print, receipt};

pub fn handle_new(ctx: &AppContext, args: &NewArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let body = read_note_body(args.no_input, args.body.clone(), ctx.editor()?)?;

    let mut new_note = NewNote::new(body).with_tags(args.tag.clone());
    if let Some(title) = &args.title {
        new_note = new_note.with_title(title.clone());
    }
    let mut note = store.create_note(&new_note)?;

    // Explicit tags win over suggestions.
    if ctx.auto_refresh()? && args.tag.is_empty() {
        note = refresh_insights(&mut store, &note.id, &HeuristicAssistant)?;
    }

    if ctx.quiet() {
        println!("{}", note.id);
        return Ok(());
    }
    let ui = ctx.ui(false, None);
    let id = note.id.to_string();
    let tags = format_tags(&note.tags);
    print(
        &ui,
        &receipt(
            &ui,
            "Created note",
            &[("ID", id.as_str()), ("Title", note.title.as_str()), ("Tags", tags.as_str())],
        ),
    );
    Ok(())
}
