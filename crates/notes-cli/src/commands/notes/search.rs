use notes_core::NoteStore;

use crate::app::AppContext;
use crate::cli::SearchArgs;
use crate::constants::DEFAULT_LIST_LIMIT;
use crate::output::{notes_json, print_note_list};
use crate::ui::{header, print};

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;

    let mut notes = store.search_notes(&args.query)?;
    notes.truncate(args.limit.unwrap_or(DEFAULT_LIST_LIMIT));
    tracing::debug!(query_len = args.query.len(), hits = notes.len(), "Search finished");

    let ui = ctx.ui(args.json, args.format);
    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&notes_json(&notes)?)?);
        return Ok(());
    }

    if ui.mode.is_pretty() && !ctx.quiet() {
        let context = format!("\"{}\"", args.query);
        print(&ui, &header(&ui, "search", Some(&context)));
    }
    print_note_list(&ui, &notes, ctx.quiet());
    Ok(())
}
