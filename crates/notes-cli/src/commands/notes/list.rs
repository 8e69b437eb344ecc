use notes_core::{NoteFilter, NoteStore};

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::constants::DEFAULT_LIST_LIMIT;
use crate::output::{notes_json, print_note_list};
use crate::ui::{header, print};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;

    let mut filter = NoteFilter::new().limit(args.limit.unwrap_or(DEFAULT_LIST_LIMIT));
    if let Some(tag) = &args.tag {
        filter = filter.tag(tag.trim().to_lowercase());
    }
    if args.pinned {
        filter = filter.pinned_only();
    }
    if args.encrypted {
        filter = filter.encrypted(true);
    } else if args.plain {
        filter = filter.encrypted(false);
    }

    let notes = store.list_notes(&filter)?;

    let ui = ctx.ui(args.json, args.format);
    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&notes_json(&notes)?)?);
        return Ok(());
    }

    if ui.mode.is_pretty() && !ctx.quiet() {
        let context = args.tag.as_ref().map(|tag| format!("tag {}", tag));
        print(&ui, &header(&ui, "list", context.as_deref()));
    }
    print_note_list(&ui, &notes, ctx.quiet());
    Ok(())
}
