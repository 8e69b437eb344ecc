use notes_core::assist::split_list;
use notes_core::{refresh_insights, AssistMode, Assistant, HeuristicAssistant, NoteStore};

use crate::app::{resolve_note_id, AppContext};
use crate::cli::{ModeArg, SummarizeArgs};
use crate::errors::CliError;
use crate::ui::{format_tags, kv, print};

fn assist_mode(mode: ModeArg) -> AssistMode {
    match mode {
        ModeArg::Summarize => AssistMode::Summarize,
        ModeArg::Tags => AssistMode::Tags,
        ModeArg::Terms => AssistMode::Terms,
    }
}

pub fn handle_summarize(ctx: &AppContext, args: &SummarizeArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let id = resolve_note_id(&store, &args.id)?;
    let note = store.require_note(&id)?;
    let content = note
        .content()
        .ok_or_else(|| CliError::invalid_input("Unlock the note before running the assistant"))?
        .to_string();
    let ui = ctx.ui(false, None);

    match assist_mode(args.mode) {
        AssistMode::Summarize => {
            let updated = refresh_insights(&mut store, &id, &HeuristicAssistant)?;
            print(&ui, &kv(&ui, "Summary", &updated.summary));
            print(&ui, &kv(&ui, "Tags", &format_tags(&updated.tags)));
        }
        mode => {
            let answer = HeuristicAssistant.run(mode, &content)?;
            let items = split_list(&answer);
            if items.is_empty() {
                print(&ui, &kv(&ui, mode.as_str(), "-"));
            } else {
                print(&ui, &kv(&ui, mode.as_str(), &items.join(", ")));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_mapping() {
        assert_eq!(assist_mode(ModeArg::Summarize), AssistMode::Summarize);
        assert_eq!(assist_mode(ModeArg::Tags), AssistMode::Tags);
        assert_eq!(assist_mode(ModeArg::Terms), AssistMode::Terms);
    }
}
