use notes_core::NoteStore;

use crate::app::AppContext;
use crate::errors::CliError;
use crate::ui::{badge, hint, kv, print, Badge};

pub fn handle_check(ctx: &AppContext) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let ui = ctx.ui(false, None);

    if let Err(err) = store.check_integrity() {
        tracing::warn!(error = %err, "Integrity check failed");
        eprintln!("{}", badge(&ui, Badge::Err, "Integrity check: FAILED"));
        eprintln!("{}", kv(&ui, "Error", &err.to_string()));
        eprintln!(
            "{}",
            hint(&ui, "Export readable notes with `notes export` before repairing.")
        );
        return Err(CliError::IntegrityFailed("Integrity check failed".to_string()).into());
    }

    if !ctx.quiet() {
        let metadata = store.metadata()?;
        print(&ui, &badge(&ui, Badge::Ok, "Integrity check: OK"));
        print(&ui, &kv(&ui, "Format version", &metadata.format_version));
        print(&ui, &kv(&ui, "Notes", &metadata.note_count.to_string()));
        print(&ui, &kv(&ui, "Encrypted", &metadata.encrypted_count.to_string()));
    }
    Ok(())
}
