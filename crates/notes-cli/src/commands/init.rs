use notes_core::{NoteStore, SqliteNoteStore};

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_store_path, write_config, NotesConfig};
use crate::errors::CliError;
use crate::ui::{badge, hint, print, receipt, Badge};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let ui = ctx.ui(false, None);
    let store_path = match args.path.clone().or_else(|| ctx.cli().store.clone()) {
        Some(path) => path,
        None => default_store_path()?,
    };
    if store_path.exists() {
        return Err(CliError::invalid_input(format!(
            "A notes store already exists at {}",
            store_path.display()
        ))
        .into());
    }

    let config_path = resolve_config_path()?;
    let keep_config = config_path.exists() && !args.force;
    if !keep_config {
        let config = NotesConfig::new(store_path.clone(), args.editor.clone());
        write_config(&config_path, &config)?;
    }

    let store = SqliteNoteStore::open(&store_path)?;
    let metadata = store.metadata()?;
    tracing::info!(path = %store_path.display(), "Created notes store");

    if ctx.quiet() {
        return Ok(());
    }
    let store_display = store_path.display().to_string();
    let config_display = config_path.display().to_string();
    print(
        &ui,
        &receipt(
            &ui,
            "Initialized notes store",
            &[
                ("Store", store_display.as_str()),
                ("Config", config_display.as_str()),
                ("Format", metadata.format_version.as_str()),
            ],
        ),
    );
    if keep_config {
        print(
            &ui,
            &badge(
                &ui,
                Badge::Warn,
                "Existing config kept; pass --force to point it at this store.",
            ),
        );
    }
    print(&ui, &hint(&ui, "notes new --title \"First note\""));
    Ok(())
}
