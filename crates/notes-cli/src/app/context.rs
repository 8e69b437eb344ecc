//! Application context for the Notes CLI.
//!
//! Bundles the parsed CLI arguments with the lazily-loaded config file.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use notes_core::SqliteNoteStore;

use crate::cli::{Cli, ListFormat};
use crate::config::{read_config, NotesConfig};
use crate::ui::{UiContext, UiFlags};

use super::resolver::{missing_store_error, resolve_config_path, resolve_store_path};

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<NotesConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Config file contents, or defaults when there is no file yet.
    pub fn config(&self) -> anyhow::Result<&NotesConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            if path.exists() {
                read_config(&path)
            } else {
                tracing::debug!(path = %path.display(), "No config file; using defaults");
                Ok(NotesConfig::default())
            }
        })
    }

    pub fn store_path(&self) -> anyhow::Result<PathBuf> {
        resolve_store_path(self.cli, self.config()?)
    }

    /// Open the existing store; a missing file is a not-found error.
    pub fn open_store(&self) -> anyhow::Result<SqliteNoteStore> {
        let path = self.store_path()?;
        if !path.exists() {
            return Err(missing_store_error(&path).into());
        }
        tracing::debug!(path = %path.display(), "Opening store");
        Ok(SqliteNoteStore::open(&path)?)
    }

    /// UI context honoring the global `--no-color` / `--ascii` flags.
    pub fn ui(&self, json: bool, format: Option<ListFormat>) -> UiContext {
        UiContext::from_env(UiFlags {
            json,
            format,
            no_color: self.cli.no_color,
            ascii: self.cli.ascii,
        })
    }

    pub fn editor(&self) -> anyhow::Result<Option<&str>> {
        Ok(self.config()?.ui.editor.as_deref())
    }

    pub fn min_password_length(&self) -> anyhow::Result<usize> {
        Ok(self.config()?.security.min_password_length)
    }

    pub fn auto_refresh(&self) -> anyhow::Result<bool> {
        Ok(self.config()?.assist.auto_refresh)
    }
}
