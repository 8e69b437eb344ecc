use std::path::{Path, PathBuf};

use anyhow::Context;
use notes_core::crypto::password::DEFAULT_MIN_PASSWORD_LENGTH;
use serde::{Deserialize, Serialize};

const APP_DIR: &str = "notes";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct NotesConfig {
    #[serde(default)]
    pub store: StoreSection,
    #[serde(default)]
    pub security: SecuritySection,
    #[serde(default)]
    pub ui: UiSection,
    #[serde(default)]
    pub assist: AssistSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StoreSection {
    pub path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SecuritySection {
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
}

impl Default for SecuritySection {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UiSection {
    pub editor: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AssistSection {
    #[serde(default = "default_auto_refresh")]
    pub auto_refresh: bool,
}

impl Default for AssistSection {
    fn default() -> Self {
        Self {
            auto_refresh: default_auto_refresh(),
        }
    }
}

fn default_min_password_length() -> usize {
    DEFAULT_MIN_PASSWORD_LENGTH
}

fn default_auto_refresh() -> bool {
    true
}

impl NotesConfig {
    pub fn new(store_path: PathBuf, editor: Option<String>) -> Self {
        Self {
            store: StoreSection {
                path: Some(store_path.to_string_lossy().to_string()),
            },
            ui: UiSection { editor },
            ..Self::default()
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_dir("XDG_CONFIG_HOME", &[".config"])?.join("config.toml"))
}

pub fn default_store_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_dir("XDG_DATA_HOME", &[".local", "share"])?.join("notes.db"))
}

pub fn read_config(path: &Path) -> anyhow::Result<NotesConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("Failed to parse config {}", path.display()))
}

/// Write the config, creating its directory first.
pub fn write_config(path: &Path, config: &NotesConfig) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create config directory {}", dir.display()))?;
    }
    let rendered = toml::to_string_pretty(config).context("Failed to serialize config")?;
    std::fs::write(path, rendered)
        .with_context(|| format!("Failed to write config {}", path.display()))
}

/// `$<var>/notes` when the variable is set and non-blank, else
/// `$HOME/<fallback...>/notes`.
fn xdg_dir(var: &str, fallback: &[&str]) -> anyhow::Result<PathBuf> {
    let base = std::env::var_os(var).filter(|value| !value.to_string_lossy().trim().is_empty());
    if let Some(base) = base {
        return Ok(PathBuf::from(base).join(APP_DIR));
    }
    let home = std::env::var_os("HOME").context("HOME is not set; cannot resolve default paths")?;
    let mut dir = PathBuf::from(home);
    dir.extend(fallback);
    Ok(dir.join(APP_DIR))
}
