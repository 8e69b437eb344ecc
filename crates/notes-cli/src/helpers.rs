//! Prompts and input capture: passwords, confirmations and note bodies.

use std::io::{self, IsTerminal, Read};
use std::process::Command;

use anyhow::{bail, Context};
use dialoguer::{Confirm, Password};
use secrecy::SecretString;

use crate::constants::PASSWORD_ENV;

/// Password from `NOTES_PASSWORD`, if set and non-blank.
pub fn password_from_env() -> Option<SecretString> {
    std::env::var(PASSWORD_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(SecretString::from)
}

fn no_tty() -> anyhow::Error {
    anyhow::anyhow!(
        "No password provided and no TTY available. Set {}.",
        PASSWORD_ENV
    )
}

/// Empty entries are refused and prompted again.
pub fn prompt_password(interactive: bool) -> anyhow::Result<SecretString> {
    if !interactive {
        return Err(no_tty());
    }
    let entered = Password::new()
        .with_prompt("Password")
        .interact()
        .context("Failed to read password")?;
    Ok(SecretString::from(entered))
}

/// A password for protecting a note: `NOTES_PASSWORD`, or typed twice.
pub fn prompt_new_password(interactive: bool) -> anyhow::Result<SecretString> {
    if let Some(password) = password_from_env() {
        return Ok(password);
    }
    if !interactive {
        return Err(no_tty());
    }
    let entered = Password::new()
        .with_prompt("New password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .context("Failed to read password")?;
    Ok(SecretString::from(entered))
}

/// Yes/no question defaulting to no. Without a TTY the answer is no.
pub fn confirm(prompt: &str, interactive: bool) -> anyhow::Result<bool> {
    if !interactive {
        return Ok(false);
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .context("Failed to read confirmation")
}

/// Everything piped on stdin, or `None` when stdin is a terminal.
pub fn read_stdin() -> anyhow::Result<Option<String>> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let mut piped = String::new();
    stdin
        .read_to_string(&mut piped)
        .context("Failed to read stdin")?;
    piped.truncate(piped.trim_end().len());
    Ok(Some(piped))
}

/// Body for a new note: `--body`, then stdin, then the editor.
/// With `--no-input` and nothing piped the note starts empty.
pub fn read_note_body(
    no_input: bool,
    body: Option<String>,
    editor_override: Option<&str>,
) -> anyhow::Result<String> {
    if let Some(value) = body {
        return Ok(value);
    }
    match read_stdin()? {
        Some(piped) => Ok(piped),
        None if no_input => Ok(String::new()),
        None => edit_in_editor(editor_override, ""),
    }
}

fn editor_command(editor_override: Option<&str>) -> Option<String> {
    editor_override
        .map(str::to_string)
        .into_iter()
        .chain(std::env::var("VISUAL").ok())
        .chain(std::env::var("EDITOR").ok())
        .find(|value| !value.trim().is_empty())
}

/// Open the editor on `initial` and return what was saved.
pub fn edit_in_editor(editor_override: Option<&str>, initial: &str) -> anyhow::Result<String> {
    let Some(editor) = editor_command(editor_override) else {
        bail!("$EDITOR is not set; use --body or pipe content via stdin");
    };

    let scratch = tempfile::Builder::new()
        .prefix("notes_")
        .suffix(".html")
        .tempfile()
        .context("Failed to create temp file")?;
    std::fs::write(scratch.path(), initial).context("Failed to write temp file")?;

    // "code --wait" style editors carry their own arguments.
    let mut words = editor.split_whitespace();
    let program = words.next().unwrap_or_default();
    let status = Command::new(program)
        .args(words)
        .arg(scratch.path())
        .status()
        .with_context(|| format!("Failed to launch editor `{}`", program))?;
    if !status.success() {
        bail!("Editor exited with failure");
    }

    let saved = std::fs::read_to_string(scratch.path()).context("Failed to read temp file")?;
    Ok(saved.trim_end().to_string())
}
