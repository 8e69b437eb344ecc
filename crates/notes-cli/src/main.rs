//! Notes CLI - personal notes with optional per-note password protection
//!
//! This is the command-line interface for Notes. It wires argument parsing,
//! configuration and logging to the core library.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::{CommandFactory, Parser};

use notes_core::NotesError;

use app::AppContext;
use cli::{Cli, Commands};
use commands::{
    handle_check, handle_completions, handle_delete, handle_edit, handle_export, handle_init,
    handle_list, handle_new, handle_pin, handle_protect, handle_search, handle_show,
    handle_summarize, handle_unlock,
};
use errors::CliError;
use ui::print_error;

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose, cli.quiet);
    let ctx = AppContext::new(&cli);

    if let Err(err) = run(&ctx) {
        report_error(&ctx, err);
    }
}

fn run(ctx: &AppContext) -> anyhow::Result<()> {
    match &ctx.cli().command {
        Some(Commands::Init(args)) => handle_init(ctx, args),
        Some(Commands::New(args)) => handle_new(ctx, args),
        Some(Commands::List(args)) => handle_list(ctx, args),
        Some(Commands::Search(args)) => handle_search(ctx, args),
        Some(Commands::Show(args)) => handle_show(ctx, args),
        Some(Commands::Edit(args)) => handle_edit(ctx, args),
        Some(Commands::Delete(args)) => handle_delete(ctx, args),
        Some(Commands::Pin(args)) => handle_pin(ctx, args),
        Some(Commands::Protect(args)) => handle_protect(ctx, args),
        Some(Commands::Unlock(args)) => handle_unlock(ctx, args),
        Some(Commands::Summarize(args)) => handle_summarize(ctx, args),
        Some(Commands::Export(args)) => handle_export(ctx, args),
        Some(Commands::Check) => handle_check(ctx),
        Some(Commands::Completions(args)) => handle_completions(args.shell),
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}

/// Print an error and exit with the code matching its kind.
fn report_error(ctx: &AppContext, err: anyhow::Error) -> ! {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        cli_err.exit()
    }
    if let Some(core_err) = err.downcast_ref::<NotesError>() {
        tracing::debug!(error = ?core_err, "Command failed");
        if let Some(mapped) = CliError::from_core(core_err) {
            mapped.exit()
        }
    }

    let ui = ctx.ui(false, None);
    let message = err.to_string();
    let (message, hint) = split_error_hint(&message);
    print_error(&ui, message, hint.as_deref());
    std::process::exit(1);
}

/// Separate an embedded "Hint:" line from an error message, or supply one
/// for common failures.
fn split_error_hint(error: &str) -> (&str, Option<String>) {
    if let Some(idx) = error.find("\nHint:") {
        let hint = error[idx + "\nHint:".len()..].trim().to_string();
        return (error[..idx].trim_end(), Some(hint));
    }

    let lower = error.to_lowercase();
    let hint = if lower.contains("no password provided") {
        Some("Run in a terminal, or set NOTES_PASSWORD for scripted use.".to_string())
    } else if lower.contains("$editor is not set") {
        Some("Set `[ui] editor` in the config, or pass --body.".to_string())
    } else if lower.contains("sqlite error") {
        Some("Run `notes check` to verify the store.".to_string())
    } else {
        None
    };
    (error, hint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_explicit_hint() {
        let (message, hint) = split_error_hint("Something failed\nHint: Try again.");
        assert_eq!(message, "Something failed");
        assert_eq!(hint.as_deref(), Some("Try again."));
    }

    #[test]
    fn test_contextual_hint() {
        let (message, hint) =
            split_error_hint("No password provided and no TTY available. Set NOTES_PASSWORD.");
        assert!(message.starts_with("No password provided"));
        assert!(hint.unwrap().contains("NOTES_PASSWORD"));
    }

    #[test]
    fn test_no_hint() {
        assert_eq!(split_error_hint("boom"), ("boom", None));
    }
}
