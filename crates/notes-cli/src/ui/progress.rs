//! Spinner for the slow key-derivation step, using indicatif.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use super::context::UiContext;
use super::theme::spinner_frames;

/// A spinner for indeterminate progress.
///
/// Only animates on an interactive pretty terminal; otherwise every method
/// is a no-op so piped output stays clean.
pub struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    pub fn start(ctx: &UiContext, message: &str) -> Self {
        if !ctx.allows_animation() {
            return Self { bar: None };
        }

        let template = if ctx.color {
            "{spinner:.cyan} {msg}..."
        } else {
            "{spinner} {msg}..."
        };
        let style = ProgressStyle::default_spinner()
            .template(template)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(spinner_frames(ctx.unicode));

        // Draw to stderr so stdout stays parseable.
        let bar = ProgressBar::new_spinner();
        bar.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        bar.set_style(style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar: Some(bar) }
    }

    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}

/// Run `work` with a spinner showing `message`.
pub fn with_spinner<T>(ctx: &UiContext, message: &str, work: impl FnOnce() -> T) -> T {
    let spinner = Spinner::start(ctx, message);
    let result = work();
    spinner.finish();
    result
}
