//! What the current terminal and flags allow us to draw.

use std::io::IsTerminal;

use crate::cli::ListFormat;

use super::mode::{OutputMode, Terminal};

const FALLBACK_WIDTH: usize = 80;

/// Rendering settings for one command invocation.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub is_tty: bool,
    pub color: bool,
    pub unicode: bool,
    /// Columns available for tables
    pub width: usize,
    pub mode: OutputMode,
}

/// Flags that shape output, gathered from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiFlags {
    pub json: bool,
    pub format: Option<ListFormat>,
    pub no_color: bool,
    pub ascii: bool,
}

impl UiContext {
    /// Detect the terminal and combine it with the flags.
    pub fn from_env(flags: UiFlags) -> Self {
        let terminal = Terminal {
            is_tty: std::io::stdout().is_terminal(),
            dumb: std::env::var("TERM").is_ok_and(|term| term == "dumb"),
        };
        let no_color_env = std::env::var_os("NO_COLOR").is_some();
        Self::build(flags, terminal, no_color_env, terminal_width())
    }

    fn build(flags: UiFlags, terminal: Terminal, no_color_env: bool, width: Option<usize>) -> Self {
        Self {
            is_tty: terminal.is_tty,
            color: terminal.can_decorate() && !flags.no_color && !no_color_env,
            unicode: !flags.ascii,
            width: width.unwrap_or(FALLBACK_WIDTH),
            mode: OutputMode::resolve(flags.json, flags.format, terminal),
        }
    }

    /// Prompts need a person on both ends of the terminal.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && std::io::stdin().is_terminal()
    }

    pub fn allows_animation(&self) -> bool {
        self.is_tty && self.mode.is_pretty()
    }
}

/// `COLUMNS` when set, else the window size of the stdout tty.
fn terminal_width() -> Option<usize> {
    let from_env = std::env::var("COLUMNS")
        .ok()
        .and_then(|cols| cols.trim().parse::<usize>().ok())
        .filter(|&cols| cols > 0);
    from_env.or_else(tty_columns)
}

#[cfg(unix)]
fn tty_columns() -> Option<usize> {
    let mut size = libc::winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };
    // SAFETY: TIOCGWINSZ writes a winsize into the struct we own.
    let rc = unsafe {
        libc::ioctl(
            libc::STDOUT_FILENO,
            libc::TIOCGWINSZ,
            &mut size as *mut libc::winsize,
        )
    };
    (rc == 0 && size.ws_col > 0).then_some(size.ws_col as usize)
}

#[cfg(not(unix))]
fn tty_columns() -> Option<usize> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTY: Terminal = Terminal {
        is_tty: true,
        dumb: false,
    };

    #[test]
    fn test_json_flag_disables_animation() {
        let flags = UiFlags {
            json: true,
            ..UiFlags::default()
        };
        let ctx = UiContext::build(flags, TTY, false, Some(120));
        assert_eq!(ctx.mode, OutputMode::Json);
        assert!(!ctx.allows_animation());
    }

    #[test]
    fn test_color_needs_tty_and_no_opt_out() {
        assert!(UiContext::build(UiFlags::default(), TTY, false, None).color);

        let no_color = UiFlags {
            no_color: true,
            ..UiFlags::default()
        };
        assert!(!UiContext::build(no_color, TTY, false, None).color);
        assert!(!UiContext::build(UiFlags::default(), TTY, true, None).color);

        let pipe = Terminal {
            is_tty: false,
            dumb: false,
        };
        assert!(!UiContext::build(UiFlags::default(), pipe, false, None).color);
    }

    #[test]
    fn test_ascii_flag() {
        let flags = UiFlags {
            ascii: true,
            ..UiFlags::default()
        };
        assert!(!UiContext::build(flags, TTY, false, None).unicode);
    }

    #[test]
    fn test_width_falls_back() {
        let ctx = UiContext::build(UiFlags::default(), TTY, false, None);
        assert_eq!(ctx.width, FALLBACK_WIDTH);
    }
}
