//! Choosing between JSON, plain and pretty output.

use crate::cli::ListFormat;

/// How a command renders its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// `--json`: records only, nothing decorative
    Json,
    /// `key=value` lines and tab-separated rows for scripts
    #[default]
    Plain,
    /// Tables, badges and colors for a person at a terminal
    Pretty,
}

/// What we know about stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct Terminal {
    pub is_tty: bool,
    pub dumb: bool,
}

impl Terminal {
    pub fn can_decorate(&self) -> bool {
        self.is_tty && !self.dumb
    }
}

impl OutputMode {
    /// `--json` beats `--format`; pretty output needs a capable terminal
    /// even when `--format table` asks for it.
    pub fn resolve(json: bool, format: Option<ListFormat>, terminal: Terminal) -> Self {
        match (json, format) {
            (true, _) => Self::Json,
            (false, Some(ListFormat::Plain)) => Self::Plain,
            _ if terminal.can_decorate() => Self::Pretty,
            _ => Self::Plain,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTY: Terminal = Terminal {
        is_tty: true,
        dumb: false,
    };
    const PIPE: Terminal = Terminal {
        is_tty: false,
        dumb: false,
    };
    const DUMB: Terminal = Terminal {
        is_tty: true,
        dumb: true,
    };

    #[test]
    fn test_resolution_table() {
        let cases = [
            (true, Some(ListFormat::Plain), TTY, OutputMode::Json),
            (true, None, PIPE, OutputMode::Json),
            (false, Some(ListFormat::Plain), TTY, OutputMode::Plain),
            (false, Some(ListFormat::Table), TTY, OutputMode::Pretty),
            (false, Some(ListFormat::Table), PIPE, OutputMode::Plain),
            (false, None, TTY, OutputMode::Pretty),
            (false, None, DUMB, OutputMode::Plain),
            (false, None, PIPE, OutputMode::Plain),
        ];
        for (json, format, terminal, expected) in cases {
            assert_eq!(
                OutputMode::resolve(json, format, terminal),
                expected,
                "json={} format={:?} terminal={:?}",
                json,
                format,
                terminal
            );
        }
    }
}
