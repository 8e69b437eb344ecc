//! Theme definitions for colors, symbols, and badges.

use owo_colors::{OwoColorize, Style};

/// Symbol pair for ASCII and Unicode variants.
#[derive(Debug, Clone, Copy)]
pub struct SymbolPair {
    pub ascii: &'static str,
    pub unicode: &'static str,
}

impl SymbolPair {
    pub const fn new(ascii: &'static str, unicode: &'static str) -> Self {
        Self { ascii, unicode }
    }

    pub fn get(&self, unicode: bool) -> &'static str {
        if unicode {
            self.unicode
        } else {
            self.ascii
        }
    }
}

/// Marker for pinned notes in lists.
pub const PINNED: SymbolPair = SymbolPair::new("*", "\u{2605}"); // ★

/// Marker for encrypted notes in lists.
pub const LOCKED: SymbolPair = SymbolPair::new("#", "\u{1F512}"); // 🔒

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Err,
}

impl Badge {
    /// Get badge with symbol for display.
    pub fn display(&self, unicode: bool) -> &'static str {
        let pair = match self {
            Self::Ok => SymbolPair::new("[OK]", "[\u{2713}]"),
            Self::Warn => SymbolPair::new("[WARN]", "[\u{26A0}]"),
            Self::Err => SymbolPair::new("[ERR]", "[\u{2717}]"),
        };
        pair.get(unicode)
    }

    pub fn style(&self) -> Style {
        match self {
            Self::Ok => styles::success(),
            Self::Warn => styles::warning(),
            Self::Err => styles::error(),
        }
    }
}

/// Named styles used across the renderer.
pub mod styles {
    use owo_colors::Style;

    pub fn bold() -> Style {
        Style::new().bold()
    }

    pub fn dim() -> Style {
        Style::new().dimmed()
    }

    pub fn success() -> Style {
        Style::new().green()
    }

    pub fn warning() -> Style {
        Style::new().yellow()
    }

    pub fn error() -> Style {
        Style::new().red()
    }
}

/// Apply `style` when color is enabled.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Spinner frames (the trailing blank frame clears the line on finish).
pub fn spinner_frames(unicode: bool) -> &'static [&'static str] {
    if unicode {
        &[
            "\u{280B}", "\u{2819}", "\u{2839}", "\u{2838}", "\u{283C}", "\u{2834}", "\u{2826}",
            "\u{2827}", "\u{2807}", "\u{280F}", "",
        ]
    } else {
        &["|", "/", "-", "\\", ""]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_display() {
        assert_eq!(Badge::Ok.display(false), "[OK]");
        assert_eq!(Badge::Err.display(false), "[ERR]");
        assert_eq!(Badge::Ok.display(true), "[\u{2713}]");
    }

    #[test]
    fn test_styled_without_color_is_plain() {
        assert_eq!(styled("text", styles::bold(), false), "text");
    }

    #[test]
    fn test_styled_with_color_adds_escapes() {
        let out = styled("text", Badge::Err.style(), true);
        assert!(out.contains("text"));
        assert!(out.contains('\x1b'));
    }

    #[test]
    fn test_markers_have_ascii_fallbacks() {
        assert_eq!(PINNED.get(false), "*");
        assert_eq!(LOCKED.get(false), "#");
    }

    #[test]
    fn test_spinner_frames() {
        assert_eq!(spinner_frames(false).len(), 5);
        assert_eq!(spinner_frames(true).len(), 11);
    }
}
