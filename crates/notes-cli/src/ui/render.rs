//! Turning results into text for the current output mode.
//!
//! Pretty output is for a person at a terminal. Everything else is
//! `key=value` lines or tab-separated rows that scripts can split.

use comfy_table::presets::NOTHING;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use super::context::UiContext;
use super::theme::{styled, styles, Badge};

const DIVIDER_MAX: usize = 60;

/// `Notes · list (tag work)` on a terminal, `notes list` otherwise.
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    if ctx.mode.is_json() {
        return String::new();
    }
    if !ctx.mode.is_pretty() {
        return format!("notes {}", command);
    }
    let app = styled("Notes", styles::bold(), ctx.color);
    let suffix = context.map(|c| format!(" ({})", c)).unwrap_or_default();
    format!("{} \u{00B7} {}{}", app, command, suffix)
}

pub fn divider(ctx: &UiContext) -> String {
    let width = ctx.width.min(DIVIDER_MAX);
    match (ctx.mode.is_pretty(), ctx.unicode) {
        (false, _) => "---".to_string(),
        (true, true) => "\u{2500}".repeat(width),
        (true, false) => "-".repeat(width),
    }
}

pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let mark = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        mark
    } else {
        format!("{} {}", mark, message)
    }
}

fn plain_key(key: &str) -> String {
    key.trim().to_lowercase().replace(' ', "_")
}

/// `Key: value` with a dim key, or `key=value`.
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if !ctx.mode.is_pretty() {
        return format!("{}={}", plain_key(key), value);
    }
    let label = styled(&format!("{}:", key), styles::dim(), ctx.color);
    format!("{} {}", label, value)
}

pub fn hint(ctx: &UiContext, text: &str) -> String {
    kv(ctx, "Hint", text)
}

/// Confirmation block printed after a command changes something.
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, &str)]) -> String {
    let (lead, indent) = if ctx.mode.is_pretty() {
        (badge(ctx, Badge::Ok, title), "  ")
    } else {
        ("status=ok".to_string(), "")
    };
    std::iter::once(lead)
        .chain(
            items
                .iter()
                .map(|(key, value)| format!("{}{}", indent, kv(ctx, key, value))),
        )
        .collect::<Vec<_>>()
        .join("\n")
}

fn header_cell(ctx: &UiContext, text: &str) -> Cell {
    let cell = Cell::new(text);
    if ctx.color {
        cell.add_attribute(Attribute::Dim)
    } else {
        cell
    }
}

/// Borderless table on a terminal; headerless tab-separated rows otherwise.
pub fn simple_table(ctx: &UiContext, headers: &[&str], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(u16::try_from(ctx.width).unwrap_or(u16::MAX))
        .set_header(headers.iter().map(|text| header_cell(ctx, text)));
    for row in rows {
        table.add_row(row);
    }
    for column in table.column_iter_mut() {
        column.set_padding((0, 2));
    }
    table.to_string()
}

/// Print to stdout unless in JSON mode.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}

fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let lead = if ctx.mode.is_pretty() {
        badge(ctx, Badge::Err, message)
    } else {
        format!("error={}", message)
    };
    match error_hint {
        Some(text) => format!("{}\n{}", lead, hint(ctx, text)),
        None => lead,
    }
}

pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;

    fn ctx(mode: OutputMode) -> UiContext {
        UiContext {
            is_tty: mode.is_pretty(),
            color: false,
            unicode: mode.is_pretty(),
            width: 80,
            mode,
        }
    }

    #[test]
    fn test_header_per_mode() {
        let pretty = header(&ctx(OutputMode::Pretty), "list", Some("tag work"));
        assert_eq!(pretty, "Notes \u{00B7} list (tag work)");
        assert_eq!(header(&ctx(OutputMode::Plain), "list", None), "notes list");
        assert_eq!(header(&ctx(OutputMode::Json), "list", None), "");
    }

    #[test]
    fn test_kv_and_hint() {
        let plain = ctx(OutputMode::Plain);
        assert_eq!(kv(&plain, "Format version", "1"), "format_version=1");
        assert_eq!(hint(&plain, "run notes init"), "hint=run notes init");

        let pretty = ctx(OutputMode::Pretty);
        assert_eq!(kv(&pretty, "Title", "Groceries"), "Title: Groceries");
        assert_eq!(hint(&pretty, "run notes init"), "Hint: run notes init");
    }

    #[test]
    fn test_receipt_per_mode() {
        let items = [("ID", "7a2e3c0b"), ("Title", "Groceries")];
        assert_eq!(
            receipt(&ctx(OutputMode::Plain), "Created note", &items),
            "status=ok\nid=7a2e3c0b\ntitle=Groceries"
        );
        assert_eq!(
            receipt(&ctx(OutputMode::Pretty), "Created note", &items),
            "[\u{2713}] Created note\n  ID: 7a2e3c0b\n  Title: Groceries"
        );
    }

    #[test]
    fn test_table_plain_rows_have_no_header() {
        let rows = vec![
            vec!["7a2e3c0b".to_string(), "Groceries".to_string()],
            vec!["9b3f4d1c".to_string(), "Meeting notes".to_string()],
        ];
        let out = simple_table(&ctx(OutputMode::Plain), &["ID", "Title"], &rows);
        assert_eq!(out, "7a2e3c0b\tGroceries\n9b3f4d1c\tMeeting notes");
    }

    #[test]
    fn test_table_pretty_shows_headers() {
        let rows = vec![vec!["7a2e3c0b".to_string(), "Groceries".to_string()]];
        let out = simple_table(&ctx(OutputMode::Pretty), &["ID", "Title"], &rows);
        assert!(out.lines().next().unwrap_or_default().contains("Title"));
        assert!(out.contains("Groceries"));
    }

    #[test]
    fn test_divider() {
        assert_eq!(divider(&ctx(OutputMode::Plain)), "---");
        assert_eq!(divider(&ctx(OutputMode::Pretty)).chars().count(), DIVIDER_MAX);
    }

    #[test]
    fn test_error_message_with_hint() {
        let pretty = error_message(&ctx(OutputMode::Pretty), "Store is locked", Some("Retry"));
        assert_eq!(pretty, "[\u{2717}] Store is locked\nHint: Retry");

        let plain = error_message(&ctx(OutputMode::Plain), "Store is locked", None);
        assert_eq!(plain, "error=Store is locked");
    }
}
