//! Status and empty-cell coloring for terminal tables.

use crate::models::Punctuality;
use ansi_term::Colour;

/// Placeholder shown for cells with no value.
pub const EMPTY_CELL: &str = "--";

/// Grey placeholder for empty values, the value itself otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == EMPTY_CELL {
        Colour::Fixed(244).paint(EMPTY_CELL).to_string()
    } else {
        value.to_string()
    }
}

/// Green "On Time", bold red "Late", grey placeholder when absent.
pub fn colorize_status(value: &str) -> String {
    match Punctuality::from_label(value) {
        Some(p) if p.is_late() => Colour::Red.bold().paint(value).to_string(),
        Some(_) => Colour::Green.paint(value).to_string(),
        None => colorize_optional(value),
    }
}

/// Remove ANSI escape sequences, for width computations.
pub fn strip_ansi(s: &str) -> String {
    regex::Regex::new(r"\x1B\[[0-9;]*[mK]")
        .map(|re| re.replace_all(s, "").into_owned())
        .unwrap_or_else(|_| s.to_string())
}
