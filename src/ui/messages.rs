//! Console messages: one colored icon per level, plain text after it.

use ansi_term::{Colour, Style};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";
const ICON_STAGE: &str = "▶";

fn badge(colour: Colour, icon: &str) -> String {
    Style::new().fg(colour).bold().paint(icon).to_string()
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", badge(Colour::Blue, ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", badge(Colour::Green, ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", badge(Colour::Yellow, ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", badge(Colour::Red, ICON_ERR), msg);
}

/// Section header, e.g. before the attendance table.
pub fn header<T: fmt::Display>(msg: T) {
    println!(
        "{}\n",
        Colour::Blue
            .bold()
            .paint(format!("====================== {msg}"))
    );
}

/// One pipeline stage with its outcome count.
pub fn stage<T: fmt::Display>(name: &str, detail: T) {
    println!(
        "{} {:<22} {}",
        badge(Colour::Cyan, ICON_STAGE),
        Style::new().bold().paint(name),
        detail
    );
}
