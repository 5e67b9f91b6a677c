use std::fmt;

use colored::Colorize;
use finplan_domain::Currency;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

fn apply_style(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()).bold().to_string(),
        MessageKind::Success => format!("[ok] {text}").bright_green().to_string(),
        MessageKind::Warning => format!("[!] {text}").bright_yellow().to_string(),
        MessageKind::Error => format!("[x] {text}").bright_red().to_string(),
        MessageKind::Info => text,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = apply_style(kind, message);
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

/// `1234.5` → `1234.50 $`.
pub fn money(amount: f64, currency: Currency) -> String {
    format!("{:.2} {}", amount, currency.symbol())
}

/// Green for non-negative values, red otherwise.
pub fn signed(text: impl fmt::Display, positive: bool) -> String {
    let text = text.to_string();
    if positive {
        text.bright_green().bold().to_string()
    } else {
        text.bright_red().bold().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_uses_two_decimals_and_symbol() {
        assert_eq!(money(1234.5, Currency::Dollar), "1234.50 $");
        assert_eq!(money(-8000.0, Currency::Hryvnia), "-8000.00 ₴");
    }
}
