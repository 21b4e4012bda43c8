//! CLI output helpers for consistent formatting.

use colored::Colorize;

pub fn heading(text: &str) -> String {
    format!("{}", text.bright_cyan())
}

/// `  Label: value` summary line
pub fn field(label: &str, value: impl std::fmt::Display) -> String {
    format!("  {}: {}", label.bright_blue(), value)
}

pub fn muted(text: &str) -> String {
    format!("{}", text.bright_black())
}

pub fn success(text: &str) -> String {
    format!("{}", text.bright_green())
}

pub fn warn_line(text: &str) -> String {
    format!("[{}] {}", "Warning".yellow(), text)
}

pub fn err_line(text: &str) -> String {
    format!("{} {}", "Error".red().bold(), text)
}

pub fn status_ok() -> String {
    format!("{}", "OK".green())
}
