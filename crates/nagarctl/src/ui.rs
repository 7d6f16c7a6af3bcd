//! Terminal output helpers for consistent console styling.

use nagar_core::complaint::{Priority, Status};
use owo_colors::OwoColorize;

/// ANSI color codes using true color (24-bit)
pub mod colors {
    pub const HEADER: &str = "\x1b[38;2;255;210;120m";
    pub const WARN: &str = "\x1b[38;2;255;200;100m";
    pub const DIM: &str = "\x1b[38;2;140;140;140m";
    pub const RESET: &str = "\x1b[0m";
}

/// Horizontal rule
pub const HR: &str =
    "──────────────────────────────────────────────────────────────────────────────";

/// Print a styled header with version
pub fn print_header(name: &str, version: &str) {
    println!();
    println!("{}{} v{}{}", colors::HEADER, name, version, colors::RESET);
    println!("{}{}{}", colors::DIM, HR, colors::RESET);
}

/// Print a footer with horizontal rule
pub fn print_footer() {
    println!("{}{}{}", colors::DIM, HR, colors::RESET);
    println!();
}

/// Print a key-value pair with alignment
pub fn print_kv(key: &str, value: &str, key_width: usize) {
    println!("  {:width$} {}", key, value, width = key_width);
}

/// Print a warning line
pub fn print_warn(message: &str) {
    println!("  {}{}{}", colors::WARN, message, colors::RESET);
}

/// Status badge with workflow coloring.
pub fn status_badge(status: Status) -> String {
    match status {
        Status::New => status.to_string().cyan().to_string(),
        Status::Accepted => status.to_string().blue().to_string(),
        Status::Assigned => status.to_string().magenta().to_string(),
        Status::InProgress => status.to_string().yellow().to_string(),
        Status::Resolved => status.to_string().green().to_string(),
    }
}

/// Priority badge; HIGH stands out.
pub fn priority_badge(priority: Priority) -> String {
    match priority {
        Priority::High => priority.to_string().red().bold().to_string(),
        Priority::Medium => priority.to_string().yellow().to_string(),
        Priority::Low => priority.to_string().dimmed().to_string(),
    }
}

/// The red SLA marker shown next to late complaints.
pub fn overdue_badge() -> String {
    "SLA OVERDUE".red().bold().to_string()
}

/// Proportional bar for count tables.
pub fn count_bar(count: usize, max: usize, width: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let filled = (count * width + max / 2) / max;
    "█".repeat(filled)
}
