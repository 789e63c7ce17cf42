//! Terminal rendering for the human-readable command output.
//!
//! Line builders are pure so their layout can be tested; the `print_*`
//! wrappers only decide the stream.

use std::fmt::Display;

use crate::app::report::UNAVAILABLE;

const RULE_WIDTH: usize = 48;
const LABEL_WIDTH: usize = 15;

/// Kind of a one-line status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Warn,
    Error,
    Info,
}

impl Status {
    const fn marker(self) -> &'static str {
        match self {
            Self::Ok => "✓ ",
            Self::Warn => "⚠ ",
            Self::Error => "✗ ",
            Self::Info => "",
        }
    }
}

/// `── Title ─────` padded to the rule width.
#[must_use]
pub fn heading_line(title: &str) -> String {
    let lead = format!("── {title} ");
    let fill = RULE_WIDTH.saturating_sub(lead.chars().count()).max(2);
    format!("{lead}{}", "─".repeat(fill))
}

/// `label` left-aligned in a fixed column, then `value`.
#[must_use]
pub fn field_line(label: &str, value: impl Display) -> String {
    format!("  {label:<LABEL_WIDTH$}{value}")
}

/// Comma-joined values, or the unavailable placeholder for none.
#[must_use]
pub fn joined_or_placeholder<T: Display>(values: &[T]) -> String {
    if values.is_empty() {
        return UNAVAILABLE.to_string();
    }
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Status text with its marker.
#[must_use]
pub fn status_line(status: Status, message: &str) -> String {
    format!("{}{message}", status.marker())
}

/// Print a blank line followed by a heading rule.
pub fn print_heading(title: &str) {
    println!();
    println!("{}", heading_line(title));
}

/// Print one labelled value.
pub fn print_field(label: &str, value: impl Display) {
    println!("{}", field_line(label, value));
}

/// Print a labelled value, or the placeholder when absent.
pub fn print_optional<T: Display>(label: &str, value: Option<T>) {
    match value {
        Some(value) => print_field(label, value),
        None => print_field(label, UNAVAILABLE),
    }
}

/// Print a labelled list.
pub fn print_list<T: Display>(label: &str, values: &[T]) {
    print_field(label, joined_or_placeholder(values));
}

/// Print a status message. Errors go to stderr.
pub fn print_status(status: Status, message: &str) {
    let line = status_line(status, message);
    if status == Status::Error {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_fills_to_rule_width() {
        let line = heading_line("Candidates");
        assert!(line.starts_with("── Candidates ─"));
        assert_eq!(line.chars().count(), RULE_WIDTH);
    }

    #[test]
    fn heading_keeps_long_titles_intact() {
        let title = "X".repeat(RULE_WIDTH);
        assert!(heading_line(&title).contains(&title));
        assert!(heading_line(&title).ends_with("──"));
    }

    #[test]
    fn field_aligns_values() {
        assert_eq!(field_line("Main", "412709"), "  Main           412709");
        assert_eq!(field_line("Top 4D shadow", "0123"), "  Top 4D shadow  0123");
    }

    #[test]
    fn empty_list_uses_placeholder() {
        let none: [String; 0] = [];
        assert_eq!(joined_or_placeholder(&none), UNAVAILABLE);
        assert_eq!(joined_or_placeholder(&["12", "21"]), "12, 21");
    }

    #[test]
    fn status_lines_carry_markers() {
        assert_eq!(status_line(Status::Ok, "done"), "✓ done");
        assert_eq!(status_line(Status::Error, "bad"), "✗ bad");
        assert_eq!(status_line(Status::Info, "plain"), "plain");
    }
}
