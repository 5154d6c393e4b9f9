use std::fmt;

use colored::Colorize;

use crate::cli::output::{current_preferences, OutputPreferences};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Style {
    Header,
    Subheader,
    Detail,
    Error,
    Highlight,
}

/// Styles text fragments according to the active output preferences.
pub struct Formatter {
    prefs: OutputPreferences,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self::with_preferences(current_preferences())
    }

    pub fn with_preferences(prefs: OutputPreferences) -> Self {
        Self { prefs }
    }

    pub fn is_plain(&self) -> bool {
        self.prefs.is_plain()
    }

    pub fn header_text(&self, title: impl fmt::Display) -> String {
        self.apply_style(Style::Header, format!("=== {} ===", title))
    }

    pub fn subheader_text(&self, title: impl fmt::Display) -> String {
        self.apply_style(Style::Subheader, title)
    }

    pub fn detail_text(&self, message: impl fmt::Display) -> String {
        self.apply_style(Style::Detail, message)
    }

    /// Inline validation message placed under a field.
    pub fn field_error_text(&self, message: impl fmt::Display) -> String {
        let marker = if self.is_plain() { "!" } else { "✖" };
        self.apply_style(Style::Error, format!("{marker} {message}"))
    }

    pub fn highlight_text(&self, message: impl fmt::Display) -> String {
        self.apply_style(Style::Highlight, message)
    }

    /// Label and value on one row. Continuation lines of a multi-line value
    /// are indented to the value column.
    pub fn format_two_column_row(&self, label: &str, value: &str, width: usize) -> String {
        let indent = " ".repeat(width + 4);
        let mut lines = value.split('\n');
        let first = lines.next().unwrap_or("");
        let mut row = format!("  {:<width$}  {}", label, first, width = width);
        for line in lines {
            row.push('\n');
            row.push_str(&indent);
            row.push_str(line);
        }
        row
    }

    pub fn command_hint(&self, commands: &[&str]) -> String {
        self.detail_text(format!("Commands: {}", commands.join(", ")))
    }

    fn apply_style(&self, style: Style, message: impl fmt::Display) -> String {
        let text = message.to_string();
        if self.is_plain() {
            return text;
        }
        match style {
            Style::Header => text.bold().to_string(),
            Style::Subheader => text.bright_blue().bold().to_string(),
            Style::Error => text.red().to_string(),
            Style::Highlight => text.cyan().bold().to_string(),
            Style::Detail => text.dimmed().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Formatter {
        Formatter::with_preferences(OutputPreferences {
            plain_mode: true,
            screen_reader_mode: false,
            color_enabled: false,
        })
    }

    #[test]
    fn plain_formatter_leaves_text_untouched() {
        let formatter = plain();
        assert_eq!(formatter.header_text("Favorite Movie"), "=== Favorite Movie ===");
        assert_eq!(formatter.field_error_text("name required"), "! name required");
        assert_eq!(formatter.highlight_text("x"), "x");
    }

    #[test]
    fn two_column_rows_pad_labels() {
        let row = plain().format_two_column_row("Name", "Alice", 8);
        assert_eq!(row, "  Name      Alice");
    }

    #[test]
    fn multi_line_values_stay_in_the_value_column() {
        let row = plain().format_two_column_row("Comment", "first\nsecond", 7);
        assert_eq!(row, "  Comment  first\n           second");
    }
}
