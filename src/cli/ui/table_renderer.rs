use crate::cli::output::current_preferences;

/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub max_width: Option<usize>,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn left(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            max_width: None,
            alignment: Alignment::Left,
        }
    }

    pub fn right(header: impl Into<String>) -> Self {
        Self {
            alignment: Alignment::Right,
            ..Self::left(header)
        }
    }

    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }
}

/// Column metadata plus rows of plain-text cells.
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
    pub show_headers: bool,
    pub padding: usize,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            show_headers: true,
            padding: 1,
        }
    }

    pub fn without_headers(mut self) -> Self {
        self.show_headers = false;
        self
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Content width of every column, honouring `max_width`.
    pub fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let header_width = if self.show_headers {
                    visible_width(&column.header)
                } else {
                    0
                };
                let width = self
                    .rows
                    .iter()
                    .filter_map(|row| row.get(idx))
                    .map(|cell| visible_width(cell))
                    .fold(header_width, usize::max);
                match column.max_width {
                    Some(max) => width.min(max),
                    None => width,
                }
            })
            .collect()
    }

    pub fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let cell = row.get(idx).map(String::as_str).unwrap_or("");
                render_cell(cell, widths[idx], column.alignment, self.padding)
            })
            .collect::<Vec<_>>()
            .join(" ")
            .trim_end()
            .to_string()
    }

    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let mut lines = Vec::with_capacity(self.rows.len() + 2);

        if self.show_headers {
            let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
            lines.push(self.render_row(&header, &widths));
            lines.push(horizontal_rule(&widths, self.padding));
        }
        for row in &self.rows {
            lines.push(self.render_row(row, &widths));
        }

        lines.join("\n")
    }
}

/// Character count ignoring ANSI escape sequences.
pub fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' && chars.peek() == Some(&'[') {
            chars.next();
            for terminator in chars.by_ref() {
                if ('\u{40}'..='\u{7e}').contains(&terminator) {
                    break;
                }
            }
            continue;
        }
        width += 1;
    }
    width
}

fn truncate_text(text: &str, width: usize) -> String {
    if visible_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut fitted: String = text.chars().take(width - 1).collect();
    fitted.push('…');
    fitted
}

pub fn render_cell(text: &str, width: usize, alignment: Alignment, padding: usize) -> String {
    let fitted = truncate_text(text, width);
    let remaining = width.saturating_sub(visible_width(&fitted));
    let pad = " ".repeat(padding);
    match alignment {
        Alignment::Left => format!("{pad}{fitted}{}{pad}", " ".repeat(remaining)),
        Alignment::Right => format!("{pad}{}{fitted}{pad}", " ".repeat(remaining)),
    }
}

/// Rule spanning the full table width.
pub fn horizontal_rule(widths: &[usize], padding: usize) -> String {
    if widths.is_empty() {
        return String::new();
    }
    let total: usize =
        widths.iter().map(|w| w + padding * 2).sum::<usize>() + widths.len().saturating_sub(1);
    let ch = if current_preferences().is_plain() {
        '-'
    } else {
        '─'
    };
    ch.to_string().repeat(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_width_skips_escape_sequences() {
        assert_eq!(visible_width("\u{1b}[1mBold\u{1b}[0m"), 4);
        assert_eq!(visible_width("2010 • Nolan"), 12);
    }

    #[test]
    fn cells_are_truncated_with_ellipsis() {
        assert_eq!(render_cell("Interstellar", 6, Alignment::Left, 0), "Inter…");
        assert_eq!(render_cell("7", 3, Alignment::Right, 1), "   7 ");
    }

    #[test]
    fn rows_align_to_widest_cell() {
        let mut table = Table::new(vec![TableColumn::right("#"), TableColumn::left("Title")]);
        table.push_row(vec!["1".into(), "Up".into()]);
        table.push_row(vec!["10".into(), "Inception".into()]);
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "  1   Up");
        assert_eq!(lines[3], " 10   Inception");
    }
}
