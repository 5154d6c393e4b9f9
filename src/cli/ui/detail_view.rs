use std::cmp;

use crate::cli::ui::formatting::Formatter;
use crate::cli::ui::table_renderer::visible_width;

const MIN_RULE_WIDTH: usize = 40;

/// A label/value pair. `placeholder` replaces an empty value.
pub struct DetailField {
    pub label: String,
    pub value: String,
    pub placeholder: Option<String>,
}

impl DetailField {
    fn display_value(&self) -> &str {
        match &self.placeholder {
            Some(placeholder) if self.value.trim().is_empty() => placeholder,
            _ => &self.value,
        }
    }
}

/// Read-only block of aligned fields framed by horizontal rules.
pub struct DetailView {
    pub title: String,
    pub fields: Vec<DetailField>,
}

impl DetailView {
    pub fn new<T: Into<String>>(title: T) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field<K, V>(mut self, label: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.fields.push(DetailField {
            label: label.into(),
            value: value.into(),
            placeholder: None,
        });
        self
    }

    pub fn with_field_or<K, V, P>(mut self, label: K, value: V, placeholder: P) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        P: Into<String>,
    {
        self.fields.push(DetailField {
            label: label.into(),
            value: value.into(),
            placeholder: Some(placeholder.into()),
        });
        self
    }

    pub fn render(&self, formatter: &Formatter) -> String {
        let label_width = self
            .fields
            .iter()
            .map(|field| visible_width(&field.label))
            .max()
            .unwrap_or(0);

        let rows: Vec<String> = self
            .fields
            .iter()
            .map(|field| {
                let value = field.display_value();
                let value = if value == field.value {
                    value.to_string()
                } else {
                    formatter.detail_text(value)
                };
                formatter.format_two_column_row(&field.label, &value, label_width)
            })
            .collect();

        let widest = rows
            .iter()
            .flat_map(|row| row.lines())
            .map(visible_width)
            .max()
            .unwrap_or(0);
        let rule_width = cmp::max(cmp::max(widest, visible_width(&self.title)), MIN_RULE_WIDTH);
        let rule_char = if formatter.is_plain() { "-" } else { "─" };
        let rule = rule_char.repeat(rule_width);

        let mut lines = Vec::with_capacity(rows.len() + 3);
        lines.push(formatter.header_text(&self.title));
        lines.push(rule.clone());
        lines.extend(rows);
        lines.push(rule);
        lines.join("\n")
    }
}
