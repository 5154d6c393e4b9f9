//! Text renderings of the form and summary views.

use crate::app::{AppState, View};
use crate::catalog::MovieCatalog;
use crate::cli::ui::detail_view::DetailView;
use crate::cli::ui::formatting::Formatter;
use crate::cli::ui::table_renderer::{Table, TableColumn};
use crate::form::{AcceptedRecord, FieldKey, MessageCatalog, ValidationErrors};

pub const FORM_TITLE: &str = "Favorite Movie";
pub const SUMMARY_TITLE: &str = "Your Favorite Movie";
const EMPTY_VALUE: &str = "(empty)";
const LABEL_WIDTH: usize = 7;

/// Renders whichever view `state` is on.
pub fn render(
    state: &AppState,
    catalog: &MovieCatalog,
    messages: &MessageCatalog,
    formatter: &Formatter,
) -> String {
    match state.view() {
        View::Form => render_form(state, catalog, formatter),
        View::Summary(record) => render_summary(record, messages, formatter),
    }
}

pub fn render_form(state: &AppState, catalog: &MovieCatalog, formatter: &Formatter) -> String {
    let draft = state.draft();
    let errors = state.errors();
    let mut lines = vec![formatter.header_text(FORM_TITLE), String::new()];

    lines.push(formatter.subheader_text("Enter your Info"));
    push_field(&mut lines, FieldKey::Name, draft.get(FieldKey::Name), errors, formatter);
    push_field(&mut lines, FieldKey::Email, draft.get(FieldKey::Email), errors, formatter);

    lines.push(String::new());
    lines.push(formatter.subheader_text("Select Your Favorite Movie"));
    lines.push(render_options(catalog, draft.get(FieldKey::SelectedMovie)));
    if let Some(message) = errors.get(FieldKey::SelectedMovie) {
        lines.push(format!("  {}", formatter.field_error_text(message)));
    }

    lines.push(String::new());
    lines.push(formatter.subheader_text("Add Your Comment"));
    push_field(
        &mut lines,
        FieldKey::Comment,
        draft.get(FieldKey::Comment),
        errors,
        formatter,
    );

    lines.push(String::new());
    lines.push(formatter.command_hint(&["name", "email", "movie", "comment", "submit", "fill", "help"]));
    lines.join("\n")
}

fn push_field(
    lines: &mut Vec<String>,
    field: FieldKey,
    value: &str,
    errors: &ValidationErrors,
    formatter: &Formatter,
) {
    let shown = if value.is_empty() {
        formatter.detail_text(EMPTY_VALUE)
    } else {
        value.to_string()
    };
    lines.push(formatter.format_two_column_row(field.label(), &shown, LABEL_WIDTH));
    if let Some(message) = errors.get(field) {
        let indent = " ".repeat(LABEL_WIDTH + 4);
        lines.push(format!("{indent}{}", formatter.field_error_text(message)));
    }
}

/// Catalog options with the current selection marked.
pub fn render_options(catalog: &MovieCatalog, selected: &str) -> String {
    let selected = selected.trim();
    let mut table = Table::new(vec![
        TableColumn::left(""),
        TableColumn::right("#"),
        TableColumn::left("Title").with_max_width(40),
        TableColumn::left("Year • Director"),
    ])
    .without_headers();
    for (index, movie) in catalog.movies().iter().enumerate() {
        let marker = if !selected.is_empty() && movie.title.eq_ignore_ascii_case(selected) {
            "(*)"
        } else {
            "( )"
        };
        table.push_row(vec![
            marker.to_string(),
            (index + 1).to_string(),
            movie.title.clone(),
            movie.byline(),
        ]);
    }
    table.render()
}

/// Full catalog listing used by the `movies` command.
pub fn render_catalog(catalog: &MovieCatalog) -> String {
    let mut table = Table::new(vec![
        TableColumn::right("#"),
        TableColumn::left("Title"),
        TableColumn::right("Year"),
        TableColumn::left("Director"),
    ]);
    for (index, movie) in catalog.movies().iter().enumerate() {
        table.push_row(vec![
            (index + 1).to_string(),
            movie.title.clone(),
            movie.year.to_string(),
            movie.director.clone(),
        ]);
    }
    table.render()
}

pub fn render_summary(
    record: &AcceptedRecord,
    messages: &MessageCatalog,
    formatter: &Formatter,
) -> String {
    let view = [
        FieldKey::Name,
        FieldKey::Email,
        FieldKey::SelectedMovie,
        FieldKey::Comment,
    ]
    .into_iter()
    .fold(DetailView::new(SUMMARY_TITLE), |view, field| {
        view.with_field_or(field.label(), record.get(field), messages.placeholder(field))
    });

    let arrow = if formatter.is_plain() { "<-" } else { "←" };
    format!(
        "{}\n\n{}",
        view.render(formatter),
        formatter.highlight_text(format!("{arrow} Reset: type `reset` to return to the form."))
    )
}
