//! Guided entry: walks every field of the form in order, then submits.

use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::app::{AppState, SubmitOutcome};
use crate::catalog::MovieCatalog;
use crate::cli::core::CliError;
use crate::cli::output;
use crate::cli::ui::test_mode::{self, TextTestInput};
use crate::errors::StateError;
use crate::form::{FieldKey, MessageCatalog};

/// Answer to a single field prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResponse {
    Value(String),
    Keep,
    Cancel,
}

/// Interaction surface for guided entry. The terminal implementation uses
/// dialoguer; tests supply canned answers.
pub trait FieldPrompter {
    fn prompt_text(&mut self, field: FieldKey, current: &str) -> Result<PromptResponse, CliError>;

    fn prompt_movie(
        &mut self,
        catalog: &MovieCatalog,
        current: &str,
    ) -> Result<PromptResponse, CliError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOutcome {
    Submitted(SubmitOutcome),
    Cancelled,
}

/// Prompts for each field and binds the answers. Nothing is written to
/// `state` when the user cancels part way.
pub fn fill<P: FieldPrompter>(
    state: &mut AppState,
    catalog: &MovieCatalog,
    messages: &MessageCatalog,
    prompter: &mut P,
) -> Result<FillOutcome, CliError> {
    if state.is_summary() {
        return Err(StateError::WrongView {
            action: "fill",
            view: state.view_kind(),
        }
        .into());
    }
    let mut working = state.draft().clone();

    for field in FieldKey::ALL {
        let current = working.get(field).to_string();
        let answer = match field {
            FieldKey::SelectedMovie => prompt_movie_until_known(prompter, catalog, &current)?,
            _ => prompter.prompt_text(field, &current)?,
        };
        match answer {
            PromptResponse::Value(value) if field == FieldKey::Comment => {
                working.set(field, expand_line_breaks(&value))
            }
            PromptResponse::Value(value) => working.set(field, value),
            PromptResponse::Keep => {}
            PromptResponse::Cancel => return Ok(FillOutcome::Cancelled),
        }
    }

    for field in FieldKey::ALL {
        state.set_field(field, working.get(field))?;
    }
    Ok(FillOutcome::Submitted(state.submit(messages)?))
}

fn prompt_movie_until_known<P: FieldPrompter>(
    prompter: &mut P,
    catalog: &MovieCatalog,
    current: &str,
) -> Result<PromptResponse, CliError> {
    loop {
        match prompter.prompt_movie(catalog, current)? {
            PromptResponse::Value(input) if input.trim().is_empty() => {
                return Ok(PromptResponse::Value(String::new()))
            }
            PromptResponse::Value(input) => match catalog.resolve(&input) {
                Some(movie) => return Ok(PromptResponse::Value(movie.title.clone())),
                None => output::warning(unknown_movie_message(catalog, &input)),
            },
            other => return Ok(other),
        }
    }
}

/// Turns a typed `\n` into a line break so the comment can span lines on a
/// single-line prompt.
pub fn expand_line_breaks(input: &str) -> String {
    input.replace("\\n", "\n")
}

/// Warning for a selection that matches no catalog entry.
pub fn unknown_movie_message(catalog: &MovieCatalog, input: &str) -> String {
    match catalog.suggest(input) {
        Some(movie) => format!(
            "`{}` is not in the catalog. Did you mean `{}`?",
            input.trim(),
            movie.title
        ),
        None => format!(
            "`{}` is not in the catalog. Use `movies` to list the options.",
            input.trim()
        ),
    }
}

/// Dialoguer-backed prompts, or scripted answers when test mode is on.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    fn scripted(label: &str) -> Option<PromptResponse> {
        test_mode::next_text_input(label).map(|input| match input {
            TextTestInput::Value(value) => PromptResponse::Value(value),
            TextTestInput::Keep => PromptResponse::Keep,
            TextTestInput::Cancel => PromptResponse::Cancel,
        })
    }
}

impl FieldPrompter for TerminalPrompter {
    fn prompt_text(&mut self, field: FieldKey, current: &str) -> Result<PromptResponse, CliError> {
        if let Some(scripted) = Self::scripted(field.label()) {
            return Ok(scripted);
        }
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(field.label())
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()?;
        Ok(PromptResponse::Value(value))
    }

    fn prompt_movie(
        &mut self,
        catalog: &MovieCatalog,
        current: &str,
    ) -> Result<PromptResponse, CliError> {
        if let Some(scripted) = Self::scripted(FieldKey::SelectedMovie.label()) {
            return Ok(scripted);
        }
        let items: Vec<String> = catalog
            .movies()
            .iter()
            .map(|movie| format!("{}  ({})", movie.title, movie.byline()))
            .collect();
        let initial = catalog
            .movies()
            .iter()
            .position(|movie| movie.title.eq_ignore_ascii_case(current.trim()))
            .unwrap_or(0);
        let choice = Select::with_theme(&self.theme)
            .with_prompt("Select your favorite movie (ESC cancels)")
            .items(&items[..])
            .default(initial)
            .interact_opt()?;
        Ok(match choice {
            Some(index) => PromptResponse::Value(catalog.movies()[index].title.clone()),
            None => PromptResponse::Cancel,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct MockPrompter {
        answers: VecDeque<PromptResponse>,
        movie_prompts: usize,
    }

    impl MockPrompter {
        fn new(answers: Vec<PromptResponse>) -> Self {
            Self {
                answers: answers.into(),
                movie_prompts: 0,
            }
        }

        fn next(&mut self) -> PromptResponse {
            self.answers.pop_front().unwrap_or(PromptResponse::Cancel)
        }
    }

    impl FieldPrompter for MockPrompter {
        fn prompt_text(
            &mut self,
            _field: FieldKey,
            _current: &str,
        ) -> Result<PromptResponse, CliError> {
            Ok(self.next())
        }

        fn prompt_movie(
            &mut self,
            _catalog: &MovieCatalog,
            _current: &str,
        ) -> Result<PromptResponse, CliError> {
            self.movie_prompts += 1;
            Ok(self.next())
        }
    }

    fn value(text: &str) -> PromptResponse {
        PromptResponse::Value(text.to_string())
    }

    #[test]
    fn completed_fill_submits_the_form() {
        let mut state = AppState::new();
        let mut prompter = MockPrompter::new(vec![
            value("Alice"),
            value("alice@example.com"),
            value("1"),
            value(""),
        ]);
        let outcome = fill(
            &mut state,
            &MovieCatalog::builtin(),
            MessageCatalog::english(),
            &mut prompter,
        )
        .unwrap();
        assert_eq!(outcome, FillOutcome::Submitted(SubmitOutcome::Accepted));
        assert_eq!(state.accepted().unwrap().selected_movie(), "Inception");
    }

    #[test]
    fn unknown_movie_is_asked_again() {
        let mut state = AppState::new();
        let mut prompter = MockPrompter::new(vec![
            value("Alice"),
            value("alice@example.com"),
            value("Inceptoin"),
            value("parasite"),
            value("Great film"),
        ]);
        fill(
            &mut state,
            &MovieCatalog::builtin(),
            MessageCatalog::english(),
            &mut prompter,
        )
        .unwrap();
        assert_eq!(prompter.movie_prompts, 2);
        assert_eq!(state.accepted().unwrap().selected_movie(), "Parasite");
    }

    #[test]
    fn cancel_leaves_the_draft_untouched() {
        let mut state = AppState::new();
        state.set_field(FieldKey::Name, "Before").unwrap();
        let mut prompter = MockPrompter::new(vec![value("After"), PromptResponse::Cancel]);
        let outcome = fill(
            &mut state,
            &MovieCatalog::builtin(),
            MessageCatalog::english(),
            &mut prompter,
        )
        .unwrap();
        assert_eq!(outcome, FillOutcome::Cancelled);
        assert_eq!(state.draft().name, "Before");
    }

    #[test]
    fn keep_preserves_existing_values_and_invalid_fill_stays_on_form() {
        let mut state = AppState::new();
        state.set_field(FieldKey::Email, "kept@example.com").unwrap();
        let mut prompter = MockPrompter::new(vec![
            value(""),
            PromptResponse::Keep,
            value(""),
            PromptResponse::Keep,
        ]);
        let outcome = fill(
            &mut state,
            &MovieCatalog::builtin(),
            MessageCatalog::english(),
            &mut prompter,
        )
        .unwrap();
        assert_eq!(outcome, FillOutcome::Submitted(SubmitOutcome::Rejected));
        assert_eq!(state.draft().email, "kept@example.com");
        let keys: Vec<_> = state.errors().keys().collect();
        assert_eq!(keys, vec![FieldKey::Name, FieldKey::SelectedMovie]);
    }

    #[test]
    fn comment_answers_may_span_lines() {
        let mut state = AppState::new();
        let mut prompter = MockPrompter::new(vec![
            value("Alice"),
            value("alice@example.com"),
            value("2"),
            value(r"Loved it.\nWould watch again?"),
        ]);
        fill(
            &mut state,
            &MovieCatalog::builtin(),
            MessageCatalog::english(),
            &mut prompter,
        )
        .unwrap();
        assert_eq!(
            state.accepted().unwrap().comment(),
            Some("Loved it.\nWould watch again?")
        );
    }

    #[test]
    fn unknown_movie_message_suggests_close_titles() {
        let catalog = MovieCatalog::builtin();
        assert!(unknown_movie_message(&catalog, "Intersteller")
            .contains("Did you mean `Interstellar`"));
        assert!(unknown_movie_message(&catalog, "zzzzzzzzzzzz").contains("movies"));
    }
}
