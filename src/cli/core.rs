//! Shell context, error types and command dispatch.

use std::io;

use dialoguer::{theme::ColorfulTheme, Confirm};
use strsim::levenshtein;
use thiserror::Error;

use crate::app::{AppState, SubmitOutcome, ViewKind};
use crate::catalog::MovieCatalog;
use crate::config::{Config, ConfigManager};
use crate::errors::{CatalogError, ConfigError, StateError};
use crate::form::{FieldKey, MessageCatalog};

use super::commands::{self, CommandRegistry};
use super::guided::{self, FieldPrompter, FillOutcome};
use super::output::{self, OutputPreferences};
use super::ui::formatting::Formatter;
use super::views;

/// Fatal errors that end the shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("could not load movie catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    State(#[from] StateError),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Per-command failures. Everything except `Cli` is reported and the shell
/// keeps running.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    State(#[from] StateError),
    #[error(transparent)]
    Cli(#[from] CliError),
    #[error("exit requested")]
    ExitRequested,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub running: bool,
    state: AppState,
    catalog: MovieCatalog,
    messages: &'static MessageCatalog,
    registry: CommandRegistry,
    theme: ColorfulTheme,
}

impl ShellContext {
    /// Loads configuration and the movie catalog, then applies output
    /// preferences.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let manager = ConfigManager::new();
        let config = manager.load()?;
        let catalog = config.load_catalog(manager.base_dir())?;
        tracing::info!(
            locale = %config.locale,
            movies = catalog.len(),
            "starting favorite movie form"
        );
        Ok(Self::from_parts(mode, &config, catalog))
    }

    pub fn from_parts(mode: CliMode, config: &Config, catalog: MovieCatalog) -> Self {
        output::set_preferences(OutputPreferences::from_config(config));
        Self {
            mode,
            running: true,
            state: AppState::new(),
            catalog,
            messages: config.messages(),
            registry: CommandRegistry::new(commands::all_definitions()),
            theme: ColorfulTheme::default(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn catalog(&self) -> &MovieCatalog {
        &self.catalog
    }

    pub(crate) fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn prompt(&self) -> String {
        format!("favorite-movie [{}]> ", self.state.view_kind())
    }

    pub(crate) fn render_current(&self) {
        let formatter = Formatter::new();
        println!();
        println!(
            "{}",
            views::render(&self.state, &self.catalog, self.messages, &formatter)
        );
    }

    pub(crate) fn set_field(&mut self, field: FieldKey, value: String) -> CommandResult {
        let cleared = value.trim().is_empty();
        self.state.set_field(field, value)?;
        if cleared {
            output::info(format!("{} cleared.", field.label()));
        } else {
            output::success(format!("{} updated.", field.label()));
        }
        self.render_current();
        Ok(())
    }

    pub(crate) fn submit(&mut self) -> CommandResult {
        let outcome = self.state.submit(self.messages)?;
        self.report_submit(outcome);
        Ok(())
    }

    pub(crate) fn report_submit(&self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::Accepted => output::success("Submission accepted."),
            SubmitOutcome::Rejected => {
                output::warning("Please fix the highlighted fields and submit again.")
            }
        }
        self.render_current();
    }

    pub(crate) fn reset(&mut self) -> CommandResult {
        self.state.reset()?;
        output::info("Form cleared.");
        self.render_current();
        Ok(())
    }

    /// Runs guided entry against the live form.
    pub(crate) fn fill<P: FieldPrompter>(&mut self, prompter: &mut P) -> CommandResult {
        match guided::fill(&mut self.state, &self.catalog, self.messages, prompter) {
            Ok(FillOutcome::Submitted(outcome)) => {
                self.report_submit(outcome);
                Ok(())
            }
            Ok(FillOutcome::Cancelled) => {
                output::info("Guided entry cancelled; the form was not changed.");
                Ok(())
            }
            Err(CliError::State(err)) => Err(err.into()),
            Err(err) => Err(err.into()),
        }
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        match self.registry.handler(command) {
            Some(handler) => match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            },
            None => {
                self.suggest_command(raw);
                Ok(LoopControl::Continue)
            }
        }
    }

    /// Tokenises and dispatches one line of input.
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match super::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(err.to_string());
                return Ok(LoopControl::Continue);
            }
        };

        let Some(raw) = tokens.first() else {
            return Ok(LoopControl::Continue);
        };
        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let lowered = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &lowered), name))
            .min_by_key(|(distance, _)| *distance);
        if let Some((distance, name)) = best {
            if distance <= 2 {
                output::info(format!("Did you mean `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt("Exit?")
            .default(true)
            .interact()?)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::info("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::State(err) => {
                output::warning(err.to_string());
                match self.state.view_kind() {
                    ViewKind::Summary => output::info("Use `reset` to return to the form."),
                    ViewKind::Form => output::info("Fill in the form and `submit` it first."),
                }
                Ok(())
            }
            CommandError::Cli(err) => Err(err),
        }
    }
}
