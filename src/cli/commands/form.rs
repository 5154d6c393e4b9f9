use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::guided::{expand_line_breaks, unknown_movie_message, TerminalPrompter};
use crate::cli::ui::test_mode;
use crate::form::FieldKey;

use super::{joined, CommandDefinition};

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("name", "Set your name", "name <text>", cmd_name),
        CommandDefinition::new("email", "Set your email address", "email <address>", cmd_email),
        CommandDefinition::new(
            "movie",
            "Select a movie by number or title",
            "movie <number|title>",
            cmd_movie,
        ),
        CommandDefinition::new(
            "comment",
            "Set an optional comment; `\\n` starts a new line",
            "comment [text]",
            cmd_comment,
        ),
        CommandDefinition::new(
            "clear",
            "Empty one field",
            "clear <name|email|movie|comment>",
            cmd_clear,
        ),
        CommandDefinition::new("submit", "Validate and submit the form", "submit", cmd_submit),
        CommandDefinition::new(
            "reset",
            "Leave the summary and start a new entry",
            "reset",
            cmd_reset,
        ),
        CommandDefinition::new(
            "fill",
            "Answer each field in turn, then submit",
            "fill",
            cmd_fill,
        ),
    ]
}

fn cmd_name(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.set_field(FieldKey::Name, joined(args))
}

fn cmd_email(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.set_field(FieldKey::Email, joined(args))
}

fn cmd_movie(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::InvalidArguments(
            "usage: movie <number|title>".into(),
        ));
    }
    let input = joined(args);
    let title = match context.catalog().resolve(&input) {
        Some(movie) => movie.title.clone(),
        None => {
            return Err(CommandError::InvalidArguments(unknown_movie_message(
                context.catalog(),
                &input,
            )))
        }
    };
    context.set_field(FieldKey::SelectedMovie, title)
}

fn cmd_comment(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.set_field(FieldKey::Comment, expand_line_breaks(&joined(args)))
}

fn cmd_clear(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [field] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: clear <name|email|movie|comment>".into(),
        ));
    };
    let field = FieldKey::parse(field).ok_or_else(|| {
        CommandError::InvalidArguments(format!("unknown field `{}`", field))
    })?;
    context.set_field(field, String::new())
}

fn cmd_submit(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.submit()
}

fn cmd_reset(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.reset()
}

fn cmd_fill(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.mode == CliMode::Script && !test_mode::is_enabled() {
        return Err(CommandError::InvalidArguments(
            "`fill` needs an interactive terminal; use `name`, `email`, `movie` and `comment` instead"
                .into(),
        ));
    }
    context.fill(&mut TerminalPrompter::new())
}
