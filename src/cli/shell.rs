use std::{
    borrow::Cow,
    fmt,
    io::{self, BufRead},
};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::{ValidationContext, ValidationResult, Validator},
    Context as ReadlineContext, Editor, Helper,
};
use shell_words::split;

use crate::cli::core::{CliError, CliMode, LoopControl, ShellContext};
use crate::cli::output::info as output_info;
use crate::form::FieldKey;

pub const SCRIPT_ENV: &str = "FAVORITE_MOVIE_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;
    context.render_current();

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
    let helper = CommandHelper::new(context.command_names());
    editor.set_helper(Some(helper));

    loop {
        if !context.running {
            break;
        }
        let prompt = context.prompt();
        let line = editor.readline(&prompt);

        match line {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                editor.add_history_entry(trimmed).ok();

                match context.process_line(trimmed) {
                    Ok(LoopControl::Continue) => {}
                    Ok(LoopControl::Exit) => break,
                    Err(err) => context.report_error(err)?,
                }
            }
            Err(ReadlineError::Interrupted) => {
                if context.confirm_exit()? {
                    break;
                }
            }
            Err(ReadlineError::Eof) => {
                output_info("Goodbye.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if !context.running {
            break;
        }
        let line = line?;
        match context.process_line(&line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err)?,
        }
    }
    Ok(())
}

struct CommandHelper {
    commands: Vec<String>,
    fields: Vec<&'static str>,
}

impl CommandHelper {
    fn new(names: Vec<&'static str>) -> Self {
        let mut commands: Vec<String> = names
            .into_iter()
            .map(|name| name.to_ascii_lowercase())
            .collect();
        commands.sort();
        commands.dedup();
        let fields = FieldKey::ALL.iter().map(|field| field.as_str()).collect();
        Self { commands, fields }
    }

    /// Candidates for the word under the cursor. Only the command itself and
    /// the field argument of `clear` are completed.
    fn candidates(&self, leading: Option<&str>, needle: &str) -> Vec<Pair> {
        let pool: Vec<&str> = match leading {
            None => self.commands.iter().map(String::as_str).collect(),
            Some("clear") => self.fields.clone(),
            Some("help") => self.commands.iter().map(String::as_str).collect(),
            Some(_) => Vec::new(),
        };
        let needle = needle.to_ascii_lowercase();
        pool.into_iter()
            .filter(|name| name.to_ascii_lowercase().starts_with(&needle))
            .map(|name| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect()
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix
            .rfind(char::is_whitespace)
            .map(|idx| idx + 1)
            .unwrap_or(0);

        let words: Vec<&str> = prefix[..start].split_whitespace().collect();
        let leading = match words.as_slice() {
            [] => None,
            [command] => Some(command.to_ascii_lowercase()),
            _ => return Ok((start, Vec::new())),
        };
        Ok((start, self.candidates(leading.as_deref(), &prefix[start..])))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for CommandHelper {
    fn validate(&self, ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        let _ = ctx;
        Ok(ValidationResult::Valid(None))
    }
}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, ParseError> {
    split(input).map_err(|err| ParseError {
        message: err.to_string(),
    })
}

#[derive(Debug)]
pub(crate) struct ParseError {
    message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not parse command: {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn helper() -> CommandHelper {
        CommandHelper::new(vec!["submit", "show", "name", "help"])
    }

    fn replacements(pairs: Vec<Pair>) -> Vec<String> {
        pairs.into_iter().map(|pair| pair.replacement).collect()
    }

    #[test]
    fn completes_command_names_by_prefix() {
        assert_eq!(
            replacements(helper().candidates(None, "s")),
            vec!["show", "submit"]
        );
    }

    #[test]
    fn completes_field_names_after_clear() {
        assert_eq!(
            replacements(helper().candidates(Some("clear"), "sel")),
            vec!["selectedMovie"]
        );
        assert!(helper().candidates(Some("name"), "").is_empty());
    }

    #[test]
    fn quoted_arguments_stay_together() {
        assert_eq!(
            parse_command_line("comment \"two words\"").unwrap(),
            vec!["comment", "two words"]
        );
        assert!(parse_command_line("comment \"unterminated").is_err());
    }
}
