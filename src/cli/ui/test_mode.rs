//! Scripted answers for guided prompts so terminal flows can run headless.
//!
//! Answers come from `FAVORITE_MOVIE_TEST_TEXT_INPUTS` (`|`-separated) or are
//! installed programmatically by tests. Special tokens: `<BLANK>` answers with
//! an empty string, `<KEEP>` keeps the current value, `<CANCEL>` aborts.

use once_cell::sync::Lazy;
use std::{collections::VecDeque, env, sync::Mutex};

pub const TEXT_INPUTS_ENV: &str = "FAVORITE_MOVIE_TEST_TEXT_INPUTS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextTestInput {
    Value(String),
    Keep,
    Cancel,
}

struct TextQueue {
    enabled: bool,
    inputs: VecDeque<TextTestInput>,
}

impl TextQueue {
    fn from_env() -> Self {
        match env::var(TEXT_INPUTS_ENV) {
            Ok(raw) => Self {
                enabled: true,
                inputs: parse_text_sequences(&raw),
            },
            Err(_) => Self::new(),
        }
    }

    fn new() -> Self {
        Self {
            enabled: false,
            inputs: VecDeque::new(),
        }
    }
}

static TEXT_INPUTS: Lazy<Mutex<TextQueue>> = Lazy::new(|| Mutex::new(TextQueue::from_env()));

pub fn is_enabled() -> bool {
    TEXT_INPUTS
        .lock()
        .expect("text input queue poisoned")
        .enabled
}

/// Next scripted answer, or `None` when scripting is off. An exhausted queue
/// answers `Cancel` so a scripted session never blocks on a real prompt.
pub fn next_text_input(label: &str) -> Option<TextTestInput> {
    let mut guard = TEXT_INPUTS.lock().expect("text input queue poisoned");
    if !guard.enabled {
        return None;
    }
    let next = guard.inputs.pop_front();
    if next.is_none() {
        tracing::debug!(prompt = label, "scripted inputs exhausted");
    }
    Some(next.unwrap_or(TextTestInput::Cancel))
}

fn parse_text_input(token: &str) -> TextTestInput {
    match token.to_ascii_uppercase().as_str() {
        "<CANCEL>" => TextTestInput::Cancel,
        "<KEEP>" => TextTestInput::Keep,
        "<BLANK>" | "<EMPTY>" => TextTestInput::Value(String::new()),
        _ => TextTestInput::Value(token.to_string()),
    }
}

fn parse_text_sequences(raw: &str) -> VecDeque<TextTestInput> {
    raw.split('|')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(parse_text_input)
        .collect()
}

pub fn install_text_inputs(inputs: Vec<TextTestInput>) {
    let mut guard = TEXT_INPUTS.lock().expect("text input queue poisoned");
    guard.enabled = true;
    guard.inputs = inputs.into();
}

pub fn reset_text_inputs() {
    let mut guard = TEXT_INPUTS.lock().expect("text input queue poisoned");
    guard.enabled = false;
    guard.inputs.clear();
}
