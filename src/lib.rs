#![doc(test(attr(deny(warnings))))]

//! Favorite Movie collects a name, an email address, a favorite movie and an
//! optional comment, validates the entry and presents a read-only summary
//! until the user resets the form.
//!
//! The view state machine lives in [`app`] and knows nothing about terminals;
//! [`cli`] hosts it in an interactive shell or a scripted stdin session.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod form;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Favorite Movie tracing initialized.");
    });
}
