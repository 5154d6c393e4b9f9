pub mod commands;
pub mod core;
pub mod guided;
pub mod output;
mod shell;
pub mod ui;
pub mod views;

pub use shell::{run_cli, SCRIPT_ENV};
