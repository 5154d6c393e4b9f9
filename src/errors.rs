use thiserror::Error;

use crate::app::ViewKind;

/// Raised when an action is issued while the other view is showing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("`{action}` is not available on the {view} view")]
    WrongView {
        action: &'static str,
        view: ViewKind,
    },
}

/// Failures while loading a movie catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("movie catalog is empty")]
    Empty,
}

/// Failures while resolving or reading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
