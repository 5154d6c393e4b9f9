use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::{
    catalog::MovieCatalog,
    errors::{CatalogError, ConfigError},
    form::{Locale, MessageCatalog},
};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV: &str = "FAVORITE_MOVIE_CONFIG";
const APP_DIR: &str = "favorite_movie";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub locale: Locale,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    pub plain_mode: bool,
    pub screen_reader_mode: bool,
}

impl Config {
    pub fn messages(&self) -> &'static MessageCatalog {
        MessageCatalog::for_locale(self.locale)
    }

    /// The configured catalog, or the built-in one when none is set. A
    /// relative path is resolved against `base`.
    pub fn load_catalog(&self, base: Option<&Path>) -> Result<MovieCatalog, CatalogError> {
        match &self.catalog_path {
            Some(path) if path.is_relative() => match base {
                Some(dir) => MovieCatalog::from_path(&dir.join(path)),
                None => MovieCatalog::from_path(path),
            },
            Some(path) => MovieCatalog::from_path(path),
            None => Ok(MovieCatalog::builtin()),
        }
    }
}

/// Locates and reads the configuration file. The file is never written.
pub struct ConfigManager {
    path: Option<PathBuf>,
}

impl ConfigManager {
    /// Uses `FAVORITE_MOVIE_CONFIG` when set, otherwise the platform config
    /// directory.
    pub fn new() -> Self {
        let path = env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE)));
        Self { path }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Reads the file, falling back to defaults when it does not exist.
    pub fn load(&self) -> Result<Config, ConfigError> {
        match &self.path {
            Some(path) if path.exists() => {
                let data = fs::read_to_string(path)?;
                let config = serde_json::from_str(&data)?;
                tracing::debug!(path = %path.display(), "loaded configuration");
                Ok(config)
            }
            _ => Ok(Config::default()),
        }
    }

    /// Directory relative catalog paths are resolved against.
    pub fn base_dir(&self) -> Option<&Path> {
        self.path.as_deref().and_then(Path::parent)
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
