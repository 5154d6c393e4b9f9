use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use assert_cmd::Command;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated directory and returns the config path inside it. The
/// file itself is only written when `config` is given.
pub fn config_dir(config: Option<&str>) -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let path = base.join("config.json");
    if let Some(contents) = config {
        std::fs::write(&path, contents).expect("write config");
    }
    path
}

/// Binary in script mode with plain output and an isolated config file.
pub fn script_command(config_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("favorite_movie").expect("binary built");
    cmd.env("FAVORITE_MOVIE_SCRIPT", "1")
        .env("FAVORITE_MOVIE_CONFIG", config_path)
        .env("NO_COLOR", "1")
        .env_remove("FAVORITE_MOVIE_TEST_TEXT_INPUTS")
        .env_remove("RUST_LOG");
    cmd
}
