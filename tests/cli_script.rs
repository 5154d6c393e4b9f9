mod common;

use predicates::prelude::*;
use predicates::str::contains;

use common::{config_dir, script_command};

#[test]
fn script_mode_submits_and_shows_summary() {
    let config = config_dir(None);
    script_command(&config)
        .write_stdin("name Alice\nemail alice@example.com\nmovie 2\nsubmit\nexit\n")
        .assert()
        .success()
        .stdout(contains("Submission accepted."))
        .stdout(contains("Your Favorite Movie"))
        .stdout(contains("Spirited Away"))
        .stdout(contains("No comment provided"));
}

#[test]
fn invalid_submit_lists_every_error_and_stays_on_form() {
    let config = config_dir(None);
    script_command(&config)
        .write_stdin("email nope\ncomment  \nsubmit\nexit\n")
        .assert()
        .success()
        .stdout(contains("! name required"))
        .stdout(contains("! invalid email format"))
        .stdout(contains("! movie selection required"))
        .stdout(contains("Please fix the highlighted fields"))
        .stdout(contains("=== Your Favorite Movie ===").not())
        .stdout(contains("Submission accepted.").not());
}

#[test]
fn summary_is_read_only_until_reset() {
    let config = config_dir(None);
    script_command(&config)
        .write_stdin(
            "name Alice\nemail alice@example.com\nmovie Inception\nsubmit\nname Bob\nreset\nshow\nexit\n",
        )
        .assert()
        .success()
        .stdout(contains("`edit` is not available on the summary view"))
        .stdout(contains("Use `reset` to return to the form."))
        .stdout(contains("Form cleared."))
        .stdout(contains("(empty)"));
}

#[test]
fn unknown_command_gets_a_suggestion() {
    let config = config_dir(None);
    script_command(&config)
        .write_stdin("sumbit\nexit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `sumbit`"))
        .stdout(contains("Did you mean `submit`?"));
}

#[test]
fn unknown_movie_suggests_the_closest_title() {
    let config = config_dir(None);
    script_command(&config)
        .write_stdin("movie Intersteller\nexit\n")
        .assert()
        .success()
        .stdout(contains("Did you mean `Interstellar`?"));
}

#[test]
fn fill_uses_scripted_answers() {
    let config = config_dir(None);
    script_command(&config)
        .env(
            "FAVORITE_MOVIE_TEST_TEXT_INPUTS",
            "Alice|alice@example.com|parasite|<BLANK>",
        )
        .write_stdin("fill\nexit\n")
        .assert()
        .success()
        .stdout(contains("Submission accepted."))
        .stdout(contains("Parasite"));
}

#[test]
fn fill_needs_a_terminal_in_script_mode() {
    let config = config_dir(None);
    script_command(&config)
        .write_stdin("fill\nexit\n")
        .assert()
        .success()
        .stdout(contains("needs an interactive terminal"));
}

#[test]
fn thai_locale_changes_validation_messages() {
    let config = config_dir(Some(r#"{ "locale": "th" }"#));
    script_command(&config)
        .write_stdin("submit\nexit\n")
        .assert()
        .success()
        .stdout(contains("โปรดใส่ชื่อของคุณ"))
        .stdout(contains("กรุณาเลือกหนังที่คุณชอบ"));
}

#[test]
fn custom_catalog_is_resolved_next_to_the_config() {
    let config = config_dir(Some(r#"{ "catalog_path": "movies.json" }"#));
    let catalog = config.parent().expect("config dir").join("movies.json");
    std::fs::write(
        &catalog,
        r#"[{ "title": "Alien", "year": 1979, "director": "Ridley Scott" }]"#,
    )
    .expect("write catalog");

    script_command(&config)
        .write_stdin("movies\nname Ripley\nemail ripley@nostromo.space\nmovie 1\nsubmit\nexit\n")
        .assert()
        .success()
        .stdout(contains("Ridley Scott"))
        .stdout(contains("Inception").not())
        .stdout(contains("Submission accepted."));
}

#[test]
fn missing_catalog_fails_at_startup() {
    let config = config_dir(Some(r#"{ "catalog_path": "missing.json" }"#));
    script_command(&config)
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(contains("Error: could not load movie catalog"));
}

#[test]
fn version_prints_build_metadata() {
    let config = config_dir(None);
    script_command(&config)
        .write_stdin("version\n")
        .assert()
        .success()
        .stdout(contains(format!("Favorite Movie {}", env!("CARGO_PKG_VERSION"))))
        .stdout(contains("Build hash"));
}
