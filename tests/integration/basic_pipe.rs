//! Integration tests for basic stdin->stdout piping.

use predicates::prelude::*;

use crate::fogline;

const MAP_SETTINGS: &str = r#"{"time":"2024-01-02T03:04:05Z","level":"info","msg":"Map Settings","file":"internal/core/logging/logger.go:42","func":"main.main","width":80,"height":24}"#;

#[test]
fn empty_stdin_exits_zero() {
    fogline().write_stdin("").assert().success().stdout("");
}

#[test]
fn renders_the_map_settings_line() {
    fogline()
        .arg("--color=never")
        .write_stdin(MAP_SETTINGS)
        .assert()
        .success()
        .stdout(
            "[2024-01-02 ¤ 03:04:05] [ INFO  ] ►►► logging/logger.go:42   ►►► Map Settings ► [height⇒24 ¤ width⇒80]\n",
        );
}

#[test]
fn fields_sorted_alphabetically() {
    let input = r#"{"level":"info","msg":"test","zebra":"z","alpha":"a","middle":"m"}"#;
    fogline()
        .arg("--color=never")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("[alpha⇒a ¤ middle⇒m ¤ zebra⇒z]"));
}

#[test]
fn long_call_site_is_truncated_to_width() {
    let input = r#"{"time":"2024-01-02T03:04:05Z","level":"error","msg":"bad tile","file":"internal/world/terrain/heightmap_generator.go:1187"}"#;
    fogline()
        .arg("--color=never")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[ ERROR ] ►►► …p_generator.go:1187   ►►► bad tile",
        ));
}

#[test]
fn full_path_and_width_flags() {
    fogline()
        .args(["--color=never", "--full-path", "--width=40"])
        .write_stdin(MAP_SETTINGS)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "►►► internal/core/logging/logger.go:42       ►►►",
        ));
}

#[test]
fn no_caller_drops_call_site() {
    fogline()
        .args(["--color=never", "--no-caller"])
        .write_stdin(MAP_SETTINGS)
        .assert()
        .success()
        .stdout(predicate::str::contains("[ INFO  ] Map Settings ►"))
        .stdout(predicate::str::contains("►►►").not());
}

#[test]
fn custom_timestamp_format() {
    fogline()
        .args(["--color=never", "--timestamp-format=%H:%M:%S"])
        .write_stdin(MAP_SETTINGS)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[03:04:05] [ INFO  ]"));
}

#[test]
fn invalid_timestamp_format_exits_one() {
    fogline()
        .args(["--color=never", "--timestamp-format=%H:%"])
        .write_stdin(MAP_SETTINGS)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid timestamp format"));
}

#[test]
fn invalid_level_flag_rejected() {
    fogline()
        .arg("--level=verbose")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid level"));
}

#[test]
fn completions_are_printed() {
    fogline()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fogline"));
}
