//! Integration tests for the TOML config file and its interaction with flags.

use std::io::Write;

use predicates::prelude::*;

use crate::fogline;

const INPUT: &str = r#"{"time":"2024-01-02T03:04:05Z","level":"debug","msg":"tick","file":"internal/core/logging/logger.go:42"}"#;

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn config_file_sets_width_and_segments() {
    let file = config_file(
        r#"
        color = "never"

        [logging]
        level = "debug"
        display_width = 26
        path_segments = 3
        "#,
    );
    fogline()
        .arg("--config")
        .arg(file.path())
        .write_stdin(INPUT)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[ DEBUG ] ►►► core/logging/logger.go:42  ►►► tick",
        ));
}

#[test]
fn config_file_level_filters() {
    let file = config_file("color = \"never\"\n[logging]\nlevel = \"warn\"\n");
    fogline()
        .arg("--config")
        .arg(file.path())
        .write_stdin(INPUT)
        .assert()
        .success()
        .stdout("");
}

#[test]
fn cli_level_overrides_config_file() {
    let file = config_file("color = \"never\"\n[logging]\nlevel = \"warn\"\n");
    fogline()
        .arg("--config")
        .arg(file.path())
        .arg("--level=debug")
        .write_stdin(INPUT)
        .assert()
        .success()
        .stdout(predicate::str::contains("tick"));
}

#[test]
fn report_caller_false_in_config() {
    let file = config_file("color = \"never\"\n[logging]\nlevel = \"debug\"\nreport_caller = false\n");
    fogline()
        .arg("--config")
        .arg(file.path())
        .write_stdin(INPUT)
        .assert()
        .success()
        .stdout("[2024-01-02 ¤ 03:04:05] [ DEBUG ] tick\n");
}

#[test]
fn invalid_level_in_config_file_exits_one() {
    let file = config_file("[logging]\nlevel = \"chatty\"\n");
    fogline()
        .arg("--config")
        .arg(file.path())
        .write_stdin(INPUT)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid log level"));
}

#[test]
fn malformed_config_file_exits_one() {
    let file = config_file("[logging\nlevel = ");
    fogline()
        .arg("--config")
        .arg(file.path())
        .write_stdin(INPUT)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config file error"));
}

#[test]
fn missing_explicit_config_file_exits_one() {
    fogline()
        .args(["--config", "/tmp/fogline-test-does-not-exist.toml"])
        .write_stdin(INPUT)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot read config file"));
}
