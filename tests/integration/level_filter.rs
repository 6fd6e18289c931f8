//! Integration tests for minimum level filtering.

use predicates::prelude::*;

use crate::fogline;

const MIXED: &str = concat!(
    r#"{"level":"trace","msg":"trace-line"}"#,
    "\n",
    r#"{"level":"debug","msg":"debug-line"}"#,
    "\n",
    r#"{"level":"info","msg":"info-line"}"#,
    "\n",
    r#"{"level":"warning","msg":"warn-line"}"#,
    "\n",
    r#"{"level":"error","msg":"error-line"}"#,
    "\n",
    r#"{"level":"fatal","msg":"fatal-line"}"#,
    "\n",
);

#[test]
fn default_level_is_info() {
    fogline()
        .arg("--color=never")
        .write_stdin(MIXED)
        .assert()
        .success()
        .stdout(predicate::str::contains("trace-line").not())
        .stdout(predicate::str::contains("debug-line").not())
        .stdout(predicate::str::contains("[ INFO  ] info-line"))
        .stdout(predicate::str::contains("[WARN] warn-line"))
        .stdout(predicate::str::contains("[ ERROR ] error-line"))
        .stdout(predicate::str::contains("[ FATAL ] fatal-line"));
}

#[test]
fn level_error_keeps_error_and_above() {
    let output = fogline()
        .args(["--color=never", "--level=error"])
        .write_stdin(MIXED)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 2, "{stdout}");
    assert!(stdout.contains("error-line"));
    assert!(stdout.contains("fatal-line"));
}

#[test]
fn level_trace_keeps_everything() {
    let output = fogline()
        .args(["--color=never", "--level=TRACE"])
        .write_stdin(MIXED)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 6);
    assert!(stdout.contains("[ TRACE ] trace-line"));
}

#[test]
fn raw_lines_ignore_level_filter() {
    fogline()
        .args(["--color=never", "--level=fatal"])
        .write_stdin("starting up\n{\"level\":\"info\",\"msg\":\"hidden\"}\n")
        .assert()
        .success()
        .stdout("starting up\n");
}
