//! Integration tests for color control: `NO_COLOR`, `FORCE_COLOR`, --color flag, `TERM`.

use crate::fogline;

const INPUT: &str = r#"{"level":"info","msg":"hello","n":1}"#;

fn stdout_of(cmd: &mut assert_cmd::Command) -> String {
    let output = cmd.write_stdin(INPUT).output().unwrap();
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn color_never_disables_ansi() {
    let stdout = stdout_of(fogline().arg("--color=never"));
    assert!(
        !stdout.contains("\x1b["),
        "Should not contain ANSI escapes with --color=never"
    );
}

#[test]
fn color_always_enables_ansi() {
    let stdout = stdout_of(fogline().arg("--color=always"));
    assert!(stdout.contains("\x1b[32m[ INFO  ]"), "got {stdout:?}");
    assert!(stdout.contains("\x1b[36m1"), "numbers should be cyan");
}

#[test]
fn auto_mode_without_tty_is_plain() {
    let stdout = stdout_of(&mut fogline());
    assert!(!stdout.contains("\x1b["));
}

#[test]
fn no_color_env_disables_auto() {
    let stdout = stdout_of(fogline().env("NO_COLOR", "1").env("FORCE_COLOR", "1"));
    assert!(!stdout.contains("\x1b["));
}

#[test]
fn force_color_env_enables_auto() {
    let stdout = stdout_of(fogline().env("FORCE_COLOR", "1"));
    assert!(stdout.contains("\x1b["));
}

#[test]
fn color_flag_beats_env() {
    let stdout = stdout_of(fogline().arg("--color=never").env("FORCE_COLOR", "1"));
    assert!(!stdout.contains("\x1b["));
}

#[test]
fn colored_output_strips_to_plain_output() {
    let colored = stdout_of(fogline().arg("--color=always"));
    let plain = stdout_of(fogline().arg("--color=never"));
    // timestamps come from "now" when absent; compare everything after them
    let tail = |s: &str| ::fogline::palette::strip_ansi(s).split_once("] ").unwrap().1.to_string();
    assert_eq!(tail(&colored), tail(&plain));
}
