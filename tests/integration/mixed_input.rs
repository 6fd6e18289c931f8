//! Integration tests for interleaved JSON and plain text input.

use crate::fogline;

#[test]
fn plain_lines_pass_through_in_order() {
    let input = concat!(
        "booting\n",
        r#"{"time":"2024-01-02T03:04:05Z","level":"info","msg":"ready","port":8080}"#,
        "\n",
        "[1,2,3]\n",
        "{broken json\n",
    );
    let output = fogline()
        .arg("--color=never")
        .write_stdin(input)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "booting",
            "[2024-01-02 ¤ 03:04:05] [ INFO  ] ready ► [port⇒8080]",
            "[1,2,3]",
            "{broken json",
        ]
    );
}

#[test]
fn typed_field_values() {
    let input = r#"{"time":"2024-01-02T03:04:05Z","level":"warn","msg":"slow","ratio":0.333,"ok":false,"tags":["a","b"],"meta":{"k":1}}"#;
    let output = fogline()
        .arg("--color=never")
        .write_stdin(input)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "[2024-01-02 ¤ 03:04:05] [WARN] slow ► [meta⇒{\"k\":1} ¤ ok⇒false ¤ ratio⇒0.33 ¤ tags⇒[ a, b ]]\n"
    );
}

#[test]
fn invalid_utf8_line_is_kept() {
    let input = b"before\ncaf\xe9 latin-1 line\nafter\n".to_vec();
    let output = fogline()
        .arg("--color=never")
        .write_stdin(input)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "before\ncaf\u{FFFD} latin-1 line\nafter\n");
}

#[test]
fn crlf_and_missing_final_newline() {
    let output = fogline()
        .arg("--color=never")
        .write_stdin("one\r\ntwo")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "one\ntwo\n");
}
