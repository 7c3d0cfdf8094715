//! Snapshot tests for the `graphemes` binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run(args: &[&str], stdin: Option<&str>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_graphemes"));
    cmd.args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    let mut child = cmd.spawn().expect("Failed to execute graphemes");
    {
        let mut pipe = child.stdin.take().expect("stdin");
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).expect("write stdin");
        }
    }
    child.wait_with_output().expect("wait for graphemes")
}

fn stdout_of(args: &[&str], stdin: Option<&str>) -> String {
    let output = run(args, stdin);
    assert!(
        output.status.success(),
        "graphemes failed with stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("utf-8 output")
}

#[test]
fn clusters_one_per_line() {
    insta::assert_snapshot!(stdout_of(&["ab😜🇺🇸각"], None), @r"
    a
    b
    😜
    🇺🇸
    각
    ");
}

#[test]
fn count_from_stdin_drops_trailing_newline() {
    assert_eq!(stdout_of(&["--count"], Some("a\u{301}b\r\n")), "2\n");
    assert_eq!(stdout_of(&["-c"], Some("")), "0\n");
}

#[test]
fn boundaries_and_reverse() {
    assert_eq!(stdout_of(&["-b", "a\r\nb"], None), "0 1 3 4\n");
    assert_eq!(stdout_of(&["-b", "-r", "a\r\nb"], None), "4 3 1 0\n");
}

#[test]
fn codepoints_reversed() {
    insta::assert_snapshot!(stdout_of(&["-u", "-r", "😜🇺🇸각"], None), @r"
    U+AC01
    U+1F1FA U+1F1F8
    U+1F61C
    ");
}

#[test]
fn custom_table_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("classes.bin");
    std::fs::write(&path, grapheme_breaker::ClassTable::bundled().to_bytes()).expect("write");
    let path = path.to_string_lossy().into_owned();
    assert_eq!(stdout_of(&["--table", &path, "-c", "e\u{301}😜"], None), "2\n");
}

#[test]
fn errors_set_exit_codes() {
    let usage = run(&["--bogus"], None);
    assert_eq!(usage.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&usage.stderr).contains("Unknown option"));

    let dir = tempfile::tempdir().expect("temp dir");
    let bad = dir.path().join("bad.bin");
    std::fs::write(&bad, b"not a table").expect("write");
    let load = run(&["--table", &bad.to_string_lossy(), "x"], None);
    assert_eq!(load.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&load.stderr).contains("class table"));
}

#[test]
fn help_lists_options() {
    let help = stdout_of(&["--help"], None);
    for flag in ["--count", "--boundaries", "--reverse", "--codepoints", "--table"] {
        assert!(help.contains(flag), "help is missing {flag}");
    }
}
