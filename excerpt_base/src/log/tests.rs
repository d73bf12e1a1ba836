use std::path::PathBuf;

use super::{Message, Severity, SourceCodeDisplay};
use crate::source_file::{Location, SourceFile};

#[test]
fn message_header_matches_severity() {
    let error = Message::new(Severity::Error, "boom").to_string();
    let debug = Message::new(Severity::Debug, "trace").to_string();

    assert!(error.contains("[error]:"));
    assert!(error.contains("boom"));
    assert!(debug.contains("[debug]:"));
    assert!(debug.contains("trace"));
}

#[test]
fn message_starts_with_header() {
    let message = Message::new(Severity::Error, "boom").to_string();

    assert_eq!(
        message,
        "\x1B[1m\x1B[31m[error]:\x1B[0m\x1B[0m \x1B[1mboom\x1B[0m"
    );
}

#[test]
fn source_code_display_prints_context_lines() {
    let source_file =
        SourceFile::in_memory("int x;\nx = !y;\nreturn x;\n", PathBuf::from("main.ex"));
    let display = SourceCodeDisplay::new(
        &source_file,
        Location::new(2, 5),
        1,
        Some("did you mean `!=`?"),
    )
    .to_string();

    assert!(display.contains("main.ex:2:5"));
    assert!(display.contains("int x;"));
    assert!(display.contains("return x;"));
    assert!(display.contains("did you mean `!=`?"));

    // the highlighted `!` is wrapped in escape codes, the rest of the line is not
    assert!(display.contains("x = "));
    assert!(!display.contains("x = !y;"));
}

#[test]
fn source_code_display_without_help() {
    let source_file = SourceFile::in_memory("@", PathBuf::from("<stdin>"));
    let display = SourceCodeDisplay::new(&source_file, Location::new(1, 1), 1, Option::<i32>::None)
        .to_string();

    assert!(display.contains("<stdin>:1:1"));
    assert!(!display.contains("help"));
}
