use std::{fs, io::Write, path::PathBuf};

use clap::error::ErrorKind;
use excerpt_base::{log::Severity, source_file::SourceFile};
use tempfile::NamedTempFile;

use super::{describe_input, is_logged, tokenize, Argument, Error, Parser, STDIN_PATH};

fn source_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn file_defaults_to_standard_input() {
    let argument = Argument::try_parse_from(["excerpt"]).unwrap();

    assert_eq!(argument.file, PathBuf::from(STDIN_PATH));
    assert_eq!(argument.output, None);
    assert!(!argument.verbose);
}

#[test]
fn parse_file_and_output() {
    let argument =
        Argument::try_parse_from(["excerpt", "main.ex", "--output", "tokens.txt", "-v"]).unwrap();

    assert_eq!(argument.file, PathBuf::from("main.ex"));
    assert_eq!(argument.output, Some(PathBuf::from("tokens.txt")));
    assert!(argument.verbose);

    let argument = Argument::try_parse_from(["excerpt", "-o", "tokens.txt"]).unwrap();

    assert_eq!(argument.file, PathBuf::from(STDIN_PATH));
    assert_eq!(argument.output, Some(PathBuf::from("tokens.txt")));
}

#[test]
fn help_is_displayed() {
    let error = Argument::try_parse_from(["excerpt", "--help"]).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::DisplayHelp);

    let error = Argument::try_parse_from(["excerpt", "--unknown"]).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::UnknownArgument);
}

#[test]
fn tokens_are_written_to_output() {
    let input = source_file("int x = 42;\nif (x >= 1.5) { return 'a'; }\n");
    let output = NamedTempFile::new().unwrap();

    let argument = Argument {
        file: input.path().to_owned(),
        output: Some(output.path().to_owned()),
        verbose: false,
    };

    assert!(tokenize(&argument).unwrap());

    let written = fs::read_to_string(output.path()).unwrap();
    let lines = written.lines().collect::<Vec<_>>();

    assert_eq!(lines, vec![
        "1:1\tToken(INT, int)",
        "1:5\tToken(IDENTIFIER, x)",
        "1:7\tToken(ASSIGN, =)",
        "1:9\tToken(INTEGER_LITERAL, 42)",
        "1:11\tToken(SEMICOLON, ;)",
        "2:1\tToken(IF, if)",
        "2:4\tToken(LPAREN, ()",
        "2:5\tToken(IDENTIFIER, x)",
        "2:7\tToken(GREATER_EQUAL, >=)",
        "2:10\tToken(FLOAT_LITERAL, 1.5)",
        "2:13\tToken(RPAREN, ))",
        "2:15\tToken(LBRACE, {)",
        "2:17\tToken(RETURN, return)",
        "2:24\tToken(CHAR_LITERAL, a)",
        "2:27\tToken(SEMICOLON, ;)",
        "2:29\tToken(RBRACE, })",
        "3:1\tToken(END, )",
    ]);
}

#[test]
fn invalid_tokens_fail_the_run() {
    let input = source_file("x = \"open");
    let output = NamedTempFile::new().unwrap();

    let argument = Argument {
        file: input.path().to_owned(),
        output: Some(output.path().to_owned()),
        verbose: false,
    };

    assert!(!tokenize(&argument).unwrap());

    let written = fs::read_to_string(output.path()).unwrap();

    assert!(written.contains("1:5\tToken(INVALID, open)"));
    assert!(written.ends_with("1:10\tToken(END, )\n"));
}

#[test]
fn missing_input_is_an_error() {
    let directory = tempfile::tempdir().unwrap();
    let argument = Argument {
        file: directory.path().join("missing.ex"),
        output: None,
        verbose: false,
    };

    let error = tokenize(&argument).unwrap_err();

    assert!(matches!(error, Error::Input { .. }));
    assert!(error.to_string().contains("missing.ex"));
}

#[test]
fn unwritable_output_is_an_error() {
    let input = source_file("x");
    let directory = tempfile::tempdir().unwrap();
    let argument = Argument {
        file: input.path().to_owned(),
        output: Some(directory.path().join("missing").join("tokens.txt")),
        verbose: false,
    };

    let error = tokenize(&argument).unwrap_err();

    assert!(matches!(error, Error::Output { .. }));
}

#[test]
fn verbose_flag_controls_info_and_debug() {
    for severity in [Severity::Error, Severity::Warning] {
        assert!(is_logged(false, severity));
        assert!(is_logged(true, severity));
    }

    for severity in [Severity::Info, Severity::Debug] {
        assert!(!is_logged(false, severity));
        assert!(is_logged(true, severity));
    }
}

#[test]
fn trailing_new_line_is_not_counted_as_a_line() {
    let source_file = SourceFile::in_memory("a\n", PathBuf::from("main.ex"));
    assert_eq!(describe_input(&source_file), "read 2 bytes (1 lines) from main.ex");

    let source_file = SourceFile::in_memory("int x;\nx = 1;", PathBuf::from("main.ex"));
    assert_eq!(describe_input(&source_file), "read 13 bytes (2 lines) from main.ex");

    let source_file = SourceFile::in_memory("", PathBuf::from("<stdin>"));
    assert_eq!(describe_input(&source_file), "read 0 bytes (0 lines) from <stdin>");
}
