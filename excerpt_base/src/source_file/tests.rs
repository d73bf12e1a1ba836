use std::path::PathBuf;

#[test]
fn test_get_line_byte_positions() {
    let text = "Hello\nworld\r\n!\rtes";
    let byte_positions = super::get_line_byte_positions(text);
    assert_eq!(byte_positions, vec![0..6, 6..13, 13..18]);
}

#[test]
fn test_mapped_file() {
    const TEST_FILE: &str = "int x = 1;";
    let source_file = super::SourceFile::temp(TEST_FILE).unwrap();
    assert_eq!(source_file.content(), TEST_FILE);
}

#[test]
fn test_empty_mapped_file() {
    let source_file = super::SourceFile::temp("").unwrap();
    assert_eq!(source_file.content(), "");
    assert_eq!(source_file.line_number(), 1);
}

#[test]
fn test_read_from_reader() {
    let source_file =
        super::SourceFile::read("a\nbc\n".as_bytes(), PathBuf::from("<stdin>")).unwrap();

    assert_eq!(source_file.full_path(), &PathBuf::from("<stdin>"));
    assert_eq!(source_file.line_number(), 3);
    assert_eq!(source_file.get_line(0), None);
    assert_eq!(source_file.get_line(1), Some("a\n"));
    assert_eq!(source_file.get_line(2), Some("bc\n"));
    assert_eq!(source_file.get_line(3), Some(""));
    assert_eq!(source_file.get_line(4), None);
}

#[test]
fn test_read_invalid_utf8() {
    let bytes: &[u8] = &[b'a', 0xFF, b'b'];
    let result = super::SourceFile::read(bytes, PathBuf::from("<stdin>"));

    assert!(matches!(result, Err(super::Error::Utf8Error(..))));
}
