use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_detect_line_ending() {
    assert_eq!(detect_line_ending("a\nb\n"), LineEnding::Lf);
    assert_eq!(detect_line_ending("a\r\nb\r\n"), LineEnding::CrLf);
    assert_eq!(detect_line_ending("a\rb\r"), LineEnding::Cr);
    assert_eq!(detect_line_ending("no newline"), LineEnding::Lf);
    // Majority wins.
    assert_eq!(detect_line_ending("a\r\nb\r\nc\n"), LineEnding::CrLf);
}

#[test]
fn test_normalize_and_restore() {
    let crlf = "one\r\ntwo\r\nthree";
    let lf = normalize_to_lf(crlf);
    assert_eq!(lf, "one\ntwo\nthree");
    assert_eq!(restore_line_endings(&lf, LineEnding::CrLf), crlf);
    assert_eq!(normalize_to_lf("a\rb"), "a\nb");
}

#[test]
fn test_text_file_bom_and_crlf_roundtrip() {
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(b"x = 1\r\ny = 2\r\n");
    let file = TextFile::decode(bytes.clone()).unwrap();
    assert!(file.has_bom);
    assert_eq!(file.line_ending, LineEnding::CrLf);
    assert_eq!(file.content, "x = 1\ny = 2\n");
    assert_eq!(file.encode(&file.content), bytes);
}

#[test]
fn test_text_file_rejects_invalid_utf8() {
    let err = TextFile::decode(vec![0xff, 0xfe, 0x00]).unwrap_err();
    assert!(matches!(err, EncodingError::InvalidUtf8(_)));
}

#[tokio::test]
async fn test_read_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("f.txt");
    std::fs::write(&path, "hello\n").unwrap();
    let file = TextFile::read(&path).await.unwrap();
    assert_eq!(file.content, "hello\n");
    assert!(!file.has_bom);
}
