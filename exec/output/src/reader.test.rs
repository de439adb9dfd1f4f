use super::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use crate::OutputError;
use crate::buffer::OutputBuffer;

struct Fixture {
    _dir: TempDir,
    reader: ArtifactReader,
}

fn fixture(content: &[u8]) -> Fixture {
    let dir = TempDir::new().unwrap();
    let store = ArtifactStore::new(dir.path(), &ToolCallConfig::default());
    std::fs::create_dir_all(store.dir()).unwrap();
    std::fs::write(store.dir().join("cmd-1.txt"), content).unwrap();
    let reader = ArtifactReader::new(store, &ToolCallConfig::default()).with_chunk_size(7);
    Fixture { _dir: dir, reader }
}

fn numbered(lines: usize) -> String {
    (1..=lines).map(|i| format!("line {i}\n")).collect()
}

#[tokio::test]
async fn test_full_range_is_identical() {
    let dir = TempDir::new().unwrap();
    let store = ArtifactStore::new(dir.path(), &ToolCallConfig::default());
    let mut buffer = OutputBuffer::new(64).with_spill(store.dir(), 1);
    let mut written = Vec::new();
    for i in 0..50 {
        let chunk = format!("chunk {i} ünïcode ✓\n").into_bytes();
        buffer.write(&chunk).await;
        written.extend_from_slice(&chunk);
    }
    let summary = buffer.finalize().await;
    assert!(summary.spilled);

    let reader = ArtifactReader::new(store, &ToolCallConfig::default()).with_chunk_size(5);
    let read = reader
        .read_range("cmd-1.txt", 0, written.len() as u64)
        .await
        .unwrap();
    assert_eq!(read.data, written);
    assert!(read.is_complete());
    assert_eq!(read.start_line, 1);
}

#[tokio::test]
async fn test_start_line_counts_preceding_newlines() {
    let content = numbered(20);
    let f = fixture(content.as_bytes());
    let offset = content.find("line 12").unwrap() as u64;
    let read = f.reader.read_range("cmd-1.txt", offset, 8).await.unwrap();
    assert_eq!(read.start_line, 12);
    assert_eq!(read.text(), "line 12\n");
    assert!(read.has_more());
    assert!(!read.is_complete());
}

#[tokio::test]
async fn test_limit_past_end_is_clamped() {
    let f = fixture(b"abc\ndef");
    let read = f.reader.read_range("cmd-1.txt", 4, 100).await.unwrap();
    assert_eq!(read.text(), "def");
    assert_eq!(read.start_line, 2);
    assert!(!read.has_more());
}

#[tokio::test]
async fn test_range_errors() {
    let f = fixture(b"abc");
    let err = f.reader.read_range("cmd-1.txt", 3, 1).await.unwrap_err();
    assert!(matches!(err, OutputError::InvalidRange { offset: 3, size: 3, .. }));

    let err = f.reader.read_range("cmd-2.txt", 0, 1).await.unwrap_err();
    assert!(matches!(err, OutputError::ArtifactNotFound { .. }));

    let err = f.reader.read_range("../../etc/passwd", 0, 1).await.unwrap_err();
    assert!(matches!(err, OutputError::InvalidArtifactId { .. }));
}

#[tokio::test]
async fn test_search_across_chunk_boundaries() {
    let content = "alpha\nERROR: disk full\nbeta\nwarning\nerror again\r\nlast error";
    let f = fixture(content.as_bytes());
    let result = f.reader.search("cmd-1.txt", "error", 1024).await.unwrap();
    let found: Vec<(u64, &str)> = result
        .matches
        .iter()
        .map(|m| (m.line_number, m.line.as_str()))
        .collect();
    assert_eq!(
        found,
        vec![(2, "ERROR: disk full"), (5, "error again"), (6, "last error")]
    );
    assert!(!result.truncated);
    assert!(!result.literal_fallback);
    assert_eq!(result.scanned_bytes, content.len() as u64);
}

#[tokio::test]
async fn test_search_regex_and_literal_fallback() {
    let f = fixture(b"fn main() {\nlet x = foo(1);\nfoo(2\n");
    let result = f.reader.search("cmd-1.txt", r"foo\(\d\)", 1024).await.unwrap();
    assert_eq!(result.matches.len(), 1);
    assert_eq!(result.matches[0].line_number, 2);

    let result = f.reader.search("cmd-1.txt", "foo(", 1024).await.unwrap();
    assert!(result.literal_fallback);
    assert_eq!(result.matches.len(), 2);
}

#[tokio::test]
async fn test_literal_fallback_folds_unicode_case() {
    let f = fixture("Größe(1)\nÜBER(2)\nüber\n".as_bytes());
    let result = f.reader.search("cmd-1.txt", "über(", 1024).await.unwrap();
    assert!(result.literal_fallback);
    assert_eq!(result.matches.len(), 1);
    assert_eq!(result.matches[0].line_number, 2);
    assert_eq!(result.matches[0].line, "ÜBER(2)");
}

#[tokio::test]
async fn test_search_respects_byte_limit() {
    let content = numbered(100);
    let f = fixture(content.as_bytes());
    let result = f.reader.search("cmd-1.txt", "line", 50).await.unwrap();
    assert!(result.truncated);
    // "line N" is 6 bytes plus overhead for single digits.
    assert_eq!(result.matches.len(), 3);
    assert!(result.scanned_bytes < content.len() as u64);
}

#[tokio::test]
async fn test_search_validates_id_first() {
    let f = fixture(b"x");
    let err = f.reader.search("cmd-1.log", "x", 10).await.unwrap_err();
    assert!(matches!(err, OutputError::InvalidArtifactId { .. }));
}
