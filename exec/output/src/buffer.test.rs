use super::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn assert_invariants(buffer: &OutputBuffer) {
    assert!(buffer.head_bytes() <= buffer.head_budget as u64);
    assert!(buffer.tail_bytes() <= buffer.tail_budget as u64);
    assert_eq!(
        buffer.head_bytes() + buffer.tail_bytes() + buffer.omitted_bytes(),
        buffer.total_bytes()
    );
}

#[tokio::test]
async fn test_ten_chunks_over_forty_kb_budget() {
    let dir = TempDir::new().unwrap();
    let mut buffer = OutputBuffer::new(40_000).with_spill(dir.path(), 1);
    let mut written = Vec::new();
    for i in 0..10u8 {
        let chunk = vec![b'a' + i; 10_000];
        buffer.write(&chunk).await;
        written.extend_from_slice(&chunk);
        assert_invariants(&buffer);
    }
    assert_eq!(buffer.head_bytes(), 20_000);
    assert_eq!(buffer.tail_bytes(), 20_000);
    assert_eq!(buffer.omitted_bytes(), 60_000);

    let summary = buffer.finalize().await;
    assert!(summary.spilled);
    assert_eq!(summary.artifact_id.as_deref(), Some("cmd-1.txt"));
    let on_disk = std::fs::read(dir.path().join("cmd-1.txt")).unwrap();
    assert_eq!(on_disk.len(), 100_000);
    assert_eq!(on_disk, written);
    assert!(summary.preview.starts_with("aaaa"));
    assert!(summary.preview.contains("[... 60000 bytes omitted ...]"));
    assert!(summary.preview.ends_with("jjjj"));
    assert!(summary.render().contains("saved as cmd-1.txt"));
}

#[tokio::test]
async fn test_within_budget_never_spills() {
    let dir = TempDir::new().unwrap();
    let mut buffer = OutputBuffer::new(10).with_spill(dir.path(), 7);
    buffer.write(b"12345").await;
    buffer.write(b"67890").await;
    assert_invariants(&buffer);
    let summary = buffer.finalize().await;
    assert_eq!(summary.preview, "1234567890");
    assert!(!summary.spilled);
    assert!(!summary.is_truncated());
    assert!(!dir.path().join("cmd-7.txt").exists());
}

#[tokio::test]
async fn test_first_byte_over_budget_spills_everything() {
    let dir = TempDir::new().unwrap();
    let mut buffer = OutputBuffer::new(10).with_spill(dir.path(), 2);
    buffer.write(b"1234567890").await;
    assert!(!buffer.is_spilled());
    buffer.write(b"X").await;
    assert!(buffer.is_spilled());
    let summary = buffer.finalize().await;
    assert_eq!(summary.omitted_bytes, 1);
    assert_eq!(summary.preview, "12345\n\n[... 1 bytes omitted ...]\n\n7890X");
    assert_eq!(
        std::fs::read(dir.path().join("cmd-2.txt")).unwrap(),
        b"1234567890X".to_vec()
    );
}

#[tokio::test]
async fn test_multibyte_never_split() {
    let mut buffer = OutputBuffer::new(11);
    let text = "€uro ünïcödé ✓ done €€€";
    for piece in text.as_bytes().chunks(2) {
        buffer.write(piece).await;
        assert_invariants(&buffer);
    }
    let summary = buffer.finalize().await;
    assert!(!summary.preview.contains('\u{FFFD}'), "{:?}", summary.preview);
    assert!(summary.preview.starts_with("€ur"));
    assert!(summary.preview.ends_with("€€"));
}

#[tokio::test]
async fn test_head_ending_inside_code_point() {
    let mut buffer = OutputBuffer::new(8);
    buffer.write(b"ab\xE2\x82").await;
    buffer.write(b"\xAC!").await;
    assert_eq!(buffer.head_bytes(), 2);
    assert_invariants(&buffer);
    let summary = buffer.finalize().await;
    assert_eq!(summary.preview, "ab€!");
}

#[tokio::test]
async fn test_non_utf8_output_keeps_head_and_tail() {
    let mut buffer = OutputBuffer::new(40_000);
    for _ in 0..10 {
        buffer.write(&[0x80; 10_000]).await;
        assert_invariants(&buffer);
    }
    assert_eq!(buffer.head_bytes(), 20_000);
    assert_eq!(buffer.tail_bytes(), 20_000);
    assert_eq!(buffer.omitted_bytes(), 60_000);
}

#[tokio::test]
async fn test_lead_byte_followed_by_stray_continuations() {
    let mut buffer = OutputBuffer::new(8);
    buffer.write(b"ab\xF0").await;
    // The 4-byte sequence cannot finish in the head, so it moves to the
    // tail; the stray bytes after it are trimmed without a boundary walk.
    buffer.write(&[0x80; 9]).await;
    assert_invariants(&buffer);
    assert_eq!(buffer.head_bytes(), 2);
    assert_eq!(buffer.tail_bytes(), 4);
    assert_eq!(buffer.omitted_bytes(), 6);
}

#[tokio::test]
async fn test_invariants_for_varied_writes() {
    let mut buffer = OutputBuffer::new(97);
    let mut seed = 17u32;
    for _ in 0..200 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let len = (seed >> 16) as usize % 64;
        let chunk: Vec<u8> = (0..len).map(|i| b'a' + (i % 26) as u8).collect();
        buffer.write(&chunk).await;
        assert_invariants(&buffer);
    }
}

#[tokio::test]
async fn test_finalize_is_idempotent() {
    let mut buffer = OutputBuffer::new(4);
    buffer.write(b"abcdef").await;
    let first = buffer.finalize().await;
    buffer.write(b"ignored").await;
    let second = buffer.finalize().await;
    assert_eq!(first, second);
    assert_eq!(second.total_bytes, 6);
}

#[tokio::test]
async fn test_spill_failure_keeps_preview() {
    let dir = TempDir::new().unwrap();
    let blocked = dir.path().join("not-a-dir");
    std::fs::write(&blocked, "file in the way").unwrap();

    let mut buffer = OutputBuffer::new(8).with_spill(&blocked, 1);
    buffer.write(b"0123456789").await;
    buffer.write(b"abc").await;
    assert!(buffer.spill_error().is_some());
    assert_invariants(&buffer);

    let summary = buffer.finalize().await;
    assert!(!summary.spilled);
    assert!(summary.spill_error.is_some());
    assert_eq!(summary.preview, "0123\n\n[... 5 bytes omitted ...]\n\n9abc");
    assert!(summary.render().contains("could not be saved"));
}

#[tokio::test]
async fn test_no_spill_configured() {
    let mut buffer = OutputBuffer::new(4);
    buffer.write(b"abcdefgh").await;
    let summary = buffer.finalize().await;
    assert!(!summary.spilled);
    assert!(summary.spill_error.is_none());
    assert_eq!(summary.omitted_bytes, 4);
}
