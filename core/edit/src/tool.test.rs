use super::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn args(path: &str, old: &str, new: &str) -> EditFileArgs {
    EditFileArgs {
        file_path: path.to_string(),
        old_string: old.to_string(),
        new_string: new.to_string(),
        expected_replacements: None,
    }
}

#[tokio::test]
async fn test_edit_existing_file_preserves_format() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a.txt"), b"\xEF\xBB\xBFLine 1\r\nLine 2\r\nLine 3\r\n").unwrap();

    let mut tool = EditFileTool::default();
    let out = tool
        .prepare(dir.path(), &args("a.txt", "Line 2", "Second"))
        .await;
    let EditToolOutput::Applied { bytes, created, message, .. } = out else {
        panic!("expected applied edit: {out:?}");
    };
    assert!(!created);
    assert_eq!(bytes, b"\xEF\xBB\xBFLine 1\r\nSecond\r\nLine 3\r\n".to_vec());
    assert_eq!(message, "Successfully edited a.txt (+1/-1 lines)");
}

#[tokio::test]
async fn test_create_new_file() {
    let dir = TempDir::new().unwrap();
    let mut tool = EditFileTool::default();
    let out = tool
        .prepare(dir.path(), &args("new.txt", "", "hello\nworld"))
        .await;
    let EditToolOutput::Applied { bytes, created, .. } = out else {
        panic!("expected creation: {out:?}");
    };
    assert!(created);
    assert_eq!(bytes, b"hello\nworld".to_vec());
}

#[tokio::test]
async fn test_create_over_existing_rejected() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a.txt"), "data").unwrap();
    let mut tool = EditFileTool::default();
    let out = tool.prepare(dir.path(), &args("a.txt", "", "x")).await;
    assert!(matches!(out, EditToolOutput::Failed { .. }));
    assert!(out.message().contains("already exists"));
}

#[tokio::test]
async fn test_missing_file_with_old_string() {
    let dir = TempDir::new().unwrap();
    let mut tool = EditFileTool::default();
    let out = tool.prepare(dir.path(), &args("nope.txt", "a", "b")).await;
    assert!(out.message().contains("does not exist"));
}

#[tokio::test]
async fn test_second_consecutive_failure_escalates() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a.txt"), "alpha\n").unwrap();
    let mut tool = EditFileTool::default();
    let request = args("a.txt", "beta", "gamma");

    let first = tool.prepare(dir.path(), &request).await;
    let EditToolOutput::Failed { escalate, message, .. } = &first else {
        panic!("expected failure");
    };
    assert!(!escalate);
    assert!(message.contains("<error_details>"));

    let second = tool.prepare(dir.path(), &request).await;
    assert!(matches!(second, EditToolOutput::Failed { escalate: true, .. }));

    let ok = tool
        .prepare(dir.path(), &args("a.txt", "alpha", "omega"))
        .await;
    assert!(matches!(ok, EditToolOutput::Applied { .. }));
    assert_eq!(
        tool.failures().consecutive_failures(&dir.path().join("a.txt")),
        0
    );
}

#[tokio::test]
async fn test_invalid_expected_replacements() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a.txt"), "x").unwrap();
    let mut tool = EditFileTool::default();
    let mut request = args("a.txt", "x", "y");
    request.expected_replacements = Some(0);
    let out = tool.prepare(dir.path(), &request).await;
    assert!(out.message().contains("expected_replacements must be at least 1"));
}

#[tokio::test]
async fn test_edit_can_remove_final_newline() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a.txt"), "a\nb\n").unwrap();
    let mut tool = EditFileTool::default();
    let out = tool.prepare(dir.path(), &args("a.txt", "b\n", "b")).await;
    let EditToolOutput::Applied { bytes, .. } = out else {
        panic!("expected applied edit: {out:?}");
    };
    assert_eq!(bytes, b"a\nb".to_vec());
}

#[tokio::test]
async fn test_edit_can_add_final_newline() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a.txt"), "x").unwrap();
    let mut tool = EditFileTool::default();
    let out = tool.prepare(dir.path(), &args("a.txt", "x", "x\n")).await;
    let EditToolOutput::Applied { bytes, .. } = out else {
        panic!("expected applied edit: {out:?}");
    };
    assert_eq!(bytes, b"x\n".to_vec());
}
