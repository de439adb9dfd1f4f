use super::*;
use tempfile::TempDir;

use crate::OutputError;
use crate::store::ArtifactStore;

fn tool(dir: &TempDir, content: &str, config: &ToolCallConfig) -> ReadCommandOutputTool {
    let store = ArtifactStore::new(dir.path(), config);
    std::fs::create_dir_all(store.dir()).unwrap();
    std::fs::write(store.dir().join("cmd-4.txt"), content).unwrap();
    ReadCommandOutputTool::new(ArtifactReader::new(store, config), config)
}

fn args(search: Option<&str>, offset: Option<i64>, limit: Option<i64>) -> ReadCommandOutputArgs {
    ReadCommandOutputArgs {
        artifact_id: "cmd-4.txt".to_string(),
        search: search.map(str::to_string),
        offset,
        limit,
    }
}

#[tokio::test]
async fn test_read_whole_artifact() {
    let dir = TempDir::new().unwrap();
    let tool = tool(&dir, "one\ntwo\n", &ToolCallConfig::default());
    let out = tool.run(&args(None, None, None)).await.unwrap();
    assert_eq!(
        out,
        "[Artifact: cmd-4.txt | Size: 8 B (8 bytes) | Bytes 0-8 | Complete]\n     1\tone\n     2\ttwo\n"
    );
}

#[tokio::test]
async fn test_read_page_reports_continuation() {
    let dir = TempDir::new().unwrap();
    let config = ToolCallConfig {
        max_read_limit: 4,
        ..ToolCallConfig::default()
    };
    let tool = tool(&dir, "one\ntwo\nthree\n", &config);
    let out = tool.run(&args(None, Some(4), Some(100))).await.unwrap();
    assert!(out.contains("Bytes 4-8 | Partial: use offset=8 to continue]"));
    assert!(out.ends_with("     2\ttwo\n"));
}

#[tokio::test]
async fn test_search_output() {
    let dir = TempDir::new().unwrap();
    let tool = tool(&dir, "ok\nFAIL a\nok\nfail b\n", &ToolCallConfig::default());
    let out = tool.run(&args(Some("fail"), None, None)).await.unwrap();
    assert!(out.contains("Search: \"fail\" | 2 matching lines | Complete]"));
    assert!(out.contains("     2\tFAIL a\n"));
    assert!(out.contains("     4\tfail b\n"));

    let out = tool.run(&args(Some("absent"), None, None)).await.unwrap();
    assert!(out.contains("No lines match."));
}

#[tokio::test]
async fn test_errors_are_typed() {
    let dir = TempDir::new().unwrap();
    let tool = tool(&dir, "abc", &ToolCallConfig::default());
    let err = tool.run(&args(None, Some(10), None)).await.unwrap_err();
    assert!(matches!(err, OutputError::InvalidRange { .. }));

    let mut bad = args(None, None, None);
    bad.artifact_id = "cmd-4.txt/../../x".to_string();
    let err = tool.run(&bad).await.unwrap_err();
    assert!(matches!(err, OutputError::InvalidArtifactId { .. }));
}
