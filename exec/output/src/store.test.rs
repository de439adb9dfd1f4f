use super::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use crate::OutputError;

#[test]
fn test_parse_artifact_id() {
    assert_eq!(parse_artifact_id("cmd-1.txt"), Some(1));
    assert_eq!(parse_artifact_id("cmd-0042.txt"), Some(42));
    for bad in [
        "cmd-.txt",
        "cmd-1.txt.bak",
        "cmd-1a.txt",
        "cmd--1.txt",
        "../cmd-1.txt",
        "cmd-1/../../etc/passwd.txt",
        "cmd-１.txt",
        "CMD-1.txt",
        "cmd-99999999999999999999.txt",
        "",
    ] {
        assert_eq!(parse_artifact_id(bad), None, "{bad}");
    }
}

#[test]
fn test_path_for_rejects_traversal() {
    let store = ArtifactStore::new(Path::new("/tmp/task"), &ToolCallConfig::default());
    assert_eq!(
        store.path_for("cmd-3.txt").unwrap(),
        PathBuf::from("/tmp/task/command-output/cmd-3.txt")
    );
    let err = store.path_for("../secret").unwrap_err();
    assert!(matches!(err, OutputError::InvalidArtifactId { .. }));
}

#[test]
fn test_execution_ids_are_monotonic_across_clones() {
    let store = ArtifactStore::new(Path::new("/tmp/task"), &ToolCallConfig::default());
    let clone = store.clone();
    assert_eq!(store.next_execution_id(), 1);
    assert_eq!(clone.next_execution_id(), 2);
    assert_eq!(store.next_execution_id(), 3);
}

#[tokio::test]
async fn test_list_open_and_remove() {
    let dir = TempDir::new().unwrap();
    let config = ToolCallConfig::default();
    let store = ArtifactStore::new(dir.path(), &config);
    assert!(store.list().await.unwrap().is_empty());

    std::fs::create_dir_all(store.dir()).unwrap();
    std::fs::write(store.dir().join("cmd-10.txt"), "hello").unwrap();
    std::fs::write(store.dir().join("cmd-2.txt"), "hi").unwrap();
    std::fs::write(store.dir().join("notes.txt"), "ignored").unwrap();

    let listed = store.list().await.unwrap();
    assert_eq!(
        listed,
        vec![
            ArtifactInfo {
                id: "cmd-2.txt".to_string(),
                execution_id: 2,
                size: 2,
            },
            ArtifactInfo {
                id: "cmd-10.txt".to_string(),
                execution_id: 10,
                size: 5,
            },
        ]
    );

    let reopened = ArtifactStore::open(dir.path(), &config).await.unwrap();
    assert_eq!(reopened.next_execution_id(), 11);

    assert!(store.remove("cmd-2.txt").await.unwrap());
    assert!(!store.remove("cmd-2.txt").await.unwrap());
    assert!(store.remove("notes.txt").await.is_err());
}
