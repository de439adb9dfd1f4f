use super::*;
use pretty_assertions::assert_eq;
use serial_test::serial;

#[test]
fn test_partial_json_fills_defaults() {
    let config: ToolCallConfig =
        serde_json::from_str(r#"{"preview_byte_budget": 40000}"#).unwrap();
    assert_eq!(config.preview_byte_budget, 40_000);
    assert_eq!(config.read_chunk_size, DEFAULT_READ_CHUNK_SIZE);
    assert_eq!(config.command_output_dir, DEFAULT_COMMAND_OUTPUT_DIR);
    assert!(config.enable_spill);
}

#[test]
fn test_budget_split() {
    let config = ToolCallConfig {
        preview_byte_budget: 40_000,
        ..Default::default()
    };
    assert_eq!(config.head_budget(), 20_000);
    assert_eq!(config.tail_budget(), 20_000);

    let odd = ToolCallConfig {
        preview_byte_budget: 5,
        ..Default::default()
    };
    assert_eq!(odd.head_budget() + odd.tail_budget(), 5);
    assert_eq!(odd.integration_name_limit(), 64);
}

#[test]
fn test_validate_rejects_bad_values() {
    let cases = [
        ToolCallConfig {
            preview_byte_budget: 1,
            ..Default::default()
        },
        ToolCallConfig {
            read_chunk_size: 0,
            ..Default::default()
        },
        ToolCallConfig {
            default_read_limit: DEFAULT_MAX_READ_LIMIT + 1,
            ..Default::default()
        },
        ToolCallConfig {
            command_output_dir: "../escape".to_string(),
            ..Default::default()
        },
        ToolCallConfig {
            max_integration_name_length: 4,
            ..Default::default()
        },
    ];
    for config in cases {
        assert!(
            matches!(config.validate(), Err(ConfigError::InvalidValue { .. })),
            "{config:?} should be rejected"
        );
    }
    assert!(ToolCallConfig::default().validate().is_ok());
}

#[test]
#[serial]
fn test_from_file_missing_is_default() {
    let dir = tempfile::tempdir().unwrap();
    let config = ToolCallConfig::from_file(&dir.path().join("absent.json")).unwrap();
    assert_eq!(config, ToolCallConfig::default());
}

#[test]
#[serial]
fn test_from_file_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("toolcall.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = ToolCallConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidJson { .. }));
}

#[test]
#[serial]
fn test_load_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("toolcall.json");
    std::fs::write(&path, r#"{"escalate_after_failures": 4}"#).unwrap();
    let config = ToolCallConfig::load(&path).unwrap();
    assert_eq!(config.escalate_after_failures, 4);
}
