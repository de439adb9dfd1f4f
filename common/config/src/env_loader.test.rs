use super::*;
use serial_test::serial;

struct EnvGuard {
    keys: Vec<String>,
}

impl EnvGuard {
    fn new() -> Self {
        Self { keys: Vec::new() }
    }

    fn set(&mut self, key: &str, value: &str) {
        self.keys.push(key.to_string());
        // SAFETY: tests touching the environment run serially.
        unsafe { env::set_var(key, value) };
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in &self.keys {
            // SAFETY: tests touching the environment run serially.
            unsafe { env::remove_var(key) };
        }
    }
}

#[test]
#[serial]
fn test_apply_without_env_keeps_defaults() {
    let config = EnvLoader::new().apply(ToolCallConfig::default());
    assert_eq!(config, ToolCallConfig::default());
}

#[test]
#[serial]
fn test_apply_overrides() {
    let mut guard = EnvGuard::new();
    guard.set(ENV_PREVIEW_BYTE_BUDGET, "40000");
    guard.set(ENV_ESCALATE_AFTER_FAILURES, "3");
    guard.set(ENV_COMMAND_OUTPUT_DIR, "out");
    guard.set(ENV_DISABLE_SPILL, "TRUE");

    let config = EnvLoader::new().apply(ToolCallConfig::default());
    assert_eq!(config.preview_byte_budget, 40_000);
    assert_eq!(config.escalate_after_failures, 3);
    assert_eq!(config.command_output_dir, "out");
    assert!(!config.enable_spill);
}

#[test]
#[serial]
fn test_unparseable_values_are_ignored() {
    let mut guard = EnvGuard::new();
    guard.set(ENV_READ_CHUNK_SIZE, "lots");
    guard.set(ENV_DISABLE_SPILL, "maybe");

    let config = EnvLoader::new().apply(ToolCallConfig::default());
    assert_eq!(config.read_chunk_size, crate::DEFAULT_READ_CHUNK_SIZE);
    assert!(config.enable_spill);
}
