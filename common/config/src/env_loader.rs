//! Environment variable overrides for [`ToolCallConfig`].

use std::env;

use tracing::debug;
use tracing::warn;

use crate::tool_call_config::ToolCallConfig;

pub const ENV_PREVIEW_BYTE_BUDGET: &str = "TOOLCALL_PREVIEW_BYTE_BUDGET";
pub const ENV_READ_CHUNK_SIZE: &str = "TOOLCALL_READ_CHUNK_SIZE";
pub const ENV_DEFAULT_READ_LIMIT: &str = "TOOLCALL_DEFAULT_READ_LIMIT";
pub const ENV_MAX_READ_LIMIT: &str = "TOOLCALL_MAX_READ_LIMIT";
pub const ENV_MAX_SEARCH_RESULT_BYTES: &str = "TOOLCALL_MAX_SEARCH_RESULT_BYTES";
pub const ENV_ESCALATE_AFTER_FAILURES: &str = "TOOLCALL_ESCALATE_AFTER_FAILURES";
pub const ENV_COMMAND_OUTPUT_DIR: &str = "TOOLCALL_COMMAND_OUTPUT_DIR";
pub const ENV_DISABLE_SPILL: &str = "TOOLCALL_DISABLE_SPILL";

/// Reads `TOOLCALL_*` variables on top of an existing config.
#[derive(Debug, Default)]
pub struct EnvLoader;

impl EnvLoader {
    pub fn new() -> Self {
        Self
    }

    /// Apply every override that is set and parseable.
    pub fn apply(&self, mut config: ToolCallConfig) -> ToolCallConfig {
        if let Some(val) = self.get_i64(ENV_PREVIEW_BYTE_BUDGET) {
            config.preview_byte_budget = val;
            debug!(env = ENV_PREVIEW_BYTE_BUDGET, value = val, "loaded");
        }

        if let Some(val) = self.get_i64(ENV_READ_CHUNK_SIZE) {
            config.read_chunk_size = val;
            debug!(env = ENV_READ_CHUNK_SIZE, value = val, "loaded");
        }

        if let Some(val) = self.get_i64(ENV_DEFAULT_READ_LIMIT) {
            config.default_read_limit = val;
            debug!(env = ENV_DEFAULT_READ_LIMIT, value = val, "loaded");
        }

        if let Some(val) = self.get_i64(ENV_MAX_READ_LIMIT) {
            config.max_read_limit = val;
            debug!(env = ENV_MAX_READ_LIMIT, value = val, "loaded");
        }

        if let Some(val) = self.get_i64(ENV_MAX_SEARCH_RESULT_BYTES) {
            config.max_search_result_bytes = val;
            debug!(env = ENV_MAX_SEARCH_RESULT_BYTES, value = val, "loaded");
        }

        if let Some(val) = self.get_i64(ENV_ESCALATE_AFTER_FAILURES) {
            match i32::try_from(val) {
                Ok(v) => {
                    config.escalate_after_failures = v;
                    debug!(env = ENV_ESCALATE_AFTER_FAILURES, value = v, "loaded");
                }
                Err(_) => warn!(key = ENV_ESCALATE_AFTER_FAILURES, value = val, "out of range"),
            }
        }

        if let Some(val) = self.get_string(ENV_COMMAND_OUTPUT_DIR) {
            debug!(env = ENV_COMMAND_OUTPUT_DIR, value = %val, "loaded");
            config.command_output_dir = val;
        }

        if self.get_bool(ENV_DISABLE_SPILL) {
            config.enable_spill = false;
            debug!(env = ENV_DISABLE_SPILL, "loaded");
        }

        config
    }

    fn get_string(&self, key: &str) -> Option<String> {
        env::var(key).ok().filter(|s| !s.is_empty())
    }

    /// Logs a warning if the value is set but cannot be parsed.
    fn get_i64(&self, key: &str) -> Option<i64> {
        self.get_string(key).and_then(|s| match s.trim().parse::<i64>() {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(key, value = %s, "Failed to parse i64 from env var");
                None
            }
        })
    }

    /// "1", "true" and "yes" (case-insensitive) are true.
    fn get_bool(&self, key: &str) -> bool {
        self.get_string(key)
            .map(|s| {
                let lower = s.to_lowercase();
                let is_true = matches!(lower.as_str(), "1" | "true" | "yes");
                let is_false = matches!(lower.as_str(), "0" | "false" | "no");
                if !is_true && !is_false {
                    warn!(key, value = %s, "Unrecognized boolean value, treating as false");
                }
                is_true
            })
            .unwrap_or(false)
    }
}

#[cfg(test)]
#[path = "env_loader.test.rs"]
mod tests;
