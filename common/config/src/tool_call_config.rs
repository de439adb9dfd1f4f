//! Limits and toggles shared by the stream, edit, and output crates.

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::error::ConfigError;
use crate::error::Result;

/// Combined head + tail bytes kept in memory for a command preview.
pub const DEFAULT_PREVIEW_BYTE_BUDGET: i64 = 50_000;

/// Fixed chunk size for artifact reads.
pub const DEFAULT_READ_CHUNK_SIZE: i64 = 64 * 1024;

pub const DEFAULT_READ_LIMIT: i64 = 32 * 1024;

pub const DEFAULT_MAX_READ_LIMIT: i64 = 256 * 1024;

pub const DEFAULT_MAX_SEARCH_RESULT_BYTES: i64 = 32 * 1024;

/// Upper bound for generated integration tool names.
pub const DEFAULT_MAX_INTEGRATION_NAME_LENGTH: i64 = 64;

/// Consecutive edit failures on one file before the failure is surfaced.
pub const DEFAULT_ESCALATE_AFTER_FAILURES: i32 = 2;

/// Subdirectory of the task directory that holds spilled output.
pub const DEFAULT_COMMAND_OUTPUT_DIR: &str = "command-output";

/// Tool-call pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ToolCallConfig {
    #[serde(default = "default_preview_byte_budget")]
    pub preview_byte_budget: i64,

    #[serde(default = "default_read_chunk_size")]
    pub read_chunk_size: i64,

    /// Bytes returned by a ranged read when no limit is given.
    #[serde(default = "default_read_limit")]
    pub default_read_limit: i64,

    #[serde(default = "default_max_read_limit")]
    pub max_read_limit: i64,

    #[serde(default = "default_max_search_result_bytes")]
    pub max_search_result_bytes: i64,

    #[serde(default = "default_max_integration_name_length")]
    pub max_integration_name_length: i64,

    #[serde(default = "default_escalate_after_failures")]
    pub escalate_after_failures: i32,

    #[serde(default = "default_command_output_dir")]
    pub command_output_dir: String,

    /// When false, output past the preview budget is dropped instead of
    /// being written to an artifact.
    #[serde(default = "default_true")]
    pub enable_spill: bool,
}

fn default_preview_byte_budget() -> i64 {
    DEFAULT_PREVIEW_BYTE_BUDGET
}

fn default_read_chunk_size() -> i64 {
    DEFAULT_READ_CHUNK_SIZE
}

fn default_read_limit() -> i64 {
    DEFAULT_READ_LIMIT
}

fn default_max_read_limit() -> i64 {
    DEFAULT_MAX_READ_LIMIT
}

fn default_max_search_result_bytes() -> i64 {
    DEFAULT_MAX_SEARCH_RESULT_BYTES
}

fn default_max_integration_name_length() -> i64 {
    DEFAULT_MAX_INTEGRATION_NAME_LENGTH
}

fn default_escalate_after_failures() -> i32 {
    DEFAULT_ESCALATE_AFTER_FAILURES
}

fn default_command_output_dir() -> String {
    DEFAULT_COMMAND_OUTPUT_DIR.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ToolCallConfig {
    fn default() -> Self {
        Self {
            preview_byte_budget: DEFAULT_PREVIEW_BYTE_BUDGET,
            read_chunk_size: DEFAULT_READ_CHUNK_SIZE,
            default_read_limit: DEFAULT_READ_LIMIT,
            max_read_limit: DEFAULT_MAX_READ_LIMIT,
            max_search_result_bytes: DEFAULT_MAX_SEARCH_RESULT_BYTES,
            max_integration_name_length: DEFAULT_MAX_INTEGRATION_NAME_LENGTH,
            escalate_after_failures: DEFAULT_ESCALATE_AFTER_FAILURES,
            command_output_dir: DEFAULT_COMMAND_OUTPUT_DIR.to_string(),
            enable_spill: true,
        }
    }
}

impl ToolCallConfig {
    /// Load from a JSON file. A missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "config file absent, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidJson {
                file: path.display().to_string(),
                error: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// File layer followed by environment overrides.
    pub fn load(path: &Path) -> Result<Self> {
        let config = crate::EnvLoader::new().apply(Self::from_file(path)?);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.preview_byte_budget < 2 {
            return Err(invalid(
                "preview_byte_budget",
                "must be at least 2 bytes so head and tail each get a share",
            ));
        }
        if self.read_chunk_size <= 0 {
            return Err(invalid("read_chunk_size", "must be positive"));
        }
        if self.default_read_limit <= 0 || self.default_read_limit > self.max_read_limit {
            return Err(invalid(
                "default_read_limit",
                "must be positive and not exceed max_read_limit",
            ));
        }
        if self.max_search_result_bytes <= 0 {
            return Err(invalid("max_search_result_bytes", "must be positive"));
        }
        // "mcp--" plus one separator and at least one char on each side.
        if self.max_integration_name_length < 9 {
            return Err(invalid("max_integration_name_length", "must be at least 9"));
        }
        if self.escalate_after_failures < 1 {
            return Err(invalid("escalate_after_failures", "must be at least 1"));
        }
        if self.command_output_dir.is_empty()
            || self.command_output_dir.contains("..")
            || Path::new(&self.command_output_dir).is_absolute()
        {
            return Err(invalid(
                "command_output_dir",
                "must be a relative directory name",
            ));
        }
        Ok(())
    }

    pub fn head_budget(&self) -> usize {
        (self.preview_byte_budget / 2) as usize
    }

    pub fn tail_budget(&self) -> usize {
        (self.preview_byte_budget - self.preview_byte_budget / 2) as usize
    }

    pub fn integration_name_limit(&self) -> usize {
        self.max_integration_name_length as usize
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
#[path = "tool_call_config.test.rs"]
mod tests;
