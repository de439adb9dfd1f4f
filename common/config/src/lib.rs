//! Configuration for the tool-call pipeline.
//!
//! Values come from three layers, later layers winning:
//! built-in defaults, an optional JSON file, then `TOOLCALL_*` environment
//! variables.

pub mod env_loader;
pub mod error;
pub mod tool_call_config;

pub use env_loader::EnvLoader;
pub use error::ConfigError;
pub use error::Result;
pub use tool_call_config::DEFAULT_COMMAND_OUTPUT_DIR;
pub use tool_call_config::DEFAULT_ESCALATE_AFTER_FAILURES;
pub use tool_call_config::DEFAULT_MAX_INTEGRATION_NAME_LENGTH;
pub use tool_call_config::DEFAULT_PREVIEW_BYTE_BUDGET;
pub use tool_call_config::DEFAULT_READ_CHUNK_SIZE;
pub use tool_call_config::ToolCallConfig;
