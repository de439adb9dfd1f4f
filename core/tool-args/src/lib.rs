//! Typed argument records for tool calls.
//!
//! Each tool name maps to one extractor in an [`ArgExtractorRegistry`]. The
//! same extractor runs while arguments are streaming
//! ([`ParseMode::Partial`], missing fields tolerated) and once they are
//! complete ([`ParseMode::Final`], required fields enforced).

pub mod coerce;
pub mod error;
mod extract;
pub mod mapper;
pub mod native;
pub mod registry;
pub mod tool_use;

pub use coerce::ArgMap;
pub use error::ArgsError;
pub use error::Result;
pub use mapper::ToolArgMapper;
pub use native::*;
pub use registry::ArgExtractorRegistry;
pub use registry::Extractor;
pub use registry::ParseMode;
pub use tool_use::DynamicIntegrationToolUse;
pub use tool_use::ParsedToolCall;
pub use tool_use::ToolUse;
