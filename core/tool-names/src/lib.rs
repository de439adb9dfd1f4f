//! Maps raw model-emitted tool names to exactly one dispatchable target.
//!
//! A name resolves to a [`BuiltinTool`], a custom tool registered at runtime,
//! or an integration tool addressed as `mcp--<server>--<tool>`. Anything else
//! is rejected.

pub mod alias;
pub mod builtin;
pub mod cleanup;
pub mod error;
pub mod integration;
pub mod resolver;

pub use alias::resolve_alias;
pub use builtin::BuiltinTool;
pub use cleanup::clean_tool_name;
pub use error::NameError;
pub use error::Result;
pub use integration::INTEGRATION_PREFIX;
pub use integration::INTEGRATION_SEPARATOR;
pub use integration::IntegrationName;
pub use integration::decode_integration_name;
pub use integration::encode_integration_name;
pub use integration::is_integration_name;
pub use integration::normalize_integration_separators;
pub use resolver::ResolvedName;
pub use resolver::ToolNameResolver;
