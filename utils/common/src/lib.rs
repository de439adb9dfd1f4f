//! Small helpers shared across the workspace.

pub mod byte_size;
pub mod logging;

pub use byte_size::format_bytes;
pub use logging::ConfigurableTimer;
pub use logging::LoggingConfig;
pub use logging::TimezoneConfig;
pub use logging::build_env_filter;
pub use logging::init_logging;
