//! Tracing subscriber setup.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Timezone used for log timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimezoneConfig {
    #[default]
    Local,
    Utc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Include file:line in each event.
    pub location: bool,
    /// Include the event target.
    pub target: bool,
    pub timezone: TimezoneConfig,
    /// Base filter directive, e.g. `info`.
    pub level: String,
    /// Extra per-module directives, e.g. `toolcall_stream=debug`.
    pub modules: Vec<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            location: false,
            target: false,
            timezone: TimezoneConfig::Local,
            level: "info".to_string(),
            modules: Vec::new(),
        }
    }
}

/// Timestamp formatter switching between local time and UTC at runtime.
#[derive(Debug, Clone)]
pub struct ConfigurableTimer {
    timezone: TimezoneConfig,
}

impl ConfigurableTimer {
    pub fn new(timezone: TimezoneConfig) -> Self {
        Self { timezone }
    }
}

impl FormatTime for ConfigurableTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        match self.timezone {
            TimezoneConfig::Local => {
                let now = chrono::Local::now();
                write!(w, "{}", now.format("%Y-%m-%d %H:%M:%S%.3f"))
            }
            TimezoneConfig::Utc => {
                let now = chrono::Utc::now();
                write!(w, "{}", now.format("%Y-%m-%d %H:%M:%S%.3fZ"))
            }
        }
    }
}

/// Build the filter. `RUST_LOG` wins over the config when set.
pub fn build_env_filter(logging: &LoggingConfig, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let base = if logging.level.trim().is_empty() {
        default_level
    } else {
        logging.level.as_str()
    };
    let mut directives = vec![base.to_string()];
    directives.extend(
        logging
            .modules
            .iter()
            .filter(|m| !m.trim().is_empty())
            .cloned(),
    );

    EnvFilter::try_new(directives.join(","))
        .unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install a stderr subscriber.
///
/// Returns false when a global subscriber was already installed.
pub fn init_logging(logging: &LoggingConfig) -> bool {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(ConfigurableTimer::new(logging.timezone))
        .with_target(logging.target)
        .with_file(logging.location)
        .with_line_number(logging.location);

    tracing_subscriber::registry()
        .with(build_env_filter(logging, "info"))
        .with(layer)
        .try_init()
        .is_ok()
}

#[cfg(test)]
#[path = "logging.test.rs"]
mod tests;
