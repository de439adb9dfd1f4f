//! Consecutive edit failures per file.
//!
//! Models often fix a failed edit on their own next try, so the first
//! failure on a file is recorded quietly. From the configured threshold on,
//! the caller should surface the failure to the user.

use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;

use toolcall_config::ToolCallConfig;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct EditFailureTracker {
    escalate_after: i32,
    failures: HashMap<PathBuf, i32>,
}

impl Default for EditFailureTracker {
    fn default() -> Self {
        Self::from_config(&ToolCallConfig::default())
    }
}

impl EditFailureTracker {
    pub fn new(escalate_after: i32) -> Self {
        Self {
            escalate_after: escalate_after.max(1),
            failures: HashMap::new(),
        }
    }

    pub fn from_config(config: &ToolCallConfig) -> Self {
        Self::new(config.escalate_after_failures)
    }

    /// Record a failure and report whether it should be escalated.
    pub fn record_failure(&mut self, path: &Path) -> bool {
        let count = self.failures.entry(path.to_path_buf()).or_insert(0);
        *count += 1;
        debug!(path = %path.display(), consecutive = *count, "edit failure recorded");
        *count >= self.escalate_after
    }

    pub fn record_success(&mut self, path: &Path) {
        self.failures.remove(path);
    }

    pub fn consecutive_failures(&self, path: &Path) -> i32 {
        self.failures.get(path).copied().unwrap_or(0)
    }

    pub fn reset(&mut self) {
        self.failures.clear();
    }
}

#[cfg(test)]
#[path = "failure_tracker.test.rs"]
mod tests;
