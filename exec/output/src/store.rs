//! On-disk layout for spilled command output.

use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use serde::Serialize;
use snafu::ResultExt;
use toolcall_config::ToolCallConfig;
use tracing::debug;

use crate::buffer::OutputBuffer;
use crate::error::Result;
use crate::error::output_error;

const ID_PREFIX: &str = "cmd-";
const ID_SUFFIX: &str = ".txt";

/// Execution id encoded in an artifact id, or `None` unless `id` matches
/// `^cmd-\d+\.txt$` exactly and the digits fit in a `u64`.
pub fn parse_artifact_id(id: &str) -> Option<u64> {
    let digits = id.strip_prefix(ID_PREFIX)?.strip_suffix(ID_SUFFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

pub fn artifact_id(execution_id: u64) -> String {
    format!("{ID_PREFIX}{execution_id}{ID_SUFFIX}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactInfo {
    pub id: String,
    pub execution_id: u64,
    pub size: u64,
}

/// Artifact directory for one task. Clones share the id counter.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
    preview_budget: usize,
    enable_spill: bool,
    next_id: Arc<AtomicU64>,
}

impl ArtifactStore {
    pub fn new(task_dir: &Path, config: &ToolCallConfig) -> Self {
        Self {
            dir: task_dir.join(&config.command_output_dir),
            preview_budget: config.head_budget() + config.tail_budget(),
            enable_spill: config.enable_spill,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Like [`new`](Self::new), continuing ids after any artifacts already
    /// on disk.
    pub async fn open(task_dir: &Path, config: &ToolCallConfig) -> Result<Self> {
        let store = Self::new(task_dir, config);
        let last = store
            .list()
            .await?
            .iter()
            .map(|info| info.execution_id)
            .max()
            .unwrap_or(0);
        store.next_id.store(last + 1, Ordering::SeqCst);
        Ok(store)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Monotonic per store.
    pub fn next_execution_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Buffer for a new command execution.
    pub fn create_buffer(&self) -> OutputBuffer {
        let execution_id = self.next_execution_id();
        let buffer = OutputBuffer::new(self.preview_budget);
        if self.enable_spill {
            buffer.with_spill(&self.dir, execution_id)
        } else {
            buffer
        }
    }

    /// Validated path for `id`. Never touches the filesystem.
    pub fn path_for(&self, id: &str) -> Result<PathBuf> {
        snafu::ensure!(
            parse_artifact_id(id).is_some(),
            output_error::InvalidArtifactIdSnafu { id }
        );
        Ok(self.dir.join(id))
    }

    /// Artifacts on disk, oldest first.
    pub async fn list(&self) -> Result<Vec<ArtifactInfo>> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err).context(output_error::IoSnafu { path: &self.dir }),
        };
        let mut out = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .context(output_error::IoSnafu { path: &self.dir })?
        {
            let name = entry.file_name().to_string_lossy().into_owned();
            let Some(execution_id) = parse_artifact_id(&name) else {
                continue;
            };
            let metadata = entry
                .metadata()
                .await
                .context(output_error::IoSnafu { path: entry.path() })?;
            if metadata.is_file() {
                out.push(ArtifactInfo {
                    id: name,
                    execution_id,
                    size: metadata.len(),
                });
            }
        }
        out.sort_by_key(|info| info.execution_id);
        Ok(out)
    }

    /// Returns false when the artifact did not exist.
    pub async fn remove(&self, id: &str) -> Result<bool> {
        let path = self.path_for(id)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                debug!(artifact = %id, "artifact removed");
                Ok(true)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err).context(output_error::IoSnafu { path }),
        }
    }
}

#[cfg(test)]
#[path = "store.test.rs"]
mod tests;
