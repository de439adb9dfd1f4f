//! Head/tail preview with lossless disk spill.
//!
//! Every byte lands in exactly one of: the head, the tail, or the omitted
//! count. Independently, chunks are queued until the total exceeds the
//! preview budget, then the queue is flushed to the artifact file and later
//! chunks are streamed straight to it, so the artifact always holds the
//! complete output.

use std::path::Path;
use std::path::PathBuf;

use serde::Serialize;
use snafu::ResultExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use toolcall_utils_common::format_bytes;
use tracing::debug;
use tracing::warn;

use crate::error::OutputError;
use crate::error::output_error;
use crate::store::artifact_id;
use crate::utf8::ceil_boundary;
use crate::utf8::floor_boundary;
use crate::utf8::incomplete_suffix;
use crate::utf8::is_continuation;

#[derive(Debug)]
enum SpillState {
    Disabled,
    /// Below budget so far; chunks held in memory.
    Pending {
        dir: PathBuf,
        id: String,
        chunks: Vec<Vec<u8>>,
    },
    Streaming {
        id: String,
        path: PathBuf,
        file: File,
    },
    Failed {
        error: String,
    },
}

/// Immutable result of [`OutputBuffer::finalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputSummary {
    /// Head, omission marker (if anything was dropped), tail.
    pub preview: String,
    pub head_bytes: u64,
    pub tail_bytes: u64,
    pub omitted_bytes: u64,
    pub total_bytes: u64,
    pub spilled: bool,
    pub artifact_id: Option<String>,
    pub artifact_path: Option<PathBuf>,
    /// Set when the artifact could not be written. The preview is still valid.
    pub spill_error: Option<String>,
}

impl OutputSummary {
    pub fn is_truncated(&self) -> bool {
        self.omitted_bytes > 0
    }

    /// Preview plus a footer pointing at the artifact or the spill failure.
    pub fn render(&self) -> String {
        let mut out = self.preview.clone();
        if let Some(id) = self.artifact_id.as_deref().filter(|_| self.spilled) {
            out.push_str(&format!(
                "\n\n[Full output ({}) saved as {id}. Use read_command_output with artifact_id \"{id}\" to read or search it.]",
                format_bytes(self.total_bytes)
            ));
        }
        if let Some(error) = &self.spill_error {
            out.push_str(&format!("\n\n[Full output could not be saved: {error}]"));
        }
        out
    }
}

/// Output capture for one command execution.
#[derive(Debug)]
pub struct OutputBuffer {
    head_budget: usize,
    tail_budget: usize,
    head: Vec<u8>,
    head_closed: bool,
    tail: Vec<u8>,
    omitted_bytes: u64,
    total_bytes: u64,
    spill: SpillState,
    summary: Option<OutputSummary>,
}

impl OutputBuffer {
    /// Preview only. `preview_budget` is split evenly between head and tail.
    pub fn new(preview_budget: usize) -> Self {
        let head_budget = preview_budget / 2;
        Self {
            head_budget,
            tail_budget: preview_budget - head_budget,
            head: Vec::new(),
            head_closed: false,
            tail: Vec::new(),
            omitted_bytes: 0,
            total_bytes: 0,
            spill: SpillState::Disabled,
            summary: None,
        }
    }

    /// Spill to `<dir>/cmd-<execution_id>.txt` once over budget.
    pub fn with_spill(mut self, dir: &Path, execution_id: u64) -> Self {
        self.spill = SpillState::Pending {
            dir: dir.to_path_buf(),
            id: artifact_id(execution_id),
            chunks: Vec::new(),
        };
        self
    }

    pub fn preview_budget(&self) -> usize {
        self.head_budget + self.tail_budget
    }

    pub fn head_bytes(&self) -> u64 {
        self.head.len() as u64
    }

    pub fn tail_bytes(&self) -> u64 {
        self.tail.len() as u64
    }

    pub fn omitted_bytes(&self) -> u64 {
        self.omitted_bytes
    }

    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    pub fn is_spilled(&self) -> bool {
        matches!(self.spill, SpillState::Streaming { .. })
    }

    pub fn spill_error(&self) -> Option<&str> {
        match &self.spill {
            SpillState::Failed { error } => Some(error),
            _ => None,
        }
    }

    pub async fn write(&mut self, chunk: &[u8]) {
        if self.summary.is_some() {
            warn!(bytes = chunk.len(), "write after finalize ignored");
            return;
        }
        if chunk.is_empty() {
            return;
        }
        self.total_bytes += chunk.len() as u64;
        self.write_preview(chunk);
        self.write_spill(chunk).await;
    }

    fn write_preview(&mut self, chunk: &[u8]) {
        let mut rest = chunk;
        if !self.head_closed {
            let room = self.head_budget - self.head.len();
            // The previous chunk may have ended the head inside a code point.
            if let Some((present, missing)) = incomplete_suffix(&self.head) {
                let continued = rest
                    .iter()
                    .take(missing)
                    .take_while(|b| is_continuation(**b))
                    .count();
                if continued == missing || continued == rest.len() {
                    if continued <= room {
                        self.head.extend_from_slice(&rest[..continued]);
                        rest = &rest[continued..];
                    } else {
                        let partial = self.head.split_off(self.head.len() - present);
                        self.tail.extend_from_slice(&partial);
                        self.head_closed = true;
                    }
                }
            }
        }
        if !self.head_closed {
            let room = self.head_budget - self.head.len();
            let take = floor_boundary(rest, room);
            if take == rest.len() {
                // Stays open even when exactly full: the next chunk may
                // continue a code point the head ends in.
                self.head.extend_from_slice(rest);
                return;
            }
            self.head.extend_from_slice(&rest[..take]);
            rest = &rest[take..];
            self.head_closed = true;
        }
        self.tail.extend_from_slice(rest);
        if self.tail.len() > self.tail_budget {
            let cut = ceil_boundary(&self.tail, self.tail.len() - self.tail_budget);
            self.tail.drain(..cut);
            self.omitted_bytes += cut as u64;
        }
    }

    async fn write_spill(&mut self, chunk: &[u8]) {
        let over_budget = self.total_bytes > self.preview_budget() as u64;
        let state = std::mem::replace(&mut self.spill, SpillState::Disabled);
        self.spill = match state {
            SpillState::Pending { dir, id, mut chunks } => {
                chunks.push(chunk.to_vec());
                if over_budget {
                    open_spill(dir, id, chunks).await
                } else {
                    SpillState::Pending { dir, id, chunks }
                }
            }
            SpillState::Streaming { id, path, mut file } => {
                let written = file
                    .write_all(chunk)
                    .await
                    .context(output_error::SpillSnafu { path: &path });
                match written {
                    Ok(()) => SpillState::Streaming { id, path, file },
                    Err(err) => spill_failed(err),
                }
            }
            other => other,
        };
    }

    /// Close the artifact and build the summary. Later calls return the
    /// same summary.
    pub async fn finalize(&mut self) -> OutputSummary {
        if let Some(summary) = &self.summary {
            return summary.clone();
        }
        let state = std::mem::replace(&mut self.spill, SpillState::Disabled);
        let (artifact, spill_error) = match state {
            SpillState::Streaming { id, path, mut file } => {
                let flushed = file
                    .flush()
                    .await
                    .context(output_error::SpillSnafu { path: &path });
                match flushed {
                    Ok(()) => {
                        debug!(artifact = %id, bytes = self.total_bytes, "output artifact closed");
                        (Some((id, path)), None)
                    }
                    Err(err) => {
                        warn!(error = ?err, "failed to flush output artifact");
                        (None, Some(describe(&err)))
                    }
                }
            }
            SpillState::Failed { error } => (None, Some(error)),
            SpillState::Pending { .. } | SpillState::Disabled => (None, None),
        };

        let mut preview = String::from_utf8_lossy(&self.head).into_owned();
        if self.omitted_bytes > 0 {
            preview.push_str(&format!("\n\n[... {} bytes omitted ...]\n\n", self.omitted_bytes));
        }
        preview.push_str(&String::from_utf8_lossy(&self.tail));

        let (artifact_id, artifact_path) = artifact.unzip();
        let summary = OutputSummary {
            preview,
            head_bytes: self.head_bytes(),
            tail_bytes: self.tail_bytes(),
            omitted_bytes: self.omitted_bytes,
            total_bytes: self.total_bytes,
            spilled: artifact_id.is_some(),
            artifact_id,
            artifact_path,
            spill_error,
        };
        self.summary = Some(summary.clone());
        summary
    }
}

async fn open_spill(dir: PathBuf, id: String, chunks: Vec<Vec<u8>>) -> SpillState {
    let path = dir.join(&id);
    let opened = async {
        tokio::fs::create_dir_all(&dir).await?;
        let mut file = File::create(&path).await?;
        for chunk in &chunks {
            file.write_all(chunk).await?;
        }
        Ok::<_, std::io::Error>(file)
    }
    .await
    .context(output_error::SpillSnafu { path: &path });
    match opened {
        Ok(file) => {
            debug!(artifact = %id, "output exceeded preview budget, spilling to disk");
            SpillState::Streaming { id, path, file }
        }
        Err(err) => spill_failed(err),
    }
}

fn spill_failed(err: OutputError) -> SpillState {
    warn!(error = ?err, "output spill failed, keeping preview only");
    SpillState::Failed {
        error: describe(&err),
    }
}

fn describe(err: &OutputError) -> String {
    match std::error::Error::source(err) {
        Some(source) => format!("{err}: {source}"),
        None => err.to_string(),
    }
}

#[cfg(test)]
#[path = "buffer.test.rs"]
mod tests;
