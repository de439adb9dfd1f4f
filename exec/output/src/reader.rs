//! Bounded-memory reads of spilled artifacts.
//!
//! Both modes stream the file in fixed-size chunks, so peak memory depends
//! on the chunk size and the requested limit, never on the artifact size.

use std::io::ErrorKind;
use std::path::PathBuf;

use regex_lite::Regex;
use regex_lite::RegexBuilder;
use serde::Serialize;
use snafu::ResultExt;
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use toolcall_config::ToolCallConfig;
use tracing::debug;

use crate::error::Result;
use crate::error::output_error;
use crate::store::ArtifactStore;

/// Longest line kept in memory while searching; the rest of such a line is
/// skipped.
const MAX_SEARCH_LINE_BYTES: usize = 1024 * 1024;

/// Per-match overhead counted against the search byte limit (line number
/// and separators in the rendered output).
const MATCH_OVERHEAD_BYTES: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeRead {
    pub artifact_id: String,
    pub data: Vec<u8>,
    pub offset: u64,
    /// 1-based line number of the line containing `offset`.
    pub start_line: u64,
    pub total_size: u64,
}

impl RangeRead {
    pub fn end(&self) -> u64 {
        self.offset + self.data.len() as u64
    }

    pub fn has_more(&self) -> bool {
        self.end() < self.total_size
    }

    /// The slice covers the whole artifact.
    pub fn is_complete(&self) -> bool {
        self.offset == 0 && !self.has_more()
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchMatch {
    pub line_number: u64,
    pub line: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub artifact_id: String,
    pub matches: Vec<SearchMatch>,
    pub total_size: u64,
    pub scanned_bytes: u64,
    /// Stopped at the result byte limit before the end of the artifact.
    pub truncated: bool,
    /// The pattern was not a valid regex and was matched literally.
    pub literal_fallback: bool,
}

/// Regex matching folds ASCII case only; the literal fallback folds full
/// Unicode case.
enum Matcher {
    Regex(Regex),
    Literal(String),
}

impl Matcher {
    fn new(pattern: &str) -> (Self, bool) {
        match RegexBuilder::new(pattern).case_insensitive(true).build() {
            Ok(re) => (Matcher::Regex(re), false),
            Err(err) => {
                debug!(pattern, error = %err, "invalid search regex, matching literally");
                (Matcher::Literal(pattern.to_lowercase()), true)
            }
        }
    }

    fn is_match(&self, line: &str) -> bool {
        match self {
            Matcher::Regex(re) => re.is_match(line),
            Matcher::Literal(needle) => line.to_lowercase().contains(needle),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArtifactReader {
    store: ArtifactStore,
    chunk_size: usize,
}

impl ArtifactReader {
    pub fn new(store: ArtifactStore, config: &ToolCallConfig) -> Self {
        Self {
            store,
            chunk_size: config.read_chunk_size.max(1) as usize,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn store(&self) -> &ArtifactStore {
        &self.store
    }

    async fn open(&self, id: &str) -> Result<(File, u64, PathBuf)> {
        let path = self.store.path_for(id)?;
        let file = match File::open(&path).await {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return output_error::ArtifactNotFoundSnafu { id }.fail();
            }
            Err(err) => return Err(err).context(output_error::IoSnafu { path }),
        };
        let size = file
            .metadata()
            .await
            .context(output_error::IoSnafu { path: &path })?
            .len();
        Ok((file, size, path))
    }

    /// Up to `limit` bytes starting at byte `offset`.
    pub async fn read_range(&self, id: &str, offset: u64, limit: u64) -> Result<RangeRead> {
        let (mut file, size, path) = self.open(id).await?;
        // An empty artifact can still be read from its start.
        snafu::ensure!(
            offset < size || (offset == 0 && size == 0),
            output_error::InvalidRangeSnafu { id, offset, size }
        );

        let mut buf = vec![0u8; self.chunk_size];
        let mut newlines = 0u64;
        let mut remaining = offset;
        while remaining > 0 {
            let want = remaining.min(buf.len() as u64) as usize;
            let n = file
                .read(&mut buf[..want])
                .await
                .context(output_error::IoSnafu { path: &path })?;
            if n == 0 {
                break;
            }
            newlines += buf[..n].iter().filter(|b| **b == b'\n').count() as u64;
            remaining -= n as u64;
        }

        let target = limit.min(size - offset) as usize;
        let mut data = Vec::with_capacity(target);
        while data.len() < target {
            let want = (target - data.len()).min(buf.len());
            let n = file
                .read(&mut buf[..want])
                .await
                .context(output_error::IoSnafu { path: &path })?;
            if n == 0 {
                break;
            }
            data.extend_from_slice(&buf[..n]);
        }

        Ok(RangeRead {
            artifact_id: id.to_string(),
            data,
            offset,
            start_line: newlines + 1,
            total_size: size,
        })
    }

    /// Lines matching `pattern` case-insensitively, until the rendered
    /// matches would exceed `max_result_bytes`.
    pub async fn search(&self, id: &str, pattern: &str, max_result_bytes: usize) -> Result<SearchResult> {
        let (mut file, size, path) = self.open(id).await?;
        let (matcher, literal_fallback) = Matcher::new(pattern);

        let mut result = SearchResult {
            artifact_id: id.to_string(),
            matches: Vec::new(),
            total_size: size,
            scanned_bytes: 0,
            truncated: false,
            literal_fallback,
        };
        let mut scan = LineScan {
            matcher: &matcher,
            max_result_bytes,
            result_bytes: 0,
            line_number: 1,
            skipping: false,
        };
        let mut buf = vec![0u8; self.chunk_size];
        let mut carry: Vec<u8> = Vec::new();

        loop {
            let n = file
                .read(&mut buf)
                .await
                .context(output_error::IoSnafu { path: &path })?;
            if n == 0 {
                break;
            }
            result.scanned_bytes += n as u64;
            carry.extend_from_slice(&buf[..n]);

            let mut start = 0;
            while let Some(pos) = carry[start..].iter().position(|b| *b == b'\n') {
                let end = start + pos;
                if !scan.line(&carry[start..end], &mut result) {
                    result.truncated = true;
                    return Ok(result);
                }
                scan.end_line();
                start = end + 1;
            }
            carry.drain(..start);

            if carry.len() > MAX_SEARCH_LINE_BYTES {
                if !scan.line(&carry[..MAX_SEARCH_LINE_BYTES], &mut result) {
                    result.truncated = true;
                    return Ok(result);
                }
                scan.skipping = true;
                carry.clear();
            }
        }
        if !carry.is_empty() && !scan.line(&carry, &mut result) {
            result.truncated = true;
        }
        Ok(result)
    }
}

struct LineScan<'a> {
    matcher: &'a Matcher,
    max_result_bytes: usize,
    result_bytes: usize,
    line_number: u64,
    /// Rest of an overlong line already evaluated.
    skipping: bool,
}

impl LineScan<'_> {
    /// False once the result limit is reached.
    fn line(&mut self, raw: &[u8], result: &mut SearchResult) -> bool {
        if self.skipping {
            return true;
        }
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let line = String::from_utf8_lossy(raw);
        if !self.matcher.is_match(&line) {
            return true;
        }
        let cost = line.len() + MATCH_OVERHEAD_BYTES;
        if self.result_bytes + cost > self.max_result_bytes {
            return false;
        }
        self.result_bytes += cost;
        result.matches.push(SearchMatch {
            line_number: self.line_number,
            line: line.into_owned(),
        });
        true
    }

    fn end_line(&mut self) {
        self.line_number += 1;
        self.skipping = false;
    }
}

#[cfg(test)]
#[path = "reader.test.rs"]
mod tests;
