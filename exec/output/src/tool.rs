//! `read_command_output` tool boundary.

use toolcall_args::ReadCommandOutputArgs;
use toolcall_config::ToolCallConfig;
use toolcall_utils_common::format_bytes;

use crate::error::Result;
use crate::reader::ArtifactReader;
use crate::reader::RangeRead;
use crate::reader::SearchResult;

#[derive(Debug, Clone)]
pub struct ReadCommandOutputTool {
    reader: ArtifactReader,
    default_limit: u64,
    max_limit: u64,
    max_search_bytes: usize,
}

impl ReadCommandOutputTool {
    pub fn new(reader: ArtifactReader, config: &ToolCallConfig) -> Self {
        Self {
            reader,
            default_limit: config.default_read_limit.max(1) as u64,
            max_limit: config.max_read_limit.max(1) as u64,
            max_search_bytes: config.max_search_result_bytes.max(1) as usize,
        }
    }

    /// Line-numbered text under a header with the artifact size and whether
    /// the result is complete.
    pub async fn run(&self, args: &ReadCommandOutputArgs) -> Result<String> {
        if let Some(pattern) = args.search.as_deref().filter(|p| !p.is_empty()) {
            let result = self
                .reader
                .search(&args.artifact_id, pattern, self.max_search_bytes)
                .await?;
            return Ok(render_search(pattern, &result, self.max_search_bytes));
        }
        let offset = args.offset.unwrap_or(0).max(0) as u64;
        let limit = args
            .limit
            .map_or(self.default_limit, |l| (l.max(1) as u64).min(self.max_limit));
        let read = self.reader.read_range(&args.artifact_id, offset, limit).await?;
        Ok(render_range(&read))
    }
}

fn size_label(bytes: u64) -> String {
    format!("{} ({bytes} bytes)", format_bytes(bytes))
}

fn render_range(read: &RangeRead) -> String {
    let status = if read.has_more() {
        format!("Partial: use offset={} to continue", read.end())
    } else if read.is_complete() {
        "Complete".to_string()
    } else {
        "End of output".to_string()
    };
    let mut out = format!(
        "[Artifact: {} | Size: {} | Bytes {}-{} | {status}]\n",
        read.artifact_id,
        size_label(read.total_size),
        read.offset,
        read.end()
    );
    let text = read.text();
    for (i, line) in text.lines().enumerate() {
        out.push_str(&format!("{:>6}\t{line}\n", read.start_line + i as u64));
    }
    out
}

fn render_search(pattern: &str, result: &SearchResult, limit: usize) -> String {
    let status = if result.truncated {
        format!("Truncated at {limit} result bytes; narrow the search or read by offset")
    } else {
        "Complete".to_string()
    };
    let mode = if result.literal_fallback {
        " (invalid regex, matched literally)"
    } else {
        ""
    };
    let mut out = format!(
        "[Artifact: {} | Size: {} | Search: {pattern:?}{mode} | {} matching lines | {status}]\n",
        result.artifact_id,
        size_label(result.total_size),
        result.matches.len()
    );
    if result.matches.is_empty() {
        out.push_str("No lines match.\n");
    }
    for m in &result.matches {
        out.push_str(&format!("{:>6}\t{}\n", m.line_number, m.line));
    }
    out
}

#[cfg(test)]
#[path = "tool.test.rs"]
mod tests;
