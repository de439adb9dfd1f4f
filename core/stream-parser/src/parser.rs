//! Per-call argument accumulation and parsing.

use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;

use snafu::ResultExt;
use toolcall_args::ParsedToolCall;
use toolcall_args::ToolArgMapper;
use toolcall_names::ResolvedName;
use toolcall_names::ToolNameResolver;
use toolcall_names::clean_tool_name;
use toolcall_partial_json::parse_complete;
use toolcall_partial_json::parse_partial;
use tracing::debug;
use tracing::warn;

use crate::error::Result;
use crate::error::stream_error;

/// Argument text collected so far for one call id.
#[derive(Debug, Clone)]
pub struct ToolCallAccumulator {
    pub id: String,
    /// Emitted name after cleanup.
    pub name: String,
    pub arguments: String,
    /// Resolution at start time. `None` when the name is unresolvable, in
    /// which case finalize reports the error.
    resolved: Option<ResolvedName>,
}

/// Turns start/delta/end events into [`ParsedToolCall`]s.
///
/// Ids finalized since the last [`clear`](Self::clear) are remembered so
/// a replayed call never yields a second authoritative record.
#[derive(Debug)]
pub struct StreamingToolCallParser {
    resolver: Arc<ToolNameResolver>,
    mapper: Arc<ToolArgMapper>,
    accumulators: HashMap<String, ToolCallAccumulator>,
    completed_ids: HashSet<String>,
}

impl StreamingToolCallParser {
    pub fn new(resolver: Arc<ToolNameResolver>, mapper: Arc<ToolArgMapper>) -> Self {
        Self {
            resolver,
            mapper,
            accumulators: HashMap::new(),
            completed_ids: HashSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.accumulators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accumulators.is_empty()
    }

    pub fn is_tracking(&self, id: &str) -> bool {
        self.accumulators.contains_key(id)
    }

    pub fn accumulator(&self, id: &str) -> Option<&ToolCallAccumulator> {
        self.accumulators.get(id)
    }

    /// Begin accumulating `id`. Returns false for duplicates and for ids
    /// already finalized in this request.
    pub fn start(&mut self, id: &str, name: &str) -> bool {
        if self.accumulators.contains_key(id) {
            debug!(call_id = %id, "duplicate start ignored");
            return false;
        }
        if self.completed_ids.contains(id) {
            debug!(call_id = %id, "start for an already finalized call ignored");
            return false;
        }
        let name = clean_tool_name(name);
        let resolved = match self.resolver.resolve(&name) {
            Ok(resolved) => Some(resolved),
            Err(err) => {
                debug!(call_id = %id, tool = %name, error = %err, "name not resolvable yet");
                None
            }
        };
        self.accumulators.insert(
            id.to_string(),
            ToolCallAccumulator {
                id: id.to_string(),
                name,
                arguments: String::new(),
                resolved,
            },
        );
        true
    }

    /// Append argument text. Returns an advisory `partial` record when the
    /// text so far parses into something the mapper accepts.
    pub fn append_chunk(&mut self, id: &str, text: &str) -> Option<ParsedToolCall> {
        let Some(acc) = self.accumulators.get_mut(id) else {
            if !self.completed_ids.contains(id) {
                warn!(call_id = %id, "argument delta for unknown tool call");
            }
            return None;
        };
        acc.arguments.push_str(text);
        let resolved = acc.resolved.as_ref()?;
        if resolved.is_integration() {
            // Integration payloads are only meaningful once complete.
            return None;
        }
        let value = parse_partial(&acc.arguments)?;
        self.mapper.map_partial(id, &acc.name, resolved, &value)
    }

    /// Strictly parse and map the complete call. The accumulator is removed
    /// whether or not this succeeds.
    pub fn finalize(&mut self, id: &str) -> Result<Option<ParsedToolCall>> {
        let Some(acc) = self.accumulators.remove(id) else {
            if !self.completed_ids.contains(id) {
                warn!(call_id = %id, "finalize for unknown tool call");
            }
            return Ok(None);
        };
        self.completed_ids.insert(id.to_string());

        let resolved = self
            .resolver
            .resolve(&acc.name)
            .context(stream_error::ResolveSnafu { id })?;
        let value = parse_complete(&acc.arguments).context(stream_error::InvalidJsonSnafu {
            id,
            tool: resolved.canonical_name(),
        })?;
        let call = self
            .mapper
            .map_final(id, &acc.name, &resolved, &value)
            .context(stream_error::PayloadSnafu { id })?;
        debug!(call_id = %id, tool = %call.name(), "tool call finalized");
        Ok(Some(call))
    }

    /// Forget every accumulator and every finalized id.
    pub fn clear(&mut self) {
        self.accumulators.clear();
        self.completed_ids.clear();
    }
}

#[cfg(test)]
#[path = "parser.test.rs"]
mod tests;
