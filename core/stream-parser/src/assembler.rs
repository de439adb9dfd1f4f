//! Per-turn owner of the tracker and the parser.

use std::sync::Arc;

use futures::Stream;
use futures::StreamExt;
use tokio_util::sync::CancellationToken;
use toolcall_args::ParsedToolCall;
use toolcall_args::ToolArgMapper;
use toolcall_config::ToolCallConfig;
use toolcall_names::ToolNameResolver;
use tracing::debug;
use tracing::warn;

use crate::error::StreamError;
use crate::event::FinishReason;
use crate::event::ProviderEvent;
use crate::event::RawToolCallChunk;
use crate::event::ToolCallEvent;
use crate::parser::StreamingToolCallParser;
use crate::tracker::RawChunkTracker;

/// What the assembler hands to the dispatcher.
#[derive(Debug)]
pub enum AssemblerOutput {
    /// Advisory snapshot of a call still streaming. Never act on it.
    Partial(ParsedToolCall),
    /// The single authoritative record for a call.
    Complete(ParsedToolCall),
    /// The call was dropped.
    Failed(StreamError),
}

impl AssemblerOutput {
    pub fn completed(&self) -> Option<&ParsedToolCall> {
        match self {
            AssemblerOutput::Complete(call) => Some(call),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct ConsumeOutcome {
    pub outputs: Vec<AssemblerOutput>,
    /// Consumption stopped on the cancellation token.
    pub cancelled: bool,
}

impl ConsumeOutcome {
    pub fn completed(&self) -> impl Iterator<Item = &ParsedToolCall> {
        self.outputs.iter().filter_map(AssemblerOutput::completed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &StreamError> {
        self.outputs.iter().filter_map(|output| match output {
            AssemblerOutput::Failed(err) => Some(err),
            _ => None,
        })
    }
}

/// Assembles one agent turn's tool calls.
///
/// State is not request-scoped by construction: call
/// [`begin_request`](Self::begin_request) before every request, or ids
/// finalized in the previous turn will suppress calls in the next.
#[derive(Debug)]
pub struct ToolCallAssembler {
    tracker: RawChunkTracker,
    parser: StreamingToolCallParser,
}

impl ToolCallAssembler {
    pub fn new(resolver: Arc<ToolNameResolver>, mapper: Arc<ToolArgMapper>) -> Self {
        Self {
            tracker: RawChunkTracker::new(),
            parser: StreamingToolCallParser::new(resolver, mapper),
        }
    }

    pub fn from_config(config: &ToolCallConfig) -> Self {
        let resolver = ToolNameResolver::new()
            .with_max_integration_name_length(config.integration_name_limit());
        Self::new(Arc::new(resolver), Arc::new(ToolArgMapper::default()))
    }

    pub fn begin_request(&mut self) {
        self.tracker.clear();
        self.parser.clear();
    }

    pub fn push_chunk(&mut self, chunk: &RawToolCallChunk) -> Vec<AssemblerOutput> {
        let events = self.tracker.process_chunk(chunk);
        self.handle(events)
    }

    pub fn finish(&mut self, reason: FinishReason) -> Vec<AssemblerOutput> {
        let events = self.tracker.process_finish(reason);
        self.handle(events)
    }

    /// Must run once per provider stream, after the last chunk.
    pub fn end_stream(&mut self) -> Vec<AssemblerOutput> {
        let events = self.tracker.finalize();
        self.handle(events)
    }

    /// Drain a provider stream until it ends or `cancel` fires.
    ///
    /// On cancellation the stream is not finalized; pending state is
    /// dropped by the next [`begin_request`](Self::begin_request).
    pub async fn consume<S>(&mut self, stream: S, cancel: &CancellationToken) -> ConsumeOutcome
    where
        S: Stream<Item = ProviderEvent>,
    {
        let mut stream = std::pin::pin!(stream);
        let mut outcome = ConsumeOutcome::default();
        loop {
            let event = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    debug!(pending = self.parser.len(), "tool call stream cancelled");
                    outcome.cancelled = true;
                    break;
                }
                event = stream.next() => event,
            };
            let outputs = match event {
                Some(ProviderEvent::Chunk(chunk)) => self.push_chunk(&chunk),
                Some(ProviderEvent::Finish(reason)) => self.finish(reason),
                None => {
                    outcome.outputs.extend(self.end_stream());
                    break;
                }
            };
            outcome.outputs.extend(outputs);
        }
        outcome
    }

    fn handle(&mut self, events: Vec<ToolCallEvent>) -> Vec<AssemblerOutput> {
        let mut outputs = Vec::new();
        for event in events {
            match event {
                ToolCallEvent::Start { id, name, .. } => {
                    self.parser.start(&id, &name);
                }
                ToolCallEvent::Delta { id, delta, .. } => {
                    if let Some(call) = self.parser.append_chunk(&id, &delta) {
                        outputs.push(AssemblerOutput::Partial(call));
                    }
                }
                ToolCallEvent::End { id, .. } => match self.parser.finalize(&id) {
                    Ok(Some(call)) => outputs.push(AssemblerOutput::Complete(call)),
                    Ok(None) => {}
                    Err(err) => {
                        warn!(call_id = %id, error = ?err, "dropping tool call");
                        outputs.push(AssemblerOutput::Failed(err));
                    }
                },
            }
        }
        outputs
    }
}

#[cfg(test)]
#[path = "assembler.test.rs"]
mod tests;
