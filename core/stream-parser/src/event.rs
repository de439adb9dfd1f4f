//! Stream input and output shapes.

use serde::Deserialize;
use serde::Serialize;

/// One provider fragment of a tool call, keyed by its position in the response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawToolCallChunk {
    pub index: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<String>,
}

impl RawToolCallChunk {
    pub fn new(index: i64) -> Self {
        Self {
            index,
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_arguments(mut self, arguments: impl Into<String>) -> Self {
        self.arguments = Some(arguments.into());
        self
    }
}

/// Why the provider ended the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// The response ended to let the caller run its tool calls.
    ToolCalls,
    /// Any other stop condition (end of turn, length, filter).
    Other,
}

impl FinishReason {
    /// Map a provider's raw finish reason string.
    pub fn from_provider(raw: &str) -> Self {
        match raw {
            "tool_calls" | "tool_use" | "function_call" => FinishReason::ToolCalls,
            _ => FinishReason::Other,
        }
    }
}

/// Item of the provider stream consumed by the assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderEvent {
    Chunk(RawToolCallChunk),
    Finish(FinishReason),
}

/// Normalized lifecycle events, one ordered sequence per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCallEvent {
    Start { index: i64, id: String, name: String },
    Delta { index: i64, id: String, delta: String },
    End { index: i64, id: String },
}

impl ToolCallEvent {
    pub fn id(&self) -> &str {
        match self {
            ToolCallEvent::Start { id, .. }
            | ToolCallEvent::Delta { id, .. }
            | ToolCallEvent::End { id, .. } => id,
        }
    }
}
