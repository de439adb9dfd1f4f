//! Streaming tool-call assembly.
//!
//! Providers deliver tool calls as index-keyed fragments: the call id, the
//! name and the JSON arguments may each arrive in any chunk, possibly split
//! across many. The pipeline is:
//!
//! ```text
//! RawToolCallChunk ──► RawChunkTracker ──► ToolCallEvent
//!                                              │
//!                                              ▼
//!                           StreamingToolCallParser ──► ParsedToolCall
//! ```
//!
//! [`ToolCallAssembler`] owns both halves for one agent turn and must be
//! reset with [`ToolCallAssembler::begin_request`] before each request.

pub mod assembler;
pub mod error;
pub mod event;
pub mod parser;
pub mod tracker;

pub use assembler::AssemblerOutput;
pub use assembler::ConsumeOutcome;
pub use assembler::ToolCallAssembler;
pub use error::Result;
pub use error::StreamError;
pub use event::FinishReason;
pub use event::ProviderEvent;
pub use event::RawToolCallChunk;
pub use event::ToolCallEvent;
pub use parser::StreamingToolCallParser;
pub use parser::ToolCallAccumulator;
pub use tracker::RawChunkTracker;
