//! Search-and-replace file edits that survive model formatting drift.
//!
//! [`apply_replacement`] tries three strategies in a fixed order
//! (exact, whitespace-tolerant, token-based) and accepts the first whose
//! occurrence count equals the expected replacement count. [`EditFileTool`]
//! wraps the engine at the tool boundary: it reads the file, plans the edit
//! and renders either the bytes to write or a diagnosable failure. Writing
//! is left to the caller.

mod correction;
pub mod engine;
pub mod error;
pub mod failure_tracker;
pub mod report;
pub mod strategy;
pub mod tool;

pub use correction::pre_correct_escaping;
pub use correction::unescape_over_escaped;
pub use engine::EditMatchResult;
pub use engine::EditPlan;
pub use engine::apply_replacement;
pub use engine::plan_edit;
pub use error::EditError;
pub use error::MatchCounts;
pub use error::Result;
pub use failure_tracker::EditFailureTracker;
pub use strategy::MATCH_ORDER;
pub use strategy::MatchStrategy;
pub use tool::EditFileTool;
pub use tool::EditToolOutput;
