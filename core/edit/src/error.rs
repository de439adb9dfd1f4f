//! Error types for the edit engine.

use std::fmt;

use snafu::Snafu;
use toolcall_error::ErrorExt;
use toolcall_error::Location;
use toolcall_error::StatusCode;
use toolcall_error::stack_trace_debug;
use toolcall_file_encoding::EncodingError;

/// Occurrences of the needle found by each strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchCounts {
    pub exact: usize,
    pub whitespace_tolerant: usize,
    pub token_based: usize,
}

impl MatchCounts {
    pub fn is_zero(&self) -> bool {
        self.exact == 0 && self.whitespace_tolerant == 0 && self.token_based == 0
    }
}

impl fmt::Display for MatchCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "exact={}, whitespace-tolerant={}, token-based={}",
            self.exact, self.whitespace_tolerant, self.token_based
        )
    }
}

#[stack_trace_debug]
#[derive(Snafu)]
#[snafu(visibility(pub(crate)), module)]
pub enum EditError {
    #[snafu(display("old_string and new_string are identical after line ending normalization"))]
    NoOp {
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("old_string not found in file ({counts})"))]
    NoMatch {
        counts: MatchCounts,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display(
        "Expected {expected} occurrence(s) of old_string but no strategy matched that count ({counts})"
    ))]
    CountMismatch {
        expected: usize,
        counts: MatchCounts,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("File already exists; an empty old_string only creates new files"))]
    FileAlreadyExists {
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("File does not exist; use an empty old_string to create it"))]
    FileNotFound {
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("expected_replacements must be at least 1, got {value}"))]
    InvalidExpectedReplacements {
        value: i64,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("Failed to read {path}"))]
    ReadFile {
        path: String,
        source: EncodingError,
        #[snafu(implicit)]
        location: Location,
    },
}

impl ErrorExt for EditError {
    fn status_code(&self) -> StatusCode {
        match self {
            EditError::NoOp { .. } => StatusCode::NoOpEdit,
            EditError::NoMatch { .. } => StatusCode::EditNoMatch,
            EditError::CountMismatch { .. } => StatusCode::EditCountMismatch,
            EditError::FileAlreadyExists { .. } => StatusCode::FileAlreadyExists,
            EditError::FileNotFound { .. } => StatusCode::FileNotFound,
            EditError::InvalidExpectedReplacements { .. } => StatusCode::InvalidArguments,
            EditError::ReadFile { .. } => StatusCode::IoError,
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

pub type Result<T> = std::result::Result<T, EditError>;
