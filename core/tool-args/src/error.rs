//! Error types for argument extraction.

use toolcall_error::ErrorExt;
use toolcall_error::Location;
use toolcall_error::StatusCode;
use toolcall_error::stack_trace_debug;
use snafu::Snafu;

#[stack_trace_debug]
#[derive(Snafu)]
#[snafu(visibility(pub(crate)), module)]
pub enum ArgsError {
    /// Arguments match no known shape for the tool.
    #[snafu(display("Invalid arguments for {tool}: {message}"))]
    InvalidPayload {
        tool: String,
        message: String,
        #[snafu(implicit)]
        location: Location,
    },

    /// No extractor is registered for a builtin tool.
    #[snafu(display("No argument extractor registered for {tool}"))]
    MissingExtractor {
        tool: String,
        #[snafu(implicit)]
        location: Location,
    },
}

impl ErrorExt for ArgsError {
    fn status_code(&self) -> StatusCode {
        match self {
            ArgsError::InvalidPayload { .. } => StatusCode::InvalidToolPayload,
            ArgsError::MissingExtractor { .. } => StatusCode::Internal,
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

pub type Result<T> = std::result::Result<T, ArgsError>;
