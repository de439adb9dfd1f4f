//! Error types for tool-call assembly.

use snafu::Snafu;
use toolcall_args::ArgsError;
use toolcall_error::ErrorExt;
use toolcall_error::Location;
use toolcall_error::StatusCode;
use toolcall_error::stack_trace_debug;
use toolcall_names::NameError;

#[stack_trace_debug]
#[derive(Snafu)]
#[snafu(visibility(pub(crate)), module)]
pub enum StreamError {
    /// The emitted name resolves to no dispatchable tool.
    #[snafu(display("Tool call {id} rejected"))]
    Resolve {
        id: String,
        source: NameError,
        #[snafu(implicit)]
        location: Location,
    },

    /// The complete argument text is not valid JSON.
    #[snafu(display("Tool call {id} ({tool}) has malformed arguments"))]
    InvalidJson {
        id: String,
        tool: String,
        source: serde_json::Error,
        #[snafu(implicit)]
        location: Location,
    },

    /// Arguments parsed but match no shape for the tool.
    #[snafu(display("Tool call {id} has an invalid payload"))]
    Payload {
        id: String,
        source: ArgsError,
        #[snafu(implicit)]
        location: Location,
    },
}

impl ErrorExt for StreamError {
    fn status_code(&self) -> StatusCode {
        match self {
            StreamError::Resolve { source, .. } => source.status_code(),
            StreamError::InvalidJson { .. } => StatusCode::InvalidJson,
            StreamError::Payload { source, .. } => source.status_code(),
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl StreamError {
    /// Id of the dropped call.
    pub fn call_id(&self) -> &str {
        match self {
            StreamError::Resolve { id, .. }
            | StreamError::InvalidJson { id, .. }
            | StreamError::Payload { id, .. } => id,
        }
    }
}

pub type Result<T> = std::result::Result<T, StreamError>;
