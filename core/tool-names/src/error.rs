//! Error types for tool name resolution.

use toolcall_error::ErrorExt;
use toolcall_error::Location;
use toolcall_error::StatusCode;
use toolcall_error::stack_trace_debug;
use snafu::Snafu;

#[stack_trace_debug]
#[derive(Snafu)]
#[snafu(visibility(pub(crate)), module)]
pub enum NameError {
    /// No builtin, custom, or integration tool matches.
    #[snafu(display("Unknown tool: {name}"))]
    UnknownTool {
        name: String,
        #[snafu(implicit)]
        location: Location,
    },

    /// Name uses the integration prefix but cannot be split into server and tool.
    #[snafu(display("Malformed integration tool name '{name}': {reason}"))]
    MalformedIntegrationName {
        name: String,
        reason: String,
        #[snafu(implicit)]
        location: Location,
    },
}

impl ErrorExt for NameError {
    fn status_code(&self) -> StatusCode {
        match self {
            NameError::UnknownTool { .. } => StatusCode::UnknownTool,
            NameError::MalformedIntegrationName { .. } => StatusCode::MalformedToolName,
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

pub type Result<T> = std::result::Result<T, NameError>;
