//! Error types for output capture and artifact access.

use std::path::PathBuf;

use snafu::Snafu;
use toolcall_error::ErrorExt;
use toolcall_error::Location;
use toolcall_error::StatusCode;
use toolcall_error::stack_trace_debug;

#[stack_trace_debug]
#[derive(Snafu)]
#[snafu(visibility(pub(crate)), module)]
pub enum OutputError {
    /// Rejected before any filesystem access.
    #[snafu(display("Invalid artifact id '{id}': expected cmd-<number>.txt"))]
    InvalidArtifactId {
        id: String,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("Artifact {id} not found"))]
    ArtifactNotFound {
        id: String,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("Offset {offset} is outside artifact {id} ({size} bytes)"))]
    InvalidRange {
        id: String,
        offset: u64,
        size: u64,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("I/O error on {}", path.display()))]
    Io {
        path: PathBuf,
        source: std::io::Error,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("Failed to spill output to {}", path.display()))]
    Spill {
        path: PathBuf,
        source: std::io::Error,
        #[snafu(implicit)]
        location: Location,
    },
}

impl ErrorExt for OutputError {
    fn status_code(&self) -> StatusCode {
        match self {
            OutputError::InvalidArtifactId { .. } => StatusCode::InvalidArtifactId,
            OutputError::ArtifactNotFound { .. } => StatusCode::ArtifactNotFound,
            OutputError::InvalidRange { .. } => StatusCode::InvalidRange,
            OutputError::Io { .. } => StatusCode::IoError,
            OutputError::Spill { .. } => StatusCode::SpillFailed,
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

pub type Result<T> = std::result::Result<T, OutputError>;
