//! Status codes for error classification.
//!
//! Format: XX_YYY (5-digit)
//! - XX = Category (00-99)
//! - YYY = Code within category (000-999)
//!
//! Category layout:
//! - General (00-03): Success, Common, Input, IO
//! - Tool-call pipeline (10-13): Config, Tool, Edit, Artifact

use strum::AsRefStr;
use strum::EnumIter;
use strum::FromRepr;

/// Status code metadata.
#[derive(Debug, Clone, Copy)]
pub struct StatusMeta {
    pub retryable: bool,
    pub log_error: bool,
    pub category: StatusCategory,
}

/// Status code category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    /// Success (00_xxx)
    Success,
    /// Common/internal errors (01_xxx)
    Common,
    /// Parameter/validation errors (02_xxx)
    Input,
    /// IO/storage errors (03_xxx)
    IO,
    /// Configuration errors (10_xxx)
    Config,
    /// Tool-call resolution and payload errors (11_xxx)
    Tool,
    /// File edit errors (12_xxx)
    Edit,
    /// Command output artifact errors (13_xxx)
    Artifact,
}

macro_rules! define_status_codes {
    ($(
        $(#[$attr:meta])*
        $name:ident = $value:expr => {
            retryable: $retry:expr,
            log_error: $log:expr,
            category: $cat:ident $(,)?
        }
    ),* $(,)?) => {
        /// Status codes for error classification.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter, FromRepr)]
        #[repr(i32)]
        pub enum StatusCode {
            $($(#[$attr])* $name = $value,)*
        }

        impl StatusCode {
            /// Returns the metadata for this status code.
            pub const fn meta(&self) -> StatusMeta {
                match self {
                    $(Self::$name => StatusMeta {
                        retryable: $retry,
                        log_error: $log,
                        category: StatusCategory::$cat,
                    },)*
                }
            }

            pub const fn name(&self) -> &'static str {
                match self {
                    $(Self::$name => stringify!($name),)*
                }
            }
        }

        // Duplicate values fail the build.
        const _: () = {
            const CODES: &[i32] = &[$($value),*];
            const fn check_unique() {
                let mut i = 0;
                while i < CODES.len() {
                    let mut j = i + 1;
                    while j < CODES.len() {
                        if CODES[i] == CODES[j] {
                            panic!("Duplicate status code value detected");
                        }
                        j += 1;
                    }
                    i += 1;
                }
            }
            check_unique();
        };
    };
}

define_status_codes! {
    /// Operation succeeded.
    Success = 00_000 => { retryable: false, log_error: false, category: Success },

    /// Unknown error.
    Unknown = 01_000 => { retryable: false, log_error: true, category: Common },
    /// Internal error, unexpected bug.
    Internal = 01_001 => { retryable: false, log_error: true, category: Common },
    /// Operation was cancelled.
    Cancelled = 01_002 => { retryable: false, log_error: false, category: Common },

    /// Invalid arguments.
    InvalidArguments = 02_000 => { retryable: false, log_error: false, category: Input },
    /// Invalid JSON.
    InvalidJson = 02_001 => { retryable: false, log_error: false, category: Input },

    /// IO error.
    IoError = 03_000 => { retryable: false, log_error: false, category: IO },
    /// File not found.
    FileNotFound = 03_001 => { retryable: false, log_error: false, category: IO },
    /// File already exists.
    FileAlreadyExists = 03_002 => { retryable: false, log_error: false, category: IO },

    /// Invalid configuration.
    InvalidConfig = 10_000 => { retryable: false, log_error: false, category: Config },
    /// Config file could not be read or parsed.
    ConfigFileError = 10_001 => { retryable: false, log_error: false, category: Config },

    /// Tool name resolved to nothing.
    UnknownTool = 11_000 => { retryable: false, log_error: true, category: Tool },
    /// Integration tool name is not parseable.
    MalformedToolName = 11_001 => { retryable: false, log_error: true, category: Tool },
    /// Tool arguments match no known shape.
    InvalidToolPayload = 11_002 => { retryable: false, log_error: false, category: Tool },

    /// Edit would not change the file.
    NoOpEdit = 12_000 => { retryable: false, log_error: false, category: Edit },
    /// Needle not found under any strategy.
    EditNoMatch = 12_001 => { retryable: false, log_error: false, category: Edit },
    /// Needle found with a different occurrence count.
    EditCountMismatch = 12_002 => { retryable: false, log_error: false, category: Edit },

    /// Artifact identifier rejected before filesystem access.
    InvalidArtifactId = 13_000 => { retryable: false, log_error: false, category: Artifact },
    /// Artifact does not exist.
    ArtifactNotFound = 13_001 => { retryable: false, log_error: false, category: Artifact },
    /// Requested offset lies outside the artifact.
    InvalidRange = 13_002 => { retryable: false, log_error: false, category: Artifact },
    /// Writing the backing artifact failed.
    SpillFailed = 13_003 => { retryable: true, log_error: true, category: Artifact },
}

impl StatusCode {
    /// Returns true if `code` is success.
    pub fn is_success(code: i32) -> bool {
        Self::Success as i32 == code
    }

    pub const fn is_retryable(&self) -> bool {
        self.meta().retryable
    }

    pub const fn should_log_error(&self) -> bool {
        self.meta().log_error
    }

    pub const fn category(&self) -> StatusCategory {
        self.meta().category
    }

    pub fn from_i32(value: i32) -> Option<Self> {
        Self::from_repr(value)
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
#[path = "status_code.test.rs"]
mod tests;
