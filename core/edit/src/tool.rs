//! `edit_file` tool boundary.

use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;

use snafu::ResultExt;
use toolcall_args::EditFileArgs;
use toolcall_config::ToolCallConfig;
use toolcall_file_encoding::EncodingError;
use toolcall_file_encoding::TextFile;
use tracing::debug;
use tracing::warn;

use crate::engine::EditPlan;
use crate::engine::plan_edit;
use crate::error::EditError;
use crate::error::Result;
use crate::error::edit_error;
use crate::failure_tracker::EditFailureTracker;
use crate::report::failure_message;
use crate::report::success_message;

/// What the caller should do with an edit request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditToolOutput {
    /// Write `bytes` to `path`.
    Applied {
        path: PathBuf,
        bytes: Vec<u8>,
        created: bool,
        message: String,
    },
    /// Return `message` to the model. `escalate` asks the caller to also
    /// show the failure to the user.
    Failed {
        path: PathBuf,
        message: String,
        escalate: bool,
    },
}

impl EditToolOutput {
    pub fn message(&self) -> &str {
        match self {
            EditToolOutput::Applied { message, .. } | EditToolOutput::Failed { message, .. } => {
                message
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EditFileTool {
    failures: EditFailureTracker,
}

impl EditFileTool {
    pub fn new(config: &ToolCallConfig) -> Self {
        Self {
            failures: EditFailureTracker::from_config(config),
        }
    }

    pub fn failures(&self) -> &EditFailureTracker {
        &self.failures
    }

    /// Compute the edit for `args` relative to `cwd`. Nothing is written.
    pub async fn prepare(&mut self, cwd: &Path, args: &EditFileArgs) -> EditToolOutput {
        let path = cwd.join(&args.file_path);
        let file = match read_existing(&path).await {
            Ok(file) => file,
            Err(err) => return self.fail(path, &args.file_path, &err, None, &args.old_string),
        };
        let content = file.as_ref().map(|f| f.content.as_str());

        let planned = expected_replacements(args).and_then(|expected| {
            plan_edit(content, &args.old_string, &args.new_string, expected)
        });
        match planned {
            Ok(EditPlan::Create { content: created }) => {
                self.failures.record_success(&path);
                EditToolOutput::Applied {
                    message: format!("Created new file: {}", args.file_path),
                    bytes: created.into_bytes(),
                    created: true,
                    path,
                }
            }
            Ok(EditPlan::Replace(result)) => {
                self.failures.record_success(&path);
                let before = content.unwrap_or_default();
                let after = result.applied_content;
                let message = success_message(
                    &args.file_path,
                    before,
                    &after,
                    result.strategy,
                    result.occurrence_count,
                );
                let bytes = match &file {
                    Some(file) => file.encode(&after),
                    None => after.into_bytes(),
                };
                EditToolOutput::Applied {
                    path,
                    bytes,
                    created: false,
                    message,
                }
            }
            Err(err) => self.fail(path, &args.file_path, &err, content, &args.old_string),
        }
    }

    fn fail(
        &mut self,
        path: PathBuf,
        display_path: &str,
        err: &EditError,
        content: Option<&str>,
        old_string: &str,
    ) -> EditToolOutput {
        let escalate = self.failures.record_failure(&path);
        if escalate {
            warn!(path = %display_path, error = %err, "repeated edit failure");
        } else {
            debug!(path = %display_path, error = %err, "edit failed");
        }
        EditToolOutput::Failed {
            message: failure_message(display_path, err, content, old_string),
            path,
            escalate,
        }
    }
}

fn expected_replacements(args: &EditFileArgs) -> Result<usize> {
    match args.expected_replacements {
        None => Ok(1),
        Some(value) if value >= 1 => Ok(value as usize),
        Some(value) => edit_error::InvalidExpectedReplacementsSnafu { value }.fail(),
    }
}

async fn read_existing(path: &Path) -> Result<Option<TextFile>> {
    match TextFile::read(path).await {
        Ok(file) => Ok(Some(file)),
        Err(EncodingError::Io(err)) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err).context(edit_error::ReadFileSnafu {
            path: path.display().to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "tool.test.rs"]
mod tests;
