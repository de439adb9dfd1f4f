//! Tools compiled into the agent.

use serde::Deserialize;
use serde::Serialize;
use strum::AsRefStr;
use strum::Display;
use strum::EnumIter;
use strum::EnumString;
use strum::IntoStaticStr;

/// Canonical builtin tool names.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BuiltinTool {
    ReadFile,
    WriteToFile,
    EditFile,
    ApplyDiff,
    ExecuteCommand,
    ReadCommandOutput,
    ListFiles,
    SearchFiles,
    AskFollowupQuestion,
    AttemptCompletion,
    UpdateTodoList,
    /// Legacy explicit integration call, arguments name the server and tool.
    UseMcpTool,
    AccessMcpResource,
    NewTask,
    SwitchMode,
}

impl BuiltinTool {
    /// Exact, case-sensitive lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Tools that modify the workspace.
    pub fn is_mutating(self) -> bool {
        matches!(
            self,
            BuiltinTool::WriteToFile
                | BuiltinTool::EditFile
                | BuiltinTool::ApplyDiff
                | BuiltinTool::ExecuteCommand
        )
    }
}

#[cfg(test)]
#[path = "builtin.test.rs"]
mod tests;
