//! Typed argument records, one per builtin tool.

use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

/// Inclusive, 1-based line range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineRange {
    pub start: i64,
    pub end: i64,
}

impl LineRange {
    pub fn new(start: i64, end: i64) -> Option<Self> {
        (start >= 1 && end >= start).then_some(Self { start, end })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub path: String,
    pub line_ranges: Vec<LineRange>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadFileArgs {
    pub files: Vec<FileEntry>,
    /// Set when any superseded shape (top-level `path`, `start_line`,
    /// textual `"a-b"` ranges) was accepted.
    #[serde(skip)]
    pub legacy_format: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteToFileArgs {
    pub path: String,
    pub content: String,
    pub line_count: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditFileArgs {
    pub file_path: String,
    pub old_string: String,
    pub new_string: String,
    pub expected_replacements: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplyDiffArgs {
    pub path: String,
    pub diff: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecuteCommandArgs {
    pub command: String,
    pub cwd: Option<String>,
    /// Seconds.
    pub timeout: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadCommandOutputArgs {
    pub artifact_id: String,
    pub search: Option<String>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListFilesArgs {
    pub path: String,
    pub recursive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchFilesArgs {
    pub path: String,
    pub regex: String,
    pub file_pattern: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AskFollowupQuestionArgs {
    pub question: String,
    pub follow_up: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttemptCompletionArgs {
    pub result: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateTodoListArgs {
    /// Markdown checklist, one item per line.
    pub todos: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UseMcpToolArgs {
    pub server_name: String,
    pub tool_name: String,
    pub arguments: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessMcpResourceArgs {
    pub server_name: String,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTaskArgs {
    pub mode: String,
    pub message: String,
    pub todos: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwitchModeArgs {
    pub mode_slug: String,
    pub reason: Option<String>,
}

/// Typed arguments for a resolved tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tool", content = "args", rename_all = "snake_case")]
pub enum NativeArgs {
    ReadFile(ReadFileArgs),
    WriteToFile(WriteToFileArgs),
    EditFile(EditFileArgs),
    ApplyDiff(ApplyDiffArgs),
    ExecuteCommand(ExecuteCommandArgs),
    ReadCommandOutput(ReadCommandOutputArgs),
    ListFiles(ListFilesArgs),
    SearchFiles(SearchFilesArgs),
    AskFollowupQuestion(AskFollowupQuestionArgs),
    AttemptCompletion(AttemptCompletionArgs),
    UpdateTodoList(UpdateTodoListArgs),
    UseMcpTool(UseMcpToolArgs),
    AccessMcpResource(AccessMcpResourceArgs),
    NewTask(NewTaskArgs),
    SwitchMode(SwitchModeArgs),
    /// Pass-through for custom tools without a dedicated extractor.
    Custom(Value),
}

impl NativeArgs {
    pub fn used_legacy_format(&self) -> bool {
        matches!(self, NativeArgs::ReadFile(args) if args.legacy_format)
    }
}
