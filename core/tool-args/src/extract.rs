//! Builtin extractors.
//!
//! The first field read with `?` gates the record: without it there is
//! nothing worth showing even while streaming.

use serde_json::Map;
use serde_json::Value;
use toolcall_names::BuiltinTool;

use crate::coerce::ArgMap;
use crate::coerce::value_to_int;
use crate::native::*;
use crate::registry::Extractor;
use crate::registry::ParseMode;

pub(crate) const BUILTIN_EXTRACTORS: &[(BuiltinTool, Extractor)] = &[
    (BuiltinTool::ReadFile, read_file),
    (BuiltinTool::WriteToFile, write_to_file),
    (BuiltinTool::EditFile, edit_file),
    (BuiltinTool::ApplyDiff, apply_diff),
    (BuiltinTool::ExecuteCommand, execute_command),
    (BuiltinTool::ReadCommandOutput, read_command_output),
    (BuiltinTool::ListFiles, list_files),
    (BuiltinTool::SearchFiles, search_files),
    (BuiltinTool::AskFollowupQuestion, ask_followup_question),
    (BuiltinTool::AttemptCompletion, attempt_completion),
    (BuiltinTool::UpdateTodoList, update_todo_list),
    (BuiltinTool::UseMcpTool, use_mcp_tool),
    (BuiltinTool::AccessMcpResource, access_mcp_resource),
    (BuiltinTool::NewTask, new_task),
    (BuiltinTool::SwitchMode, switch_mode),
];

/// Required once final, empty while streaming.
fn text(args: &ArgMap<'_>, key: &str, mode: ParseMode) -> Option<String> {
    match args.string(key) {
        Some(value) => Some(value),
        None if mode.is_final() => None,
        None => Some(String::new()),
    }
}

/// Optional integer. A present but unusable value rejects the final record.
fn opt_int(args: &ArgMap<'_>, key: &str, mode: ParseMode) -> Option<Option<i64>> {
    match args.int(key) {
        Some(value) => Some(Some(value)),
        None if mode.is_final() && args.has(key) => None,
        None => Some(None),
    }
}

fn opt_bool(args: &ArgMap<'_>, key: &str, mode: ParseMode) -> Option<Option<bool>> {
    match args.bool(key) {
        Some(value) => Some(Some(value)),
        None if mode.is_final() && args.has(key) => None,
        None => Some(None),
    }
}

fn read_file(args: &ArgMap<'_>, mode: ParseMode) -> Option<NativeArgs> {
    let mut legacy = false;
    let mut files = Vec::new();

    if let Some(entries) = args.array("files") {
        for entry in entries.iter() {
            let parsed = ArgMap::from_value(entry)
                .and_then(|entry| file_entry(&entry, mode, &mut legacy));
            match parsed {
                Some(file) => files.push(file),
                None if mode.is_final() => return None,
                None => {}
            }
        }
    } else if args.has("path") {
        legacy = true;
        files.push(file_entry(args, mode, &mut legacy)?);
    }

    if files.is_empty() {
        return None;
    }
    Some(NativeArgs::ReadFile(ReadFileArgs {
        files,
        legacy_format: legacy,
    }))
}

fn file_entry(entry: &ArgMap<'_>, mode: ParseMode, legacy: &mut bool) -> Option<FileEntry> {
    let path = entry.non_empty_string("path")?;
    let mut line_ranges = Vec::new();

    if let Some(ranges) = entry.array("line_ranges") {
        for raw in ranges.iter() {
            match line_range(raw, legacy) {
                Some(range) => line_ranges.push(range),
                None if mode.is_final() => return None,
                None => {}
            }
        }
    } else if entry.has("start_line") || entry.has("end_line") {
        *legacy = true;
        match (entry.int("start_line"), entry.int("end_line")) {
            (Some(start), Some(end)) => match LineRange::new(start, end) {
                Some(range) => line_ranges.push(range),
                None if mode.is_final() => return None,
                None => {}
            },
            _ if mode.is_final() => return None,
            _ => {}
        }
    }

    Some(FileEntry { path, line_ranges })
}

/// `[a, b]`, `{"start": a, "end": b}`, or the legacy `"a-b"`.
fn line_range(raw: &Value, legacy: &mut bool) -> Option<LineRange> {
    match raw {
        Value::Array(pair) => match pair.as_slice() {
            [start, end] => LineRange::new(value_to_int(start)?, value_to_int(end)?),
            _ => None,
        },
        Value::Object(_) => {
            let range = ArgMap::from_value(raw)?;
            LineRange::new(range.int("start")?, range.int("end")?)
        }
        Value::String(text) => {
            *legacy = true;
            let (start, end) = text.split_once('-')?;
            LineRange::new(start.trim().parse().ok()?, end.trim().parse().ok()?)
        }
        _ => None,
    }
}

fn write_to_file(args: &ArgMap<'_>, mode: ParseMode) -> Option<NativeArgs> {
    Some(NativeArgs::WriteToFile(WriteToFileArgs {
        path: args.non_empty_string("path")?,
        content: text(args, "content", mode)?,
        line_count: opt_int(args, "line_count", mode)?,
    }))
}

fn edit_file(args: &ArgMap<'_>, mode: ParseMode) -> Option<NativeArgs> {
    let file_path = args
        .non_empty_string("file_path")
        .or_else(|| args.non_empty_string("path"))?;
    let expected_replacements = opt_int(args, "expected_replacements", mode)?;
    if mode.is_final() && expected_replacements.is_some_and(|n| n < 1) {
        return None;
    }
    Some(NativeArgs::EditFile(EditFileArgs {
        file_path,
        old_string: text(args, "old_string", mode)?,
        new_string: text(args, "new_string", mode)?,
        expected_replacements,
    }))
}

fn apply_diff(args: &ArgMap<'_>, mode: ParseMode) -> Option<NativeArgs> {
    Some(NativeArgs::ApplyDiff(ApplyDiffArgs {
        path: args.non_empty_string("path")?,
        diff: text(args, "diff", mode)?,
    }))
}

fn execute_command(args: &ArgMap<'_>, mode: ParseMode) -> Option<NativeArgs> {
    Some(NativeArgs::ExecuteCommand(ExecuteCommandArgs {
        command: args.non_empty_string("command")?,
        cwd: args.non_empty_string("cwd"),
        timeout: opt_int(args, "timeout", mode)?,
    }))
}

fn read_command_output(args: &ArgMap<'_>, mode: ParseMode) -> Option<NativeArgs> {
    let artifact_id = args.non_empty_string("artifact_id")?;
    let offset = opt_int(args, "offset", mode)?;
    let limit = opt_int(args, "limit", mode)?;
    if mode.is_final() && (offset.is_some_and(|o| o < 0) || limit.is_some_and(|l| l <= 0)) {
        return None;
    }
    Some(NativeArgs::ReadCommandOutput(ReadCommandOutputArgs {
        artifact_id,
        search: args.non_empty_string("search"),
        offset,
        limit,
    }))
}

fn list_files(args: &ArgMap<'_>, mode: ParseMode) -> Option<NativeArgs> {
    Some(NativeArgs::ListFiles(ListFilesArgs {
        path: args.non_empty_string("path")?,
        recursive: opt_bool(args, "recursive", mode)?.unwrap_or(false),
    }))
}

fn search_files(args: &ArgMap<'_>, mode: ParseMode) -> Option<NativeArgs> {
    Some(NativeArgs::SearchFiles(SearchFilesArgs {
        path: args.non_empty_string("path")?,
        regex: text(args, "regex", mode)?,
        file_pattern: args.non_empty_string("file_pattern"),
    }))
}

fn ask_followup_question(args: &ArgMap<'_>, _mode: ParseMode) -> Option<NativeArgs> {
    let question = args.non_empty_string("question")?;
    let follow_up = args
        .array("follow_up")
        .map(|items| items.iter().filter_map(suggestion_text).collect())
        .unwrap_or_default();
    Some(NativeArgs::AskFollowupQuestion(AskFollowupQuestionArgs {
        question,
        follow_up,
    }))
}

// Suggestions arrive as plain strings or as `{"text": ...}` objects.
fn suggestion_text(item: &Value) -> Option<String> {
    match item {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => map
            .get("text")
            .or_else(|| map.get("answer"))
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}

fn attempt_completion(args: &ArgMap<'_>, _mode: ParseMode) -> Option<NativeArgs> {
    Some(NativeArgs::AttemptCompletion(AttemptCompletionArgs {
        result: args.string("result")?,
    }))
}

fn update_todo_list(args: &ArgMap<'_>, _mode: ParseMode) -> Option<NativeArgs> {
    // Markdown checklists also start with `[`, so only a decodable array
    // is treated as structured.
    let todos = match args.array("todos") {
        Some(items) => items
            .iter()
            .filter_map(todo_line)
            .collect::<Vec<_>>()
            .join("\n"),
        None => args.string("todos")?,
    };
    Some(NativeArgs::UpdateTodoList(UpdateTodoListArgs { todos }))
}

fn todo_line(item: &Value) -> Option<String> {
    match item {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => {
            let content = map
                .get("content")
                .or_else(|| map.get("text"))
                .and_then(Value::as_str)?;
            let mark = match map.get("status").and_then(Value::as_str) {
                Some("completed") => "x",
                Some("in_progress") => "-",
                _ => " ",
            };
            Some(format!("[{mark}] {content}"))
        }
        _ => None,
    }
}

fn use_mcp_tool(args: &ArgMap<'_>, mode: ParseMode) -> Option<NativeArgs> {
    let server_name = args.non_empty_string("server_name")?;
    let tool_name = text(args, "tool_name", mode)?;
    let arguments = match args.object("arguments") {
        Some(map) => map.into_owned(),
        None if mode.is_final() && args.has("arguments") => return None,
        None => Map::new(),
    };
    Some(NativeArgs::UseMcpTool(UseMcpToolArgs {
        server_name,
        tool_name,
        arguments,
    }))
}

fn access_mcp_resource(args: &ArgMap<'_>, mode: ParseMode) -> Option<NativeArgs> {
    Some(NativeArgs::AccessMcpResource(AccessMcpResourceArgs {
        server_name: args.non_empty_string("server_name")?,
        uri: text(args, "uri", mode)?,
    }))
}

fn new_task(args: &ArgMap<'_>, mode: ParseMode) -> Option<NativeArgs> {
    Some(NativeArgs::NewTask(NewTaskArgs {
        mode: args.non_empty_string("mode")?,
        message: text(args, "message", mode)?,
        todos: args.non_empty_string("todos"),
    }))
}

fn switch_mode(args: &ArgMap<'_>, _mode: ParseMode) -> Option<NativeArgs> {
    Some(NativeArgs::SwitchMode(SwitchModeArgs {
        mode_slug: args.non_empty_string("mode_slug")?,
        reason: args.non_empty_string("reason"),
    }))
}

#[cfg(test)]
#[path = "extract.test.rs"]
mod tests;
