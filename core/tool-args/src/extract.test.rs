use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn run(extractor: Extractor, value: Value, mode: ParseMode) -> Option<NativeArgs> {
    let args = ArgMap::from_value(&value).unwrap();
    extractor(&args, mode)
}

fn read(value: Value) -> ReadFileArgs {
    match run(read_file, value, ParseMode::Final) {
        Some(NativeArgs::ReadFile(args)) => args,
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_read_file_range_shapes_normalize() {
    let tuple = read(json!({"files": [{"path": "a.rs", "line_ranges": [[1, 10], [20, 30]]}]}));
    let object = read(json!({
        "files": [{"path": "a.rs", "line_ranges": [{"start": 1, "end": 10}, {"start": 20, "end": 30}]}]
    }));
    let textual = read(json!({"files": [{"path": "a.rs", "line_ranges": ["1-10", "20 - 30"]}]}));

    let expected = vec![FileEntry {
        path: "a.rs".to_string(),
        line_ranges: vec![LineRange { start: 1, end: 10 }, LineRange { start: 20, end: 30 }],
    }];
    assert_eq!(tuple.files, expected);
    assert_eq!(object.files, expected);
    assert_eq!(textual.files, expected);

    assert!(!tuple.legacy_format);
    assert!(!object.legacy_format);
    assert!(textual.legacy_format);
}

#[test]
fn test_read_file_legacy_top_level_path() {
    let args = read(json!({"path": "src/lib.rs", "start_line": "5", "end_line": 9}));
    assert!(args.legacy_format);
    assert_eq!(
        args.files,
        vec![FileEntry {
            path: "src/lib.rs".to_string(),
            line_ranges: vec![LineRange { start: 5, end: 9 }],
        }]
    );
}

#[test]
fn test_read_file_double_encoded_files() {
    let args = read(json!({"files": "[{\"path\": \"x.txt\"}]"}));
    assert_eq!(args.files.len(), 1);
    assert!(args.files[0].line_ranges.is_empty());
}

#[test]
fn test_read_file_final_rejects_bad_ranges() {
    for value in [
        json!({"files": [{"path": "a", "line_ranges": [[10, 1]]}]}),
        json!({"files": [{"path": "a", "line_ranges": [[0, 3]]}]}),
        json!({"files": [{"path": "a", "line_ranges": ["ten-twenty"]}]}),
        json!({"files": [{"line_ranges": [[1, 2]]}]}),
        json!({"files": []}),
        json!({"path": "a", "start_line": 3}),
    ] {
        assert!(
            run(read_file, value.clone(), ParseMode::Final).is_none(),
            "{value} should be rejected"
        );
    }
}

#[test]
fn test_read_file_partial_skips_incomplete_entries() {
    let value = json!({"files": [{"path": "a.rs"}, {"path": "b"}, {"line_ranges": []}]});
    match run(read_file, value, ParseMode::Partial) {
        Some(NativeArgs::ReadFile(args)) => assert_eq!(args.files.len(), 2),
        other => panic!("unexpected {other:?}"),
    }
    assert!(run(read_file, json!({"files": [{}]}), ParseMode::Partial).is_none());
}

#[test]
fn test_edit_file_partial_and_final() {
    let streaming = json!({"file_path": "a.rs", "old_string": "fo"});
    assert_eq!(
        run(edit_file, streaming.clone(), ParseMode::Partial),
        Some(NativeArgs::EditFile(EditFileArgs {
            file_path: "a.rs".to_string(),
            old_string: "fo".to_string(),
            new_string: String::new(),
            expected_replacements: None,
        }))
    );
    assert!(run(edit_file, streaming, ParseMode::Final).is_none());

    let complete = json!({
        "path": "a.rs",
        "old_string": "",
        "new_string": "x",
        "expected_replacements": "2"
    });
    match run(edit_file, complete, ParseMode::Final) {
        Some(NativeArgs::EditFile(args)) => {
            assert_eq!(args.file_path, "a.rs");
            assert_eq!(args.old_string, "");
            assert_eq!(args.expected_replacements, Some(2));
        }
        other => panic!("unexpected {other:?}"),
    }

    let zero = json!({"file_path": "a", "old_string": "a", "new_string": "b", "expected_replacements": 0});
    assert!(run(edit_file, zero, ParseMode::Final).is_none());
}

#[test]
fn test_gating_field_required_in_both_modes() {
    assert!(run(write_to_file, json!({"content": "x"}), ParseMode::Partial).is_none());
    assert!(run(execute_command, json!({"command": ""}), ParseMode::Partial).is_none());
    assert!(run(read_command_output, json!({}), ParseMode::Final).is_none());
}

#[test]
fn test_list_files_bool_coercion() {
    assert_eq!(
        run(list_files, json!({"path": ".", "recursive": "true"}), ParseMode::Final),
        Some(NativeArgs::ListFiles(ListFilesArgs {
            path: ".".to_string(),
            recursive: true,
        }))
    );
    assert!(run(list_files, json!({"path": ".", "recursive": "sometimes"}), ParseMode::Final).is_none());
    assert!(run(list_files, json!({"path": ".", "recursive": "sometimes"}), ParseMode::Partial).is_some());
}

#[test]
fn test_read_command_output_fields() {
    let value = json!({"artifact_id": "cmd-12.txt", "search": "error", "offset": "100", "limit": 500});
    assert_eq!(
        run(read_command_output, value, ParseMode::Final),
        Some(NativeArgs::ReadCommandOutput(ReadCommandOutputArgs {
            artifact_id: "cmd-12.txt".to_string(),
            search: Some("error".to_string()),
            offset: Some(100),
            limit: Some(500),
        }))
    );
    let negative = json!({"artifact_id": "cmd-1.txt", "offset": -1});
    assert!(run(read_command_output, negative, ParseMode::Final).is_none());
}

#[test]
fn test_followup_suggestion_shapes() {
    let value = json!({
        "question": "Which?",
        "follow_up": "[\"a\", {\"text\": \"b\"}, {\"answer\": \"c\"}, 4]"
    });
    match run(ask_followup_question, value, ParseMode::Final) {
        Some(NativeArgs::AskFollowupQuestion(args)) => {
            assert_eq!(args.follow_up, vec!["a", "b", "c"]);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_update_todo_list_shapes() {
    let markdown = json!({"todos": "[x] done\n[ ] next"});
    let structured = json!({"todos": [
        {"content": "done", "status": "completed"},
        {"content": "next", "status": "pending"}
    ]});
    let expected = Some(NativeArgs::UpdateTodoList(UpdateTodoListArgs {
        todos: "[x] done\n[ ] next".to_string(),
    }));
    assert_eq!(run(update_todo_list, markdown, ParseMode::Final), expected);
    assert_eq!(run(update_todo_list, structured, ParseMode::Final), expected);
}

#[test]
fn test_use_mcp_tool_arguments() {
    let value = json!({"server_name": "gh", "tool_name": "search", "arguments": "{\"q\": \"rust\"}"});
    match run(use_mcp_tool, value, ParseMode::Final) {
        Some(NativeArgs::UseMcpTool(args)) => {
            assert_eq!(args.arguments.get("q"), Some(&json!("rust")));
        }
        other => panic!("unexpected {other:?}"),
    }
    let broken = json!({"server_name": "gh", "tool_name": "search", "arguments": "{\"q\": "});
    assert!(run(use_mcp_tool, broken.clone(), ParseMode::Final).is_none());
    assert!(run(use_mcp_tool, broken, ParseMode::Partial).is_some());
}
