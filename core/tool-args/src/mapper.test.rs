use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use toolcall_names::BuiltinTool;
use toolcall_names::ToolNameResolver;

use crate::ArgsError;
use crate::native::EditFileArgs;

fn resolve(name: &str) -> ResolvedName {
    let mut resolver = ToolNameResolver::new();
    resolver.register_custom("deploy");
    resolver.resolve(name).unwrap()
}

#[test]
fn test_final_builtin_record() {
    let mapper = ToolArgMapper::default();
    let args = json!({"file_path": "a.rs", "old_string": "x", "new_string": "y", "note": null});
    let call = mapper
        .map_final("call_1", "str_replace", &resolve("str_replace"), &args)
        .unwrap();
    let ParsedToolCall::Tool(tool) = call else {
        panic!("expected builtin");
    };
    assert_eq!(tool.name, "edit_file");
    assert_eq!(tool.builtin(), Some(BuiltinTool::EditFile));
    assert_eq!(tool.original_name.as_deref(), Some("str_replace"));
    assert!(!tool.partial);
    assert!(!tool.params.contains_key("note"));
    assert_eq!(tool.params.get("old_string").map(String::as_str), Some("x"));
    assert_eq!(
        tool.native_args,
        Some(NativeArgs::EditFile(EditFileArgs {
            file_path: "a.rs".to_string(),
            old_string: "x".to_string(),
            new_string: "y".to_string(),
            expected_replacements: None,
        }))
    );
}

#[test]
fn test_final_rejects_unknown_shape() {
    let mapper = ToolArgMapper::default();
    let err = mapper
        .map_final("c", "read_file", &resolve("read_file"), &json!({"pth": "a"}))
        .unwrap_err();
    assert!(matches!(err, ArgsError::InvalidPayload { .. }));

    let err = mapper
        .map_final("c", "read_file", &resolve("read_file"), &json!(["a"]))
        .unwrap_err();
    assert!(matches!(err, ArgsError::InvalidPayload { .. }));
}

#[test]
fn test_partial_never_fails() {
    let mapper = ToolArgMapper::default();
    let resolved = resolve("read_file");
    assert!(mapper.map_partial("c", "read_file", &resolved, &json!([])).is_none());
    let call = mapper
        .map_partial("c", "read_file", &resolved, &json!({"files": [{"pa": 1}]}))
        .unwrap();
    let tool = call.as_tool_use().unwrap();
    assert!(tool.partial);
    assert!(tool.native_args.is_none());
}

#[test]
fn test_legacy_flag_propagates() {
    let mapper = ToolArgMapper::default();
    let call = mapper
        .map_final("c", "read_file", &resolve("read_file"), &json!({"path": "a.rs"}))
        .unwrap();
    assert!(call.as_tool_use().unwrap().used_legacy_format);
}

#[test]
fn test_custom_pass_through() {
    let mapper = ToolArgMapper::default();
    let args = json!({"env": "staging"});
    let call = mapper.map_final("c", "deploy", &resolve("deploy"), &args).unwrap();
    assert_eq!(
        call.as_tool_use().unwrap().native_args,
        Some(NativeArgs::Custom(args))
    );
}

#[test]
fn test_integration_call() {
    let mapper = ToolArgMapper::default();
    let resolved = resolve("mcp__gh__search___issues");
    let args = json!({"query": "bug"});
    let call = mapper
        .map_final("c9", "mcp__gh__search___issues", &resolved, &args)
        .unwrap();
    assert_eq!(
        call,
        ParsedToolCall::Integration(DynamicIntegrationToolUse {
            id: "c9".to_string(),
            name: "mcp--gh--search___issues".to_string(),
            server_name: "gh".to_string(),
            tool_name: "search-issues".to_string(),
            arguments: args.as_object().unwrap().clone(),
            partial: false,
        })
    );
}

#[test]
fn test_double_encoded_payload() {
    let mapper = ToolArgMapper::default();
    let args = json!("{\"path\": \".\", \"recursive\": true}");
    let call = mapper
        .map_final("c", "list_files", &resolve("list_files"), &args)
        .unwrap();
    assert_eq!(call.name(), "list_files");
    assert_eq!(call.id(), "c");
    assert!(!call.is_partial());
}
