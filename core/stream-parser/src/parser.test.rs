use super::*;
use pretty_assertions::assert_eq;
use toolcall_args::ExecuteCommandArgs;
use toolcall_args::NativeArgs;
use toolcall_error::ErrorExt;
use toolcall_error::StatusCode;

use crate::StreamError;

fn parser() -> StreamingToolCallParser {
    let mut resolver = ToolNameResolver::new();
    resolver.register_custom("deploy");
    resolver
        .register_integration_tool("github", "create-issue")
        .unwrap();
    StreamingToolCallParser::new(Arc::new(resolver), Arc::new(ToolArgMapper::default()))
}

const COMMAND_ARGS: &str = r#"{"command": "cargo test -p \"x\"", "cwd": "src", "timeout": "30"}"#;

fn feed(parser: &mut StreamingToolCallParser, id: &str, chunks: &[&str]) -> ParsedToolCall {
    assert!(parser.start(id, "execute_command"));
    for chunk in chunks {
        parser.append_chunk(id, chunk);
    }
    parser.finalize(id).unwrap().unwrap()
}

#[test]
fn test_chunked_and_whole_payload_agree() {
    let whole = feed(&mut parser(), "a", &[COMMAND_ARGS]);

    for size in 1..COMMAND_ARGS.len() {
        let chunks: Vec<&str> = COMMAND_ARGS
            .as_bytes()
            .chunks(size)
            .map(|c| std::str::from_utf8(c).unwrap())
            .collect();
        let chunked = feed(&mut parser(), "a", &chunks);
        assert_eq!(chunked, whole, "chunk size {size}");
    }

    let tool = whole.as_tool_use().unwrap();
    assert_eq!(
        tool.native_args,
        Some(NativeArgs::ExecuteCommand(ExecuteCommandArgs {
            command: "cargo test -p \"x\"".to_string(),
            cwd: Some("src".to_string()),
            timeout: Some(30),
        }))
    );
    assert!(!tool.partial);
}

#[test]
fn test_partial_updates_are_advisory() {
    let mut parser = parser();
    parser.start("a", "execute_command");
    assert!(parser.append_chunk("a", "{\"comm").is_some_and(|c| c.is_partial()));

    let update = parser.append_chunk("a", "and\": \"ls -").unwrap();
    let tool = update.as_tool_use().unwrap();
    assert!(tool.partial);
    assert_eq!(tool.params.get("command").map(String::as_str), Some("ls -"));

    // Unparseable text yields nothing but is kept.
    assert!(parser.append_chunk("a", "la\" ]").is_none());
    assert_eq!(
        parser.accumulator("a").unwrap().arguments,
        "{\"command\": \"ls -la\" ]"
    );
}

#[test]
fn test_duplicate_start_is_noop() {
    let mut parser = parser();
    assert!(parser.start("a", "execute_command"));
    parser.append_chunk("a", "{\"command\":");
    assert!(!parser.start("a", "read_file"));
    assert_eq!(parser.len(), 1);
    assert_eq!(parser.accumulator("a").unwrap().name, "execute_command");
    assert_eq!(parser.accumulator("a").unwrap().arguments, "{\"command\":");
}

#[test]
fn test_finalized_id_is_not_restarted() {
    let mut parser = parser();
    feed(&mut parser, "a", &[COMMAND_ARGS]);
    assert!(!parser.start("a", "execute_command"));
    assert!(parser.append_chunk("a", "{}").is_none());
    assert!(parser.finalize("a").unwrap().is_none());

    parser.clear();
    assert!(parser.start("a", "execute_command"));
}

#[test]
fn test_unknown_id_is_not_fatal() {
    let mut parser = parser();
    assert!(parser.append_chunk("ghost", "{}").is_none());
    assert!(parser.finalize("ghost").unwrap().is_none());
}

#[test]
fn test_name_cleanup_and_alias() {
    let mut parser = parser();
    parser.start("a", "functions.bash");
    parser.append_chunk("a", r#"{"command":"pwd"}"#);
    let call = parser.finalize("a").unwrap().unwrap();
    let tool = call.as_tool_use().unwrap();
    assert_eq!(tool.name, "execute_command");
    assert_eq!(tool.original_name.as_deref(), Some("bash"));
}

#[test]
fn test_unknown_tool_rejected_at_finalize() {
    let mut parser = parser();
    parser.start("a", "rm_rf_everything");
    assert!(parser.append_chunk("a", "{}").is_none());
    let err = parser.finalize("a").unwrap_err();
    assert!(matches!(err, StreamError::Resolve { .. }));
    assert_eq!(err.status_code(), StatusCode::UnknownTool);
    assert_eq!(err.call_id(), "a");
    assert!(parser.is_empty());
}

#[test]
fn test_malformed_json_is_hard_error() {
    let mut parser = parser();
    parser.start("a", "execute_command");
    parser.append_chunk("a", "{\"command\": \"ls\"");
    let err = parser.finalize("a").unwrap_err();
    assert!(matches!(err, StreamError::InvalidJson { .. }));
    assert_eq!(err.status_code(), StatusCode::InvalidJson);
}

#[test]
fn test_invalid_shape_is_hard_error() {
    let mut parser = parser();
    parser.start("a", "execute_command");
    parser.append_chunk("a", r#"{"cmd": "ls"}"#);
    let err = parser.finalize("a").unwrap_err();
    assert!(matches!(err, StreamError::Payload { .. }));
    assert_eq!(err.status_code(), StatusCode::InvalidToolPayload);
}

#[test]
fn test_integration_calls_are_final_only() {
    let mut parser = parser();
    parser.start("a", "mcp--github--create___issue");
    assert!(parser.append_chunk("a", r#"{"title": "bug"#).is_none());
    assert!(parser.append_chunk("a", r#""}"#).is_none());

    let call = parser.finalize("a").unwrap().unwrap();
    let ParsedToolCall::Integration(call) = call else {
        panic!("expected integration call");
    };
    assert_eq!(call.server_name, "github");
    assert_eq!(call.tool_name, "create-issue");
    assert_eq!(call.arguments.get("title").and_then(|v| v.as_str()), Some("bug"));
    assert!(!call.partial);
}

#[test]
fn test_custom_tool_passthrough() {
    let mut parser = parser();
    parser.start("a", "deploy");
    parser.append_chunk("a", r#"{"env": "prod"}"#);
    let call = parser.finalize("a").unwrap().unwrap();
    let tool = call.as_tool_use().unwrap();
    assert_eq!(tool.name, "deploy");
    assert!(matches!(tool.native_args, Some(NativeArgs::Custom(_))));
}

#[test]
fn test_empty_arguments_for_parameterless_tool() {
    let mut parser = parser();
    parser.start("a", "deploy");
    let call = parser.finalize("a").unwrap().unwrap();
    assert!(!call.is_partial());
}
