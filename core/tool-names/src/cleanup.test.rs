use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_plain_names_unchanged() {
    assert_eq!(clean_tool_name("read_file"), "read_file");
    assert_eq!(clean_tool_name("mcp--my___server--get_data"), "mcp--my___server--get_data");
}

#[test]
fn test_strips_delimiters() {
    assert_eq!(clean_tool_name("  read_file\n"), "read_file");
    assert_eq!(clean_tool_name("read_file<|channel|>commentary"), "read_file");
    assert_eq!(clean_tool_name("edit_file|tool_call_end"), "edit_file");
    assert_eq!(clean_tool_name("execute_command(ls)"), "execute_command");
    assert_eq!(clean_tool_name("list_files {\"path\": \".\"}"), "list_files");
}

#[test]
fn test_strips_quotes_and_tags() {
    assert_eq!(clean_tool_name("\"write_to_file\""), "write_to_file");
    assert_eq!(clean_tool_name("`search_files`"), "search_files");
    assert_eq!(clean_tool_name("<edit_file>"), "edit_file");
    assert_eq!(clean_tool_name("</edit_file>"), "edit_file");
}

#[test]
fn test_strips_namespaces() {
    assert_eq!(clean_tool_name("functions.read_file"), "read_file");
    assert_eq!(clean_tool_name("default_api.apply_diff"), "apply_diff");
    assert_eq!(clean_tool_name("read_file."), "read_file");
}

#[test]
fn test_garbage_becomes_empty() {
    assert_eq!(clean_tool_name("   "), "");
    assert_eq!(clean_tool_name("<|"), "");
}
