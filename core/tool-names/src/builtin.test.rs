use super::*;
use strum::IntoEnumIterator;

#[test]
fn test_name_roundtrip() {
    for tool in BuiltinTool::iter() {
        assert_eq!(BuiltinTool::from_name(tool.name()), Some(tool));
    }
}

#[test]
fn test_snake_case_names() {
    assert_eq!(BuiltinTool::ReadCommandOutput.name(), "read_command_output");
    assert_eq!(BuiltinTool::UseMcpTool.to_string(), "use_mcp_tool");
    assert_eq!(BuiltinTool::from_name("ReadFile"), None);
    assert_eq!(BuiltinTool::from_name("read_file "), None);
}

#[test]
fn test_is_mutating() {
    assert!(BuiltinTool::EditFile.is_mutating());
    assert!(!BuiltinTool::ReadFile.is_mutating());
}
