use super::*;
use crate::BuiltinTool;

#[test]
fn test_every_alias_targets_a_builtin() {
    for (alias, canonical) in TOOL_ALIASES {
        assert!(
            BuiltinTool::from_name(canonical).is_some(),
            "{alias} -> {canonical} is not a builtin"
        );
        assert!(BuiltinTool::from_name(alias).is_none(), "{alias} shadows a builtin");
    }
}

#[test]
fn test_resolve_alias() {
    assert_eq!(resolve_alias("write_file"), "write_to_file");
    assert_eq!(resolve_alias("search_and_replace"), "edit_file");
    assert_eq!(resolve_alias("read_file"), "read_file");
    assert_eq!(resolve_alias("mcp--a--b"), "mcp--a--b");
    assert!(is_alias("str_replace"));
    assert!(!is_alias("edit_file"));
}
