use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn with<T>(value: Value, f: impl FnOnce(ArgMap<'_>) -> T) -> T {
    f(ArgMap::from_value(&value).unwrap())
}

#[test]
fn test_stringified_scalars_are_coerced() {
    let args = json!({"recursive": "TRUE", "limit": "25", "offset": 10.0, "flag": "no"});
    with(args, |a| {
        assert_eq!(a.bool("recursive"), Some(true));
        assert_eq!(a.int("limit"), Some(25));
        assert_eq!(a.int("offset"), Some(10));
        assert_eq!(a.bool("flag"), None);
    });
}

#[test]
fn test_numbers_render_as_strings() {
    with(json!({"mode": 42, "ok": false}), |a| {
        assert_eq!(a.string("mode").as_deref(), Some("42"));
        assert_eq!(a.string("ok").as_deref(), Some("false"));
    });
}

#[test]
fn test_double_encoded_containers() {
    let args = json!({
        "files": "[{\"path\": \"a.rs\"}]",
        "arguments": "{\"q\": 1}",
        "content": "[not json"
    });
    with(args, |a| {
        assert_eq!(a.array("files").unwrap().len(), 1);
        assert_eq!(a.object("arguments").unwrap().get("q"), Some(&json!(1)));
        assert!(a.array("content").is_none());
    });
}

#[test]
fn test_well_typed_values_are_untouched() {
    // A string that happens to look like JSON stays a string.
    let args = json!({"content": "[1, 2]", "count": 3.5});
    with(args, |a| {
        assert_eq!(a.string("content").as_deref(), Some("[1, 2]"));
        assert_eq!(a.int("count"), None);
    });
}

#[test]
fn test_null_is_absent() {
    with(json!({"cwd": null, "path": "  "}), |a| {
        assert!(!a.has("cwd"));
        assert!(a.string("cwd").is_none());
        assert!(a.has("path"));
        assert!(a.non_empty_string("path").is_none());
    });
}
