use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_complete_document_matches_serde() {
    let text = r#"{"path": "src/main.rs", "lines": [1, 2.5, -3], "ok": true, "n": null}"#;
    assert_eq!(parse_partial(text), Some(serde_json::from_str(text).unwrap()));
}

#[test]
fn test_truncated_string_keeps_prefix() {
    assert_eq!(
        parse_partial(r#"{"path": "src/ma"#),
        Some(json!({"path": "src/ma"}))
    );
}

#[test]
fn test_dangling_key_is_dropped() {
    assert_eq!(parse_partial(r#"{"path": "a", "con"#), Some(json!({"path": "a"})));
    assert_eq!(parse_partial(r#"{"path": "a", "content""#), Some(json!({"path": "a"})));
    assert_eq!(parse_partial(r#"{"path": "a", "content": "#), Some(json!({"path": "a"})));
}

#[test]
fn test_open_containers_are_closed() {
    assert_eq!(
        parse_partial(r#"{"todos": [{"text": "a"}, {"text": "b"#),
        Some(json!({"todos": [{"text": "a"}, {"text": "b"}]}))
    );
    assert_eq!(parse_partial("[1, 2,"), Some(json!([1, 2])));
}

#[test]
fn test_partial_literals_and_numbers() {
    assert_eq!(parse_partial(r#"{"recursive": tr"#), Some(json!({})));
    assert_eq!(parse_partial(r#"{"recursive": true"#), Some(json!({"recursive": true})));
    assert_eq!(parse_partial(r#"{"limit": 12"#), Some(json!({"limit": 12})));
    assert_eq!(parse_partial(r#"{"limit": 1.5e"#), Some(json!({"limit": 1.5})));
    assert_eq!(parse_partial(r#"{"limit": -"#), Some(json!({})));
}

#[test]
fn test_incomplete_escapes_are_dropped() {
    assert_eq!(parse_partial(r#"{"s": "a\"#), Some(json!({"s": "a"})));
    assert_eq!(parse_partial(r#"{"s": "a\u00"#), Some(json!({"s": "a"})));
    assert_eq!(parse_partial(r#"{"s": "line\nnext"#), Some(json!({"s": "line\nnext"})));
    assert_eq!(parse_partial(r#"{"s": "😀"}"#), Some(json!({"s": "\u{1F600}"})));
    assert_eq!(parse_partial(r#"{"s": "x\ud83d"#), Some(json!({"s": "x"})));
}

#[test]
fn test_syntax_errors_return_none() {
    assert_eq!(parse_partial(""), None);
    assert_eq!(parse_partial("   "), None);
    assert_eq!(parse_partial(r#"{"a" 1}"#), None);
    assert_eq!(parse_partial(r#"{"a": 1} trailing"#), None);
    assert_eq!(parse_partial(r#"{"a": trux}"#), None);
    assert_eq!(parse_partial(r#"{a: 1}"#), None);
    assert_eq!(parse_partial("[1,]"), None);
}

#[test]
fn test_every_prefix_is_tolerated() {
    let text = r#"{"path": "a/b.rs", "edits": [{"old": "x\ty", "n": 12}], "flag": false}"#;
    for end in 0..=text.len() {
        if !text.is_char_boundary(end) {
            continue;
        }
        let prefix = &text[..end];
        if prefix.trim().is_empty() {
            continue;
        }
        assert!(parse_partial(prefix).is_some(), "prefix failed: {prefix:?}");
    }
}

#[test]
fn test_parse_complete() {
    assert_eq!(parse_complete("").unwrap(), json!({}));
    assert_eq!(parse_complete(r#"{"a": 1}"#).unwrap(), json!({"a": 1}));
    assert!(parse_complete(r#"{"a": "#).is_err());
}
