use super::*;
use pretty_assertions::assert_eq;

use crate::engine::apply_replacement;

#[test]
fn test_diff_stats() {
    assert_eq!(diff_stats("a\nb\nc\n", "a\nB\nc\n"), " (+1/-1 lines)");
    assert_eq!(diff_stats("a\n", "a\nb\n"), " (+1/-0 lines)");
    assert_eq!(diff_stats("a\nb\n", "a\n"), " (+0/-1 lines)");
    assert_eq!(diff_stats("same\n", "same\n"), "");
    assert_eq!(diff_stats("", "x\ny"), " (+2/-0 lines)");
}

#[test]
fn test_find_closest_match() {
    let hint = find_closest_match("fn main() {\n    let x = 1;\n}\n", "fn main() {\n    let x = 2;\n}");
    assert!(hint.contains("line 1"));
    assert!(hint.contains("partial match"));

    let hint = find_closest_match("fn main() {}\n", "missing()");
    assert!(hint.contains("not found anywhere"));
}

#[test]
fn test_success_message() {
    let msg = success_message("a.rs", "x\n", "y\n", MatchStrategy::TokenBased, 1);
    assert_eq!(msg, "Successfully edited a.rs (+1/-1 lines) (matched via token-based strategy)");
}

#[test]
fn test_failure_message_count_mismatch() {
    let content = "foo\nfoo\n";
    let err = apply_replacement(content, "foo", "bar", 1).unwrap_err();
    let msg = failure_message("a.rs", &err, Some(content), "foo");
    assert!(msg.starts_with("Failed to edit a.rs: Expected 1 occurrence(s)"));
    assert!(msg.contains("<error_details>\nExpected replacements: 1\n"));
    assert!(msg.contains("Match counts: exact=2, whitespace-tolerant=2, token-based=2"));
    assert!(msg.ends_with("</error_details>"));
}

#[test]
fn test_failure_message_no_match_has_hint() {
    let content = "alpha\nbeta\n";
    let err = apply_replacement(content, "alpha\ngamma", "x", 1).unwrap_err();
    let msg = failure_message("a.rs", &err, Some(content), "alpha\ngamma");
    assert!(msg.contains("Match counts: exact=0"));
    assert!(msg.contains("Hint: The first line of old_string was found at line 1"));
    assert!(msg.contains("Suggestions:\n1. "));
}
