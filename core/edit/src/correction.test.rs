use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_pair_kept_when_old_matches() {
    let (old, new) = pre_correct_escaping("hello", "hi\\nthere", "hello world");
    assert_eq!(old, "hello");
    // A literal backslash-n in new_string is intentional here.
    assert_eq!(new, "hi\\nthere");
}

#[test]
fn test_unescaped_pair_used() {
    let (old, new) = pre_correct_escaping("line1\\nline2", "line1\\nupdated", "line1\nline2");
    assert_eq!(old, "line1\nline2");
    assert_eq!(new, "line1\nupdated");
}

#[test]
fn test_no_help_keeps_pair() {
    let (old, new) = pre_correct_escaping("not\\nthere", "x", "hello world");
    assert_eq!(old, "not\\nthere");
    assert_eq!(new, "x");
}

#[test]
fn test_unescape() {
    assert_eq!(unescape_over_escaped("plain"), "plain");
    assert_eq!(unescape_over_escaped("a\\tb"), "a\tb");
    assert_eq!(unescape_over_escaped("say \\\"hi\\\""), "say \"hi\"");
    assert_eq!(unescape_over_escaped("it\\'s"), "it's");
    assert_eq!(unescape_over_escaped("path\\\\nname"), "path\nname");
    assert_eq!(unescape_over_escaped("end\\"), "end\\");
    assert_eq!(unescape_over_escaped("\\a\\\\b"), "\\a\\\\b");
}
