use super::*;
use pretty_assertions::assert_eq;

use crate::EditError;

#[test]
fn test_single_line_exact() {
    let result = apply_replacement("Line 1\nLine 2\nLine 3", "Line 2", "Second", 1).unwrap();
    assert_eq!(result.strategy, MatchStrategy::Exact);
    assert_eq!(result.occurrence_count, 1);
    assert_eq!(result.applied_content, "Line 1\nSecond\nLine 3");
}

#[test]
fn test_exact_wins_over_looser_strategies() {
    // Exact finds one; the tolerant strategy would find two.
    let content = "a  b\na b\n";
    assert_eq!(MatchStrategy::WhitespaceTolerant.count(content, "a b"), 2);
    let result = apply_replacement(content, "a b", "c", 1).unwrap();
    assert_eq!(result.strategy, MatchStrategy::Exact);
    assert_eq!(result.applied_content, "a  b\nc\n");
}

#[test]
fn test_falls_through_to_tolerant() {
    let content = "if x {\n\t\treturn 1;\n}\n";
    let result = apply_replacement(content, "if x {\n    return 1;\n}", "if x {\n    return 2;\n}", 1)
        .unwrap();
    assert_eq!(result.strategy, MatchStrategy::WhitespaceTolerant);
    assert_eq!(result.applied_content, "if x {\n    return 2;\n}\n");
}

#[test]
fn test_falls_through_to_token_based() {
    let content = "call(a,\n     b)";
    let result = apply_replacement(content, "call(a, b)", "call(b, a)", 1).unwrap();
    assert_eq!(result.strategy, MatchStrategy::TokenBased);
    assert_eq!(result.applied_content, "call(b, a)");
}

#[test]
fn test_expected_count_selects_strategy() {
    let content = "x = 1\nx =  1\n";
    let result = apply_replacement(content, "x = 1", "x = 2", 2).unwrap();
    assert_eq!(result.strategy, MatchStrategy::WhitespaceTolerant);
    assert_eq!(result.occurrence_count, 2);
    assert_eq!(result.applied_content, "x = 2\nx = 2\n");
}

#[test]
fn test_no_match_reports_all_counts() {
    let err = apply_replacement("hello", "bye", "ciao", 1).unwrap_err();
    let EditError::NoMatch { counts, .. } = err else {
        panic!("expected no match, got {err:?}");
    };
    assert_eq!(counts, MatchCounts::default());
}

#[test]
fn test_count_mismatch_distinct_from_no_match() {
    let content = "foo\nfoo  \nfoo\n";
    let err = apply_replacement(content, "foo", "bar", 1).unwrap_err();
    let EditError::CountMismatch { expected, counts, .. } = err else {
        panic!("expected count mismatch, got {err:?}");
    };
    assert_eq!(expected, 1);
    assert_eq!(
        counts,
        MatchCounts {
            exact: 3,
            whitespace_tolerant: 3,
            token_based: 3,
        }
    );
}

#[test]
fn test_zero_exact_with_looser_counts() {
    let content = "a  b\na\tb\n";
    let err = apply_replacement(content, "a b", "c", 1).unwrap_err();
    let EditError::CountMismatch { counts, .. } = err else {
        panic!("expected count mismatch, got {err:?}");
    };
    assert_eq!(counts.exact, 0);
    assert_eq!(counts.whitespace_tolerant, 2);
    assert_eq!(counts.token_based, 2);
}

#[test]
fn test_noop_after_normalization() {
    let err = apply_replacement("a\nb", "a\r\nb", "a\nb", 1).unwrap_err();
    assert!(matches!(err, EditError::NoOp { .. }));
}

#[test]
fn test_crlf_preserved() {
    let content = "one\r\ntwo\r\nthree\r\n";
    let result = apply_replacement(content, "two\nthree", "2\n3", 1).unwrap();
    assert_eq!(result.applied_content, "one\r\n2\r\n3\r\n");
}

#[test]
fn test_replacement_special_characters_literal() {
    let content = "let   price = 0;";
    let result = apply_replacement(content, "let price = 0;", "let price = \"$1.00 $0\";", 1).unwrap();
    assert_eq!(result.strategy, MatchStrategy::WhitespaceTolerant);
    assert_eq!(result.applied_content, "let price = \"$1.00 $0\";");
}

#[test]
fn test_over_escaped_needle_corrected() {
    let result = apply_replacement("a\nb\n", "a\\nb", "a\\nc", 1).unwrap();
    assert_eq!(result.applied_content, "a\nc\n");
}

#[test]
fn test_noop_after_escape_correction() {
    let err = apply_replacement("x\ny\n", "x\\ny", "x\ny", 1).unwrap_err();
    assert!(matches!(err, EditError::NoOp { .. }));
}

#[test]
fn test_loose_match_that_changes_nothing_is_noop() {
    // The tolerant match rewrites "a b" into the identical "a b".
    let err = apply_replacement("a b\n", "a  b", "a b", 1).unwrap_err();
    assert!(matches!(err, EditError::NoOp { .. }));
}

#[test]
fn test_zero_expected_rejected() {
    let err = apply_replacement("a", "a", "b", 0).unwrap_err();
    assert!(matches!(err, EditError::InvalidExpectedReplacements { .. }));
}

#[test]
fn test_plan_create_and_conflicts() {
    assert_eq!(
        plan_edit(None, "", "fresh\n", 1).unwrap(),
        EditPlan::Create {
            content: "fresh\n".to_string()
        }
    );
    assert!(matches!(
        plan_edit(Some("x"), "", "y", 1).unwrap_err(),
        EditError::FileAlreadyExists { .. }
    ));
    assert!(matches!(
        plan_edit(Some(""), "", "y", 1).unwrap_err(),
        EditError::FileAlreadyExists { .. }
    ));
    assert!(matches!(
        plan_edit(None, "x", "y", 1).unwrap_err(),
        EditError::FileNotFound { .. }
    ));
    assert!(matches!(
        plan_edit(Some("x"), "x", "y", 1).unwrap(),
        EditPlan::Replace(_)
    ));
}
