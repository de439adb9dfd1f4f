use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_strategy_names() {
    let names: Vec<String> = MATCH_ORDER.iter().map(ToString::to_string).collect();
    assert_eq!(names, vec!["exact", "whitespace-tolerant", "token-based"]);
}

#[test]
fn test_exact_count() {
    assert_eq!(MatchStrategy::Exact.count("foo bar foo", "foo"), 2);
    assert_eq!(MatchStrategy::Exact.count("aaaa", "aa"), 2);
    assert_eq!(MatchStrategy::Exact.count("abc", ""), 0);
}

#[test]
fn test_whitespace_tolerant_reindent() {
    let content = "fn main() {\n        let x = 1;\n        let y = 2;\n}\n";
    let needle = "fn main() {\n    let x = 1;\n    let y = 2;\n}";
    assert_eq!(MatchStrategy::Exact.count(content, needle), 0);
    assert_eq!(MatchStrategy::WhitespaceTolerant.count(content, needle), 1);
}

#[test]
fn test_whitespace_tolerant_keeps_line_structure() {
    // Horizontal whitespace in the needle must not absorb a line break.
    let content = "let x =\n1;";
    assert_eq!(MatchStrategy::WhitespaceTolerant.count(content, "let x = 1;"), 0);
    assert_eq!(MatchStrategy::TokenBased.count(content, "let x = 1;"), 1);
}

#[test]
fn test_token_based_requires_separation() {
    assert_eq!(MatchStrategy::TokenBased.count("a b", "a  b"), 1);
    assert_eq!(MatchStrategy::TokenBased.count("ab", "a b"), 0);
    assert_eq!(MatchStrategy::TokenBased.count("a b", " \n "), 0);
}

#[test]
fn test_special_characters_are_literal() {
    let content = "call(a.b[0]) + $x * 2?";
    let needle = "call(a.b[0])  +  $x * 2?";
    assert_eq!(MatchStrategy::WhitespaceTolerant.count(content, needle), 1);
    assert_eq!(MatchStrategy::TokenBased.count(content, needle), 1);
    assert_eq!(MatchStrategy::WhitespaceTolerant.count("callXa", "call(a"), 0);
}

#[test]
fn test_replacement_is_literal() {
    let content = "price =   1";
    for strategy in MATCH_ORDER {
        let out = strategy.replace_all(content, "price = 1", "cost = $1.00 ${0} $HOME \\1");
        if strategy == MatchStrategy::Exact {
            assert_eq!(out, content);
        } else {
            assert_eq!(out, "cost = $1.00 ${0} $HOME \\1");
        }
    }
}

#[test]
fn test_pattern_shapes() {
    assert_eq!(whitespace_tolerant_pattern("a b\n  c"), r"a[ \t\x0C]+b\s+c");
    assert_eq!(token_pattern(" a.b \n c "), Some(r"a\.b\s+c".to_string()));
    assert_eq!(token_pattern("   "), None);
}
