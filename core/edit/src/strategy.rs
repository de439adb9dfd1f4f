//! Needle matching strategies, loosest last.

use regex_lite::NoExpand;
use regex_lite::Regex;
use strum::Display;
use strum::IntoStaticStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum MatchStrategy {
    /// Byte-for-byte substring.
    Exact,
    /// Literal text, with whitespace runs free to differ in width.
    WhitespaceTolerant,
    /// Non-whitespace tokens separated by any whitespace.
    TokenBased,
}

/// Priority order. The first strategy whose count equals the expected
/// replacement count wins, even when a later one would also match.
pub const MATCH_ORDER: [MatchStrategy; 3] = [
    MatchStrategy::Exact,
    MatchStrategy::WhitespaceTolerant,
    MatchStrategy::TokenBased,
];

const HORIZONTAL_WS: &str = r"[ \t\x0C]+";
const ANY_WS: &str = r"\s+";

impl MatchStrategy {
    /// Non-overlapping occurrences of `needle` in `haystack`.
    pub fn count(self, haystack: &str, needle: &str) -> usize {
        if needle.is_empty() {
            return 0;
        }
        match self {
            MatchStrategy::Exact => haystack.matches(needle).count(),
            _ => self
                .regex(needle)
                .map_or(0, |re| re.find_iter(haystack).count()),
        }
    }

    /// Replace every occurrence. `replacement` is always inserted literally.
    pub fn replace_all(self, haystack: &str, needle: &str, replacement: &str) -> String {
        match self {
            MatchStrategy::Exact => haystack.replace(needle, replacement),
            _ => match self.regex(needle) {
                Some(re) => re.replace_all(haystack, NoExpand(replacement)).into_owned(),
                None => haystack.to_string(),
            },
        }
    }

    fn regex(self, needle: &str) -> Option<Regex> {
        let pattern = match self {
            MatchStrategy::Exact => regex_lite::escape(needle),
            MatchStrategy::WhitespaceTolerant => whitespace_tolerant_pattern(needle),
            MatchStrategy::TokenBased => token_pattern(needle)?,
        };
        match Regex::new(&pattern) {
            Ok(re) => Some(re),
            Err(err) => {
                debug!(strategy = %self, error = %err, "match pattern rejected");
                None
            }
        }
    }
}

/// Escape non-whitespace runs; whitespace runs containing a line break match
/// any whitespace, other runs match horizontal whitespace only.
pub(crate) fn whitespace_tolerant_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() * 2);
    for (is_ws, run) in runs(needle) {
        if !is_ws {
            pattern.push_str(&regex_lite::escape(run));
        } else if run.contains('\n') {
            pattern.push_str(ANY_WS);
        } else {
            pattern.push_str(HORIZONTAL_WS);
        }
    }
    pattern
}

/// `None` for a needle made only of whitespace.
pub(crate) fn token_pattern(needle: &str) -> Option<String> {
    let tokens: Vec<String> = needle
        .split_ascii_whitespace()
        .map(regex_lite::escape)
        .collect();
    if tokens.is_empty() {
        return None;
    }
    Some(tokens.join(ANY_WS))
}

/// Split into maximal alternating whitespace / non-whitespace runs.
fn runs(text: &str) -> Vec<(bool, &str)> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;
    for (i, c) in text.char_indices() {
        let is_ws = c.is_ascii_whitespace();
        match current {
            Some(kind) if kind == is_ws => {}
            Some(kind) => {
                out.push((kind, &text[start..i]));
                start = i;
                current = Some(is_ws);
            }
            None => current = Some(is_ws),
        }
    }
    if let Some(kind) = current {
        out.push((kind, &text[start..]));
    }
    out
}

#[cfg(test)]
#[path = "strategy.test.rs"]
mod tests;
