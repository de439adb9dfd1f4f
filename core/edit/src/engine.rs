//! The replacement cascade.

use snafu::ensure;
use toolcall_file_encoding::detect_line_ending;
use toolcall_file_encoding::normalize_to_lf;
use toolcall_file_encoding::restore_line_endings;
use tracing::debug;

use crate::correction::pre_correct_escaping;
use crate::error::MatchCounts;
use crate::error::Result;
use crate::error::edit_error;
use crate::strategy::MATCH_ORDER;
use crate::strategy::MatchStrategy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditMatchResult {
    pub strategy: MatchStrategy,
    pub occurrence_count: usize,
    /// Edited content in the original line ending convention.
    pub applied_content: String,
}

/// Outcome of an edit against a file that may not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditPlan {
    Create { content: String },
    Replace(EditMatchResult),
}

/// Plan an edit. `existing` is `None` when the file is absent.
pub fn plan_edit(
    existing: Option<&str>,
    old_string: &str,
    new_string: &str,
    expected_replacements: usize,
) -> Result<EditPlan> {
    match (existing, old_string.is_empty()) {
        (None, true) => Ok(EditPlan::Create {
            content: new_string.to_string(),
        }),
        (None, false) => edit_error::FileNotFoundSnafu.fail(),
        (Some(_), true) => edit_error::FileAlreadyExistsSnafu.fail(),
        (Some(content), false) => {
            apply_replacement(content, old_string, new_string, expected_replacements)
                .map(EditPlan::Replace)
        }
    }
}

/// Replace `old_string` with `new_string` exactly `expected_replacements`
/// times, using the first strategy whose occurrence count matches.
pub fn apply_replacement(
    content: &str,
    old_string: &str,
    new_string: &str,
    expected_replacements: usize,
) -> Result<EditMatchResult> {
    ensure!(!old_string.is_empty(), edit_error::FileAlreadyExistsSnafu);
    ensure!(
        expected_replacements > 0,
        edit_error::InvalidExpectedReplacementsSnafu { value: 0i64 }
    );

    let line_ending = detect_line_ending(content);
    let content = normalize_to_lf(content);
    let old = normalize_to_lf(old_string);
    let new = normalize_to_lf(new_string);
    ensure!(old != new, edit_error::NoOpSnafu);

    let (old, new) = pre_correct_escaping(&old, &new, &content);
    ensure!(old != new, edit_error::NoOpSnafu);

    let mut counts = MatchCounts::default();
    for strategy in MATCH_ORDER {
        let count = strategy.count(&content, &old);
        match strategy {
            MatchStrategy::Exact => counts.exact = count,
            MatchStrategy::WhitespaceTolerant => counts.whitespace_tolerant = count,
            MatchStrategy::TokenBased => counts.token_based = count,
        }
        if count == expected_replacements {
            debug!(%strategy, count, "edit matched");
            let replaced = strategy.replace_all(&content, &old, &new);
            // A loose match can rewrite text into exactly what it was.
            ensure!(replaced != content, edit_error::NoOpSnafu);
            return Ok(EditMatchResult {
                strategy,
                occurrence_count: count,
                applied_content: restore_line_endings(&replaced, line_ending),
            });
        }
    }

    if counts.is_zero() {
        edit_error::NoMatchSnafu { counts }.fail()
    } else {
        edit_error::CountMismatchSnafu {
            expected: expected_replacements,
            counts,
        }
        .fail()
    }
}

#[cfg(test)]
#[path = "engine.test.rs"]
mod tests;
