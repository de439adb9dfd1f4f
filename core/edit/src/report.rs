//! Human-readable edit results for the model.

use crate::error::EditError;
use crate::strategy::MatchStrategy;

/// ` (+N/-M lines)` for the changed middle of two texts, or empty when
/// nothing changed.
pub fn diff_stats(before: &str, after: &str) -> String {
    let old: Vec<&str> = before.lines().collect();
    let new: Vec<&str> = after.lines().collect();
    let prefix = old.iter().zip(&new).take_while(|(a, b)| a == b).count();
    let suffix = old[prefix..]
        .iter()
        .rev()
        .zip(new[prefix..].iter().rev())
        .take_while(|(a, b)| a == b)
        .count();
    let removed = old.len() - prefix - suffix;
    let added = new.len() - prefix - suffix;
    if added == 0 && removed == 0 {
        return String::new();
    }
    format!(" (+{added}/-{removed} lines)")
}

/// Where, if anywhere, the needle's first line appears.
pub fn find_closest_match(content: &str, needle: &str) -> String {
    let Some(first) = needle.lines().map(str::trim).find(|line| !line.is_empty()) else {
        return "old_string contains only whitespace.".to_string();
    };
    match content.lines().position(|line| line.contains(first)) {
        Some(index) => format!(
            "The first line of old_string was found at line {} (partial match); the lines after it differ.",
            index + 1
        ),
        None => format!("The first line of old_string ({first:?}) was not found anywhere in the file."),
    }
}

pub fn success_message(path: &str, before: &str, after: &str, strategy: MatchStrategy, count: usize) -> String {
    let stats = diff_stats(before, after);
    let strategy_note = match strategy {
        MatchStrategy::Exact => String::new(),
        other => format!(" (matched via {other} strategy)"),
    };
    let occurrences = if count > 1 {
        format!(", {count} occurrences replaced")
    } else {
        String::new()
    };
    format!("Successfully edited {path}{stats}{strategy_note}{occurrences}")
}

/// Failure text with a machine-diagnosable `<error_details>` block.
pub fn failure_message(path: &str, err: &EditError, content: Option<&str>, old_string: &str) -> String {
    let mut details = Vec::new();
    let mut suggestions = Vec::new();
    match err {
        EditError::NoMatch { counts, .. } => {
            details.push(format!("Match counts: {counts}"));
            if let Some(content) = content {
                details.push(format!("Hint: {}", find_closest_match(content, old_string)));
            }
            suggestions.push("Read the file again and copy old_string exactly, including indentation.");
            suggestions.push("Include fewer lines in old_string so that it is easier to match.");
        }
        EditError::CountMismatch { expected, counts, .. } => {
            details.push(format!("Expected replacements: {expected}"));
            details.push(format!("Match counts: {counts}"));
            suggestions.push("Add surrounding lines to old_string so it identifies a unique location.");
            suggestions.push("Or set expected_replacements to the number of occurrences to replace.");
        }
        EditError::NoOp { .. } => {
            suggestions.push("Make new_string differ from old_string, or skip this edit.");
        }
        EditError::FileAlreadyExists { .. } => {
            suggestions.push("Use a non-empty old_string to edit the existing file.");
        }
        EditError::FileNotFound { .. } => {
            suggestions.push("Check the path, or use an empty old_string to create the file.");
        }
        EditError::InvalidExpectedReplacements { .. } => {
            suggestions.push("Omit expected_replacements or pass a positive number.");
        }
        EditError::ReadFile { source, .. } => {
            details.push(format!("Cause: {source}"));
            suggestions.push("Check that the path names a readable UTF-8 text file.");
        }
    }

    let mut out = format!("Failed to edit {path}: {err}\n<error_details>\n");
    for line in details {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str("Suggestions:\n");
    for (i, suggestion) in suggestions.iter().enumerate() {
        out.push_str(&format!("{}. {suggestion}\n", i + 1));
    }
    out.push_str("</error_details>");
    out
}

#[cfg(test)]
#[path = "report.test.rs"]
mod tests;
