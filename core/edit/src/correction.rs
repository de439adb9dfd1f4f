//! Repair of over-escaped edit strings.
//!
//! Models sometimes send `\\n` where they meant a newline. When the needle
//! as sent does not occur but its unescaped form does, the unescaped pair
//! is used instead.

use tracing::debug;

/// Returns the `(old, new)` pair to match with.
pub fn pre_correct_escaping(old_string: &str, new_string: &str, content: &str) -> (String, String) {
    if content.contains(old_string) {
        return (old_string.to_string(), new_string.to_string());
    }
    let unescaped_old = unescape_over_escaped(old_string);
    if unescaped_old != old_string && !unescaped_old.is_empty() && content.contains(&unescaped_old) {
        debug!("old_string matched after unescaping");
        return (unescaped_old, unescape_over_escaped(new_string));
    }
    (old_string.to_string(), new_string.to_string())
}

/// Collapse `\n`, `\t`, `\r`, quote and backtick escapes, including runs of
/// backslashes before them. Any other backslash is kept.
pub fn unescape_over_escaped(text: &str) -> String {
    if !text.contains('\\') {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let mut slashes = 1;
        while chars.peek() == Some(&'\\') {
            chars.next();
            slashes += 1;
        }
        let mapped = match chars.peek() {
            Some('n') => Some('\n'),
            Some('t') => Some('\t'),
            Some('r') => Some('\r'),
            Some('\'') => Some('\''),
            Some('"') => Some('"'),
            Some('`') => Some('`'),
            _ => None,
        };
        match mapped {
            Some(ch) => {
                chars.next();
                out.push(ch);
            }
            None => out.extend(std::iter::repeat_n('\\', slashes)),
        }
    }
    out
}

#[cfg(test)]
#[path = "correction.test.rs"]
mod tests;
