//! Free-text cleanup for names emitted by the model.
//!
//! Some models leak chat-template delimiters or namespacing into the tool
//! name field, e.g. `functions.read_file`, `read_file<|channel|>commentary`,
//! or `"<edit_file>"`.

const NAMESPACE_PREFIXES: &[&str] = &["functions.", "tools.", "default_api."];

fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\'' | '`')
}

fn ends_name(c: char) -> bool {
    c.is_whitespace()
        || is_quote(c)
        || matches!(c, '<' | '>' | '|' | '(' | '{' | '[' | ':' | ',' | ';')
}

/// Strip delimiter artifacts, keeping the leading identifier.
///
/// Never rewrites characters inside the identifier itself, so
/// integration names survive unchanged.
pub fn clean_tool_name(raw: &str) -> String {
    let mut name = raw.trim().trim_matches(is_quote);
    name = name.trim_start_matches(['<', '/']);

    for prefix in NAMESPACE_PREFIXES {
        if let Some(rest) = name.strip_prefix(prefix) {
            name = rest;
            break;
        }
    }

    if let Some(end) = name.find(ends_name) {
        name = &name[..end];
    }
    name.trim_end_matches('.').to_string()
}

#[cfg(test)]
#[path = "cleanup.test.rs"]
mod tests;
