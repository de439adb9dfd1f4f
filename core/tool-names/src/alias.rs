//! Superseded and alternate tool names.

/// `(alias, canonical)` pairs. Canonical entries are builtin names.
const TOOL_ALIASES: &[(&str, &str)] = &[
    ("write_file", "write_to_file"),
    ("create_file", "write_to_file"),
    ("search_and_replace", "edit_file"),
    ("search_replace", "edit_file"),
    ("str_replace", "edit_file"),
    ("str_replace_editor", "edit_file"),
    ("replace_in_file", "edit_file"),
    ("apply_patch", "apply_diff"),
    ("run_command", "execute_command"),
    ("bash", "execute_command"),
    ("view_file", "read_file"),
    ("list_dir", "list_files"),
    ("grep", "search_files"),
    ("todo_write", "update_todo_list"),
    ("ask_question", "ask_followup_question"),
];

/// Canonical name for `name`, or `name` itself when it is not an alias.
pub fn resolve_alias(name: &str) -> &str {
    TOOL_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map_or(name, |(_, canonical)| *canonical)
}

pub fn is_alias(name: &str) -> bool {
    TOOL_ALIASES.iter().any(|(alias, _)| *alias == name)
}

#[cfg(test)]
#[path = "alias.test.rs"]
mod tests;
