//! Reversible names for integration (MCP) tools.
//!
//! Layout: `mcp--<server>--<tool>`. Components may only contain
//! `[A-Za-z0-9_]`; a hyphen inside a component is written as `___` so the
//! `--` separator stays unambiguous. Some models rewrite `--` to `__`;
//! [`normalize_integration_separators`] undoes that without touching `___`.

use snafu::ensure;

use crate::error::Result;
use crate::error::name_error;

pub const INTEGRATION_PREFIX: &str = "mcp";
pub const INTEGRATION_SEPARATOR: &str = "--";
pub const MAX_INTEGRATION_NAME_LENGTH: usize = 64;

const PREFIXED: &str = "mcp--";
const MANGLED_PREFIXED: &str = "mcp__";
const HYPHEN_ENCODING: &str = "___";

/// Server and tool addressed by an integration name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntegrationName {
    pub server_name: String,
    pub tool_name: String,
}

pub fn is_integration_name(name: &str) -> bool {
    name.starts_with(PREFIXED)
}

/// Map characters outside `[A-Za-z0-9_-]` to `_`, collapse every run of
/// `-`/`_` to a single character (`-` if the run had one), and trim both ends.
pub fn sanitize_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut run: Option<bool> = None;
    for c in raw.chars() {
        let c = if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' };
        if c == '-' || c == '_' {
            let hyphen = run.unwrap_or(false) || c == '-';
            run = Some(hyphen);
            continue;
        }
        if let Some(hyphen) = run.take() {
            out.push(if hyphen { '-' } else { '_' });
        }
        out.push(c);
    }
    // Trailing run is dropped; a leading run is trimmed here.
    out.trim_start_matches(['-', '_']).to_string()
}

fn encode_component(raw: &str) -> String {
    sanitize_component(raw).replace('-', HYPHEN_ENCODING)
}

fn decode_component(encoded: &str) -> String {
    encoded.replace(HYPHEN_ENCODING, "-")
}

/// Build `mcp--<server>--<tool>`, truncated to `max_len`.
///
/// Truncation only shortens the two components, so the prefix and both
/// separators always survive. A truncated name is no longer reversible and
/// must be looked up through the resolver's registry.
pub fn encode_integration_name(server: &str, tool: &str, max_len: usize) -> Result<String> {
    let server_enc = encode_component(server);
    let tool_enc = encode_component(tool);
    let raw = format!("{server}/{tool}");
    ensure!(
        !server_enc.is_empty() && !tool_enc.is_empty(),
        name_error::MalformedIntegrationNameSnafu {
            name: raw,
            reason: "server and tool must contain at least one valid character",
        }
    );

    let overhead = PREFIXED.len() + INTEGRATION_SEPARATOR.len();
    ensure!(
        max_len >= overhead + 2,
        name_error::MalformedIntegrationNameSnafu {
            name: raw,
            reason: format!("length limit {max_len} is too small"),
        }
    );

    let full = format!("{PREFIXED}{server_enc}{INTEGRATION_SEPARATOR}{tool_enc}");
    if full.len() <= max_len {
        return Ok(full);
    }

    let room = max_len - overhead;
    let server_keep = server_enc
        .len()
        .min((room / 2).max(room.saturating_sub(tool_enc.len())));
    let tool_keep = room - server_keep;
    let server_part = truncate_component(&server_enc, server_keep);
    let tool_part = truncate_component(&tool_enc, tool_keep);
    Ok(format!(
        "{PREFIXED}{server_part}{INTEGRATION_SEPARATOR}{tool_part}"
    ))
}

// Encoded components are ASCII, so byte slicing is safe. Trimming `_`
// removes a hyphen encoding cut in half.
fn truncate_component(encoded: &str, keep: usize) -> &str {
    encoded[..keep.min(encoded.len())].trim_end_matches('_')
}

/// Parse `mcp--<server>--<tool>` back into its components.
pub fn decode_integration_name(name: &str) -> Result<IntegrationName> {
    let Some(rest) = name.strip_prefix(PREFIXED) else {
        return name_error::MalformedIntegrationNameSnafu {
            name,
            reason: format!("missing '{PREFIXED}' prefix"),
        }
        .fail();
    };

    let parts: Vec<&str> = rest.split(INTEGRATION_SEPARATOR).collect();
    let [server, tool] = parts.as_slice() else {
        return name_error::MalformedIntegrationNameSnafu {
            name,
            reason: format!("expected 2 components, found {}", parts.len()),
        }
        .fail();
    };

    for component in [server, tool] {
        ensure!(
            !component.is_empty(),
            name_error::MalformedIntegrationNameSnafu {
                name,
                reason: "empty component",
            }
        );
        ensure!(
            component.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
            name_error::MalformedIntegrationNameSnafu {
                name,
                reason: format!("invalid character in '{component}'"),
            }
        );
        // Stray `_` runs (`__`, four or more, or at either end) are never
        // produced by encoding and would decode to a different name.
        ensure!(
            encode_component(&decode_component(component)) == **component,
            name_error::MalformedIntegrationNameSnafu {
                name,
                reason: format!("'{component}' is not a canonical encoded component"),
            }
        );
    }

    Ok(IntegrationName {
        server_name: decode_component(server),
        tool_name: decode_component(tool),
    })
}

/// Restore `--` separators a model rewrote to `__`.
///
/// Only underscore runs of exactly two are separators; a run of three is a
/// hyphen encoding and single underscores are literal.
pub fn normalize_integration_separators(name: &str) -> String {
    if !name.starts_with(MANGLED_PREFIXED) && !name.starts_with(PREFIXED) {
        return name.to_string();
    }

    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '_' {
            out.push(c);
            continue;
        }
        let mut run = 1;
        while chars.next_if_eq(&'_').is_some() {
            run += 1;
        }
        if run == 2 {
            out.push_str(INTEGRATION_SEPARATOR);
        } else {
            out.extend(std::iter::repeat_n('_', run));
        }
    }
    out
}

#[cfg(test)]
#[path = "integration.test.rs"]
mod tests;
