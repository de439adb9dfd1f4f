use super::*;
use crate::NameError;
use pretty_assertions::assert_eq;

fn encode(server: &str, tool: &str) -> String {
    encode_integration_name(server, tool, MAX_INTEGRATION_NAME_LENGTH).unwrap()
}

#[test]
fn test_encode_preserves_hyphens() {
    assert_eq!(encode("my-server", "get-data"), "mcp--my___server--get___data");
    assert_eq!(encode("github", "list_issues"), "mcp--github--list_issues");
}

#[test]
fn test_sanitize_collapses_separator_runs() {
    assert_eq!(sanitize_component("a--b"), "a-b");
    assert_eq!(sanitize_component("a__b"), "a_b");
    assert_eq!(sanitize_component("a_-_b"), "a-b");
    assert_eq!(sanitize_component("my server.v2"), "my_server_v2");
    assert_eq!(sanitize_component("--edge--"), "edge");
    assert_eq!(sanitize_component("ünï"), "n");
    // Collapsing keeps a component from forging a separator.
    assert_eq!(encode("a--b", "c"), "mcp--a___b--c");
}

#[test]
fn test_hyphen_roundtrip() {
    let cases = [
        ("my-server", "get-data"),
        ("a", "b"),
        ("x-y-z", "tool_name"),
        ("srv_1", "do-the-thing_now"),
        ("Upper-Case", "Mixed_case-9"),
    ];
    for (server, tool) in cases {
        let encoded = encode(server, tool);
        let decoded = decode_integration_name(&encoded).unwrap();
        assert_eq!(decoded.server_name, server);
        assert_eq!(decoded.tool_name, tool);
        // And back again.
        assert_eq!(encode(&decoded.server_name, &decoded.tool_name), encoded);
    }
}

#[test]
fn test_decode_rejects_malformed() {
    for bad in [
        "mcp--server",
        "mcp--a--b--c",
        "mcp----tool",
        "mcp--server--",
        "mcp--se-rver--tool",
        "mcp--ser.ver--tool",
        "mcp--a____b--c",
        "mcp--_a--b",
        "mcp--a__b--c",
        "mcp--a--b_",
        "mcp--a___--b",
        "read_file",
    ] {
        let err = decode_integration_name(bad).unwrap_err();
        assert!(
            matches!(err, NameError::MalformedIntegrationName { .. }),
            "{bad} should be malformed"
        );
    }
}

#[test]
fn test_normalize_restores_mangled_separators() {
    assert_eq!(
        normalize_integration_separators("mcp__github__list_issues"),
        "mcp--github--list_issues"
    );
    assert_eq!(normalize_integration_separators("read_file"), "read_file");
    assert_eq!(
        normalize_integration_separators("mcp--github--list_issues"),
        "mcp--github--list_issues"
    );
}

#[test]
fn test_normalize_keeps_hyphen_encoding_next_to_separator() {
    // `___` immediately followed by `__`: the encoding must survive and the
    // separator must be restored.
    let original = encode("my-server", "get-data");
    let mangled = original.replace("--", "__");
    assert_eq!(mangled, "mcp__my___server__get___data");
    let normalized = normalize_integration_separators(&mangled);
    assert_eq!(normalized, original);

    let decoded = decode_integration_name(&normalized).unwrap();
    assert_eq!(decoded.server_name, "my-server");
    assert_eq!(decoded.tool_name, "get-data");
}

#[test]
fn test_normalize_is_idempotent() {
    for name in [
        "mcp__a___b__c___d",
        "mcp--a___b--c___d",
        "mcp__x__y_z",
    ] {
        let once = normalize_integration_separators(name);
        assert_eq!(normalize_integration_separators(&once), once);
        assert!(decode_integration_name(&once).is_ok(), "{once}");
    }
}

#[test]
fn test_truncation_keeps_prefix_and_separators() {
    let server = "s".repeat(50);
    let tool = "t".repeat(50);
    let name = encode(&server, &tool);
    assert!(name.len() <= MAX_INTEGRATION_NAME_LENGTH);
    assert!(name.starts_with("mcp--"));
    let decoded = decode_integration_name(&name).unwrap();
    assert!(!decoded.server_name.is_empty());
    assert!(!decoded.tool_name.is_empty());
}

#[test]
fn test_truncation_prefers_short_server_intact() {
    let name = encode("db", &"x".repeat(100));
    assert_eq!(name.len(), MAX_INTEGRATION_NAME_LENGTH);
    assert!(name.starts_with("mcp--db--xxx"));
}

#[test]
fn test_truncation_drops_cut_hyphen_encoding() {
    let tool = format!("{}-tail", "a".repeat(53));
    let name = encode("srv", &tool);
    assert!(name.len() <= MAX_INTEGRATION_NAME_LENGTH);
    assert!(!name.ends_with('_'));
    assert!(decode_integration_name(&name).is_ok());
}

#[test]
fn test_encode_rejects_empty_components() {
    assert!(encode_integration_name("---", "tool", 64).is_err());
    assert!(encode_integration_name("srv", "", 64).is_err());
    assert!(encode_integration_name("srv", "tool", 5).is_err());
}

#[test]
fn test_every_accepted_name_reencodes_identically() {
    let pieces = ["a", "b9", "_", "__", "___", "____", "_____"];
    let mut accepted = 0;
    for lead in pieces {
        for mid in pieces {
            for tail in pieces {
                let server = format!("{lead}x{mid}y{tail}");
                for tool in ["t", "t___u", "t_u", "t__u", "_t"] {
                    let name = format!("mcp--{server}--{tool}");
                    let Ok(decoded) = decode_integration_name(&name) else {
                        continue;
                    };
                    accepted += 1;
                    assert_eq!(encode(&decoded.server_name, &decoded.tool_name), name);
                }
            }
        }
    }
    assert!(accepted > 0);
}
