use super::*;
use crate::NameError;
use pretty_assertions::assert_eq;

#[test]
fn test_builtin_and_alias() {
    let resolver = ToolNameResolver::new();
    assert_eq!(
        resolver.resolve("read_file").unwrap(),
        ResolvedName::Builtin(BuiltinTool::ReadFile)
    );
    assert_eq!(
        resolver.resolve("write_file").unwrap(),
        ResolvedName::Builtin(BuiltinTool::WriteToFile)
    );
    assert_eq!(
        resolver.resolve("functions.search_and_replace<|end|>").unwrap(),
        ResolvedName::Builtin(BuiltinTool::EditFile)
    );
}

#[test]
fn test_custom_tools() {
    let mut resolver = ToolNameResolver::new();
    assert!(matches!(
        resolver.resolve("deploy_preview"),
        Err(NameError::UnknownTool { .. })
    ));
    resolver.register_custom("deploy_preview");
    assert_eq!(
        resolver.resolve("deploy_preview").unwrap(),
        ResolvedName::Custom("deploy_preview".to_string())
    );
    assert!(resolver.unregister_custom("deploy_preview"));
    assert!(resolver.resolve("deploy_preview").is_err());
}

#[test]
fn test_builtin_wins_over_custom() {
    let mut resolver = ToolNameResolver::new();
    resolver.register_custom("read_file");
    assert_eq!(
        resolver.resolve("read_file").unwrap(),
        ResolvedName::Builtin(BuiltinTool::ReadFile)
    );
}

#[test]
fn test_integration_unregistered_but_well_formed() {
    let resolver = ToolNameResolver::new();
    let resolved = resolver.resolve("mcp__my___server__get___data").unwrap();
    assert_eq!(
        resolved,
        ResolvedName::Integration {
            name: "mcp--my___server--get___data".to_string(),
            server_name: "my-server".to_string(),
            tool_name: "get-data".to_string(),
        }
    );
    assert!(resolved.is_integration());
    assert_eq!(resolved.canonical_name(), "mcp--my___server--get___data");
}

#[test]
fn test_integration_registry_keeps_original_names() {
    let mut resolver = ToolNameResolver::new();
    let name = resolver
        .register_integration_tool("My Server", "fetch.page")
        .unwrap();
    assert_eq!(name, "mcp--My_Server--fetch_page");

    let resolved = resolver.resolve(&name.replace("--", "__")).unwrap();
    assert_eq!(
        resolved,
        ResolvedName::Integration {
            name,
            server_name: "My Server".to_string(),
            tool_name: "fetch.page".to_string(),
        }
    );
}

#[test]
fn test_truncated_registered_name_resolves() {
    let mut resolver = ToolNameResolver::new();
    let tool = "t".repeat(80);
    let name = resolver.register_integration_tool("srv", &tool).unwrap();
    assert!(name.len() <= 64);
    match resolver.resolve(&name).unwrap() {
        ResolvedName::Integration { tool_name, .. } => assert_eq!(tool_name, tool),
        other => panic!("unexpected {other:?}"),
    }

    resolver.unregister_integration_server("srv");
    // Still well formed, so it decodes to the truncated component.
    match resolver.resolve(&name).unwrap() {
        ResolvedName::Integration { tool_name, .. } => assert_ne!(tool_name, tool),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_malformed_integration_is_hard_error() {
    let resolver = ToolNameResolver::new();
    let err = resolver.resolve("mcp--only_server").unwrap_err();
    assert!(matches!(err, NameError::MalformedIntegrationName { .. }));
}

#[test]
fn test_fails_closed() {
    let resolver = ToolNameResolver::new();
    for name in ["", "   ", "<|", "rm_rf", "READ_FILE", "mcp"] {
        assert!(resolver.resolve(name).is_err(), "{name:?} should be rejected");
    }
}
