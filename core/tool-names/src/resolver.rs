//! Raw name -> dispatch target.

use std::collections::HashMap;
use std::collections::HashSet;

use tracing::debug;
use tracing::warn;

use crate::alias::resolve_alias;
use crate::builtin::BuiltinTool;
use crate::cleanup::clean_tool_name;
use crate::error::Result;
use crate::error::name_error;
use crate::integration::IntegrationName;
use crate::integration::MAX_INTEGRATION_NAME_LENGTH;
use crate::integration::decode_integration_name;
use crate::integration::encode_integration_name;
use crate::integration::is_integration_name;
use crate::integration::normalize_integration_separators;

/// Where a tool call should be dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedName {
    Builtin(BuiltinTool),
    Custom(String),
    Integration {
        /// Normalized `mcp--<server>--<tool>` name.
        name: String,
        server_name: String,
        tool_name: String,
    },
}

impl ResolvedName {
    pub fn canonical_name(&self) -> &str {
        match self {
            ResolvedName::Builtin(tool) => tool.name(),
            ResolvedName::Custom(name) => name,
            ResolvedName::Integration { name, .. } => name,
        }
    }

    pub fn is_integration(&self) -> bool {
        matches!(self, ResolvedName::Integration { .. })
    }
}

/// Resolves names against builtins, registered custom tools, and
/// registered or well-formed integration tools.
#[derive(Debug, Clone)]
pub struct ToolNameResolver {
    custom_tools: HashSet<String>,
    /// Encoded name -> original server/tool names.
    integration_tools: HashMap<String, IntegrationName>,
    max_integration_name_length: usize,
}

impl Default for ToolNameResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolNameResolver {
    pub fn new() -> Self {
        Self {
            custom_tools: HashSet::new(),
            integration_tools: HashMap::new(),
            max_integration_name_length: MAX_INTEGRATION_NAME_LENGTH,
        }
    }

    pub fn with_max_integration_name_length(mut self, max: usize) -> Self {
        self.max_integration_name_length = max;
        self
    }

    pub fn register_custom(&mut self, name: impl Into<String>) {
        self.custom_tools.insert(name.into());
    }

    pub fn unregister_custom(&mut self, name: &str) -> bool {
        self.custom_tools.remove(name)
    }

    pub fn is_custom(&self, name: &str) -> bool {
        self.custom_tools.contains(name)
    }

    /// Register an integration tool and return the name to advertise to the
    /// model.
    pub fn register_integration_tool(&mut self, server: &str, tool: &str) -> Result<String> {
        let name = encode_integration_name(server, tool, self.max_integration_name_length)?;
        if let Some(previous) = self.integration_tools.get(&name)
            && (previous.server_name != server || previous.tool_name != tool)
        {
            warn!(
                name = %name,
                previous_server = %previous.server_name,
                previous_tool = %previous.tool_name,
                "integration tool name collision, replacing earlier registration"
            );
        }
        self.integration_tools.insert(
            name.clone(),
            IntegrationName {
                server_name: server.to_string(),
                tool_name: tool.to_string(),
            },
        );
        Ok(name)
    }

    pub fn unregister_integration_server(&mut self, server: &str) {
        self.integration_tools
            .retain(|_, target| target.server_name != server);
    }

    /// Resolve a raw model-emitted name.
    ///
    /// Order: cleanup, alias, builtin, custom, integration. Fails closed.
    pub fn resolve(&self, raw: &str) -> Result<ResolvedName> {
        let cleaned = clean_tool_name(raw);
        if cleaned.is_empty() {
            warn!(raw = %raw, "tool name is empty after cleanup");
            return name_error::UnknownToolSnafu { name: raw }.fail();
        }

        let canonical = resolve_alias(&cleaned);
        if canonical != cleaned {
            debug!(alias = %cleaned, canonical = %canonical, "resolved tool alias");
        }

        if let Some(tool) = BuiltinTool::from_name(canonical) {
            return Ok(ResolvedName::Builtin(tool));
        }
        if self.custom_tools.contains(canonical) {
            return Ok(ResolvedName::Custom(canonical.to_string()));
        }

        let normalized = normalize_integration_separators(canonical);
        if is_integration_name(&normalized) {
            if let Some(target) = self.integration_tools.get(&normalized) {
                return Ok(ResolvedName::Integration {
                    name: normalized.clone(),
                    server_name: target.server_name.clone(),
                    tool_name: target.tool_name.clone(),
                });
            }
            let decoded = decode_integration_name(&normalized)?;
            return Ok(ResolvedName::Integration {
                name: normalized,
                server_name: decoded.server_name,
                tool_name: decoded.tool_name,
            });
        }

        warn!(tool = %cleaned, "rejecting unknown tool");
        name_error::UnknownToolSnafu { name: cleaned }.fail()
    }
}

#[cfg(test)]
#[path = "resolver.test.rs"]
mod tests;
