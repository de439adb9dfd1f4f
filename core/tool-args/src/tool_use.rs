//! Output records handed to the dispatcher.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use toolcall_names::BuiltinTool;

use crate::native::NativeArgs;

/// A builtin or custom tool call.
///
/// `partial == true` records are previews of a call still streaming and
/// must never drive side effects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolUse {
    pub id: String,
    /// Canonical name after cleanup and alias resolution.
    pub name: String,
    /// Every non-null argument rendered as text.
    pub params: BTreeMap<String, String>,
    pub native_args: Option<NativeArgs>,
    pub partial: bool,
    /// Name as emitted by the model, when it differs from `name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub used_legacy_format: bool,
}

impl ToolUse {
    pub fn builtin(&self) -> Option<BuiltinTool> {
        BuiltinTool::from_name(&self.name)
    }

    /// Server and tool named by a `use_mcp_tool` call.
    pub fn integration_target(&self) -> Option<(&str, &str)> {
        match &self.native_args {
            Some(NativeArgs::UseMcpTool(args)) => {
                Some((args.server_name.as_str(), args.tool_name.as_str()))
            }
            _ => None,
        }
    }
}

/// A call to a dynamically named integration tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DynamicIntegrationToolUse {
    pub id: String,
    /// Normalized `mcp--<server>--<tool>` name.
    pub name: String,
    pub server_name: String,
    pub tool_name: String,
    pub arguments: Map<String, Value>,
    pub partial: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParsedToolCall {
    Tool(ToolUse),
    Integration(DynamicIntegrationToolUse),
}

impl ParsedToolCall {
    pub fn id(&self) -> &str {
        match self {
            ParsedToolCall::Tool(tool) => &tool.id,
            ParsedToolCall::Integration(call) => &call.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ParsedToolCall::Tool(tool) => &tool.name,
            ParsedToolCall::Integration(call) => &call.name,
        }
    }

    pub fn is_partial(&self) -> bool {
        match self {
            ParsedToolCall::Tool(tool) => tool.partial,
            ParsedToolCall::Integration(call) => call.partial,
        }
    }

    pub fn as_tool_use(&self) -> Option<&ToolUse> {
        match self {
            ParsedToolCall::Tool(tool) => Some(tool),
            ParsedToolCall::Integration(_) => None,
        }
    }
}
