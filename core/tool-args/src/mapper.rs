//! Builds [`ParsedToolCall`]s from resolved names and parsed arguments.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde_json::Map;
use serde_json::Value;
use toolcall_names::ResolvedName;
use tracing::trace;

use crate::coerce::ArgMap;
use crate::error::Result;
use crate::error::args_error;
use crate::native::NativeArgs;
use crate::registry::ArgExtractorRegistry;
use crate::registry::ParseMode;
use crate::tool_use::DynamicIntegrationToolUse;
use crate::tool_use::ParsedToolCall;
use crate::tool_use::ToolUse;

#[derive(Debug, Clone)]
pub struct ToolArgMapper {
    registry: ArgExtractorRegistry,
}

impl Default for ToolArgMapper {
    fn default() -> Self {
        Self::new(ArgExtractorRegistry::with_builtins())
    }
}

impl ToolArgMapper {
    pub fn new(registry: ArgExtractorRegistry) -> Self {
        Self { registry }
    }

    pub fn registry_mut(&mut self) -> &mut ArgExtractorRegistry {
        &mut self.registry
    }

    /// Advisory record for arguments still streaming. Never fails.
    pub fn map_partial(
        &self,
        id: &str,
        emitted_name: &str,
        resolved: &ResolvedName,
        args: &Value,
    ) -> Option<ParsedToolCall> {
        match self.build(id, emitted_name, resolved, args, ParseMode::Partial) {
            Ok(call) => Some(call),
            Err(err) => {
                trace!(call_id = %id, error = %err, "no partial record yet");
                None
            }
        }
    }

    /// Authoritative record for complete arguments.
    pub fn map_final(
        &self,
        id: &str,
        emitted_name: &str,
        resolved: &ResolvedName,
        args: &Value,
    ) -> Result<ParsedToolCall> {
        self.build(id, emitted_name, resolved, args, ParseMode::Final)
    }

    fn build(
        &self,
        id: &str,
        emitted_name: &str,
        resolved: &ResolvedName,
        args: &Value,
        mode: ParseMode,
    ) -> Result<ParsedToolCall> {
        let tool = resolved.canonical_name();
        let args = unwrap_double_encoded(args);
        let Some(map) = args.as_object() else {
            return args_error::InvalidPayloadSnafu {
                tool,
                message: format!("expected a JSON object, got {}", value_kind(&args)),
            }
            .fail();
        };
        let partial = !mode.is_final();

        if let ResolvedName::Integration {
            name,
            server_name,
            tool_name,
        } = resolved
        {
            return Ok(ParsedToolCall::Integration(DynamicIntegrationToolUse {
                id: id.to_string(),
                name: name.clone(),
                server_name: server_name.clone(),
                tool_name: tool_name.clone(),
                arguments: map.clone(),
                partial,
            }));
        }

        let native_args = match self.registry.get(tool) {
            Some(extractor) => extractor(&ArgMap::new(map), mode),
            None if matches!(resolved, ResolvedName::Custom(_)) => {
                Some(NativeArgs::Custom(Value::Object(map.clone())))
            }
            None => return args_error::MissingExtractorSnafu { tool }.fail(),
        };
        if mode.is_final() && native_args.is_none() {
            return args_error::InvalidPayloadSnafu {
                tool,
                message: "the model produced an invalid call payload matching no known shape",
            }
            .fail();
        }

        let used_legacy_format = native_args
            .as_ref()
            .is_some_and(NativeArgs::used_legacy_format);
        Ok(ParsedToolCall::Tool(ToolUse {
            id: id.to_string(),
            name: tool.to_string(),
            params: stringify_params(map),
            native_args,
            partial,
            original_name: (emitted_name != tool).then(|| emitted_name.to_string()),
            used_legacy_format,
        }))
    }
}

/// A whole payload sent as a JSON string holding an object.
fn unwrap_double_encoded(args: &Value) -> Cow<'_, Value> {
    if let Value::String(text) = args
        && let Ok(inner @ Value::Object(_)) = serde_json::from_str::<Value>(text)
    {
        return Cow::Owned(inner);
    }
    Cow::Borrowed(args)
}

fn stringify_params(map: &Map<String, Value>) -> BTreeMap<String, String> {
    map.iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| {
            let text = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.clone(), text)
        })
        .collect()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "mapper.test.rs"]
mod tests;
