//! Loosely typed argument access.
//!
//! Models frequently send `"true"` for `true`, `"5"` for `5`, or a JSON array
//! serialized into a string. Accessors coerce toward the type the caller asks
//! for and leave everything else alone: a string field is never decoded.

use std::borrow::Cow;

use serde_json::Map;
use serde_json::Value;

/// Read-only view over a JSON object of tool arguments.
#[derive(Debug, Clone, Copy)]
pub struct ArgMap<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> ArgMap<'a> {
    pub fn new(map: &'a Map<String, Value>) -> Self {
        Self { map }
    }

    /// `None` unless `value` is an object.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        value.as_object().map(Self::new)
    }

    pub fn inner(&self) -> &'a Map<String, Value> {
        self.map
    }

    /// Present and not `null`.
    pub fn has(&self, key: &str) -> bool {
        self.map.get(key).is_some_and(|v| !v.is_null())
    }

    pub fn raw(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    /// Strings as-is; numbers and booleans rendered as text.
    pub fn string(&self, key: &str) -> Option<String> {
        match self.raw(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Like [`ArgMap::string`] but treats blank text as absent.
    pub fn non_empty_string(&self, key: &str) -> Option<String> {
        self.string(key).filter(|s| !s.trim().is_empty())
    }

    pub fn bool(&self, key: &str) -> Option<bool> {
        match self.raw(key)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => parse_bool(s),
            _ => None,
        }
    }

    /// Integers, integral floats, and numeric strings.
    pub fn int(&self, key: &str) -> Option<i64> {
        self.raw(key).and_then(value_to_int)
    }

    /// Arrays, or strings holding a JSON array.
    pub fn array(&self, key: &str) -> Option<Cow<'a, [Value]>> {
        match self.raw(key)? {
            Value::Array(items) => Some(Cow::Borrowed(items.as_slice())),
            Value::String(s) => match decode_embedded(s)? {
                Value::Array(items) => Some(Cow::Owned(items)),
                _ => None,
            },
            _ => None,
        }
    }

    /// Objects, or strings holding a JSON object.
    pub fn object(&self, key: &str) -> Option<Cow<'a, Map<String, Value>>> {
        match self.raw(key)? {
            Value::Object(map) => Some(Cow::Borrowed(map)),
            Value::String(s) => match decode_embedded(s)? {
                Value::Object(map) => Some(Cow::Owned(map)),
                _ => None,
            },
            _ => None,
        }
    }
}

pub fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

pub fn value_to_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

// Only decodes text that looks like a JSON container.
fn decode_embedded(text: &str) -> Option<Value> {
    let trimmed = text.trim();
    if !(trimmed.starts_with('[') || trimmed.starts_with('{')) {
        return None;
    }
    serde_json::from_str(trimmed).ok()
}

#[cfg(test)]
#[path = "coerce.test.rs"]
mod tests;
