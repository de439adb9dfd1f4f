//! Tool name -> argument extractor table.

use std::collections::HashMap;

use toolcall_names::BuiltinTool;

use crate::coerce::ArgMap;
use crate::extract;
use crate::native::NativeArgs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Arguments are still streaming; only the gating field is required.
    Partial,
    /// Arguments are complete; every required field must be present.
    Final,
}

impl ParseMode {
    pub fn is_final(self) -> bool {
        self == ParseMode::Final
    }
}

/// Pure mapping from loose arguments to a typed record.
///
/// Returning `None` in [`ParseMode::Final`] rejects the call.
pub type Extractor = fn(&ArgMap<'_>, ParseMode) -> Option<NativeArgs>;

#[derive(Debug, Clone, Default)]
pub struct ArgExtractorRegistry {
    extractors: HashMap<String, Extractor>,
}

impl ArgExtractorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with an extractor for every [`BuiltinTool`].
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (tool, extractor) in extract::BUILTIN_EXTRACTORS {
            registry.register(tool.name(), *extractor);
        }
        registry
    }

    /// Add or replace the extractor for `name`.
    pub fn register(&mut self, name: impl Into<String>, extractor: Extractor) {
        self.extractors.insert(name.into(), extractor);
    }

    pub fn get(&self, name: &str) -> Option<Extractor> {
        self.extractors.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.extractors.contains_key(name)
    }
}

#[cfg(test)]
#[path = "registry.test.rs"]
mod tests;
