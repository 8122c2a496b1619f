//! Structured fragment: key/value entries that render as one JSON object.

use serde_json::{Map, Value};

/// Accumulates structured entries. Unlike the text-like fragments this one
/// renders to a data value, which makes it incompatible with them at
/// assembly time — mixing kinds is a fail-fast condition there.
#[derive(Debug, Clone, Default)]
pub struct Data {
    entries: Map<String, Value>,
}

impl Data {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn render(&self) -> Map<String, Value> {
        self.entries.clone()
    }
}
