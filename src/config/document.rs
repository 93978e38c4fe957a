//! Structural decoding of raw config documents.
//!
//! Turns bytes into a flat, untyped key/value mapping. No coercion happens
//! here; values keep the dynamic kind the document gave them.

use std::fmt;

use serde_json::{Map, Value};

use crate::config::error::ConfigError;

/// Dynamic kind of a decoded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Number,
    Bool,
    Sequence,
    Mapping,
    Null,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => ValueKind::String,
            Value::Number(_) => ValueKind::Number,
            Value::Bool(_) => ValueKind::Bool,
            Value::Array(_) => ValueKind::Sequence,
            Value::Object(_) => ValueKind::Mapping,
            Value::Null => ValueKind::Null,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Bool => "boolean",
            ValueKind::Sequence => "sequence",
            ValueKind::Mapping => "mapping",
            ValueKind::Null => "null",
        };
        f.write_str(name)
    }
}

/// Decoded, not yet validated config document.
///
/// Owned by a single binding pass and never shared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDocument {
    fields: Map<String, Value>,
}

impl RawDocument {
    /// Decode a single top-level object.
    ///
    /// Anything else (syntax errors, a top-level array or scalar) is a
    /// parse error. Duplicate keys keep the last occurrence.
    pub fn decode(bytes: &[u8]) -> Result<Self, ConfigError> {
        let fields: Map<String, Value> =
            serde_json::from_slice(bytes).map_err(|source| ConfigError::Parse { source })?;

        tracing::debug!(keys = fields.len(), "Config document decoded");
        Ok(Self { fields })
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl From<Map<String, Value>> for RawDocument {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}
