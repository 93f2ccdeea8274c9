//! Opaque message and task payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Opaque payload carried by messages and tasks.
///
/// The router and coordinator never inspect payload contents; agents
/// exchange any JSON-shaped value. Keeping the wrapper typed makes the
/// boundary checkable without constraining payload shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(Value);

impl Payload {
    /// Creates a payload from a plain text value.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self(Value::String(value.into()))
    }

    /// Creates a payload from an arbitrary JSON value.
    #[must_use]
    pub const fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Returns the payload text when it is a plain string.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.0.as_str()
    }

    /// Returns the underlying JSON value.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.0
    }

    /// Consumes the payload, returning the underlying JSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(text) => f.write_str(text),
            other => write!(f, "{other}"),
        }
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
