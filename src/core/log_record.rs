//! Log record structure

use super::error::Result;
use super::log_attr::{AttrValue, LogAttr};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// Attribute key under which a logger stores its module name
pub const ATTR_KEY_MODULE: &str = "module";

/// A single log event handed to a [`LogHandler`](super::LogHandler).
///
/// Records are built once per emitted call and moved into the handler; the
/// facade keeps no reference to them afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub message: String,
    pub level: LogLevel,
    pub attrs: Vec<LogAttr>,
}

impl LogRecord {
    pub fn new(level: LogLevel, message: impl Into<String>, attrs: Vec<LogAttr>) -> Self {
        Self {
            message: message.into(),
            level,
            attrs,
        }
    }

    /// First attribute value stored under `key`
    pub fn attr(&self, key: &str) -> Option<&AttrValue> {
        self.attrs
            .iter()
            .find(|attr| attr.key == key)
            .map(|attr| &attr.value)
    }

    /// Module name tagged by the emitting logger
    ///
    /// Loggers append the module attribute last, so the search runs from the
    /// back to skip any caller-supplied attribute with the same key.
    pub fn module(&self) -> Option<&str> {
        self.attrs
            .iter()
            .rev()
            .find(|attr| attr.key == ATTR_KEY_MODULE)
            .and_then(|attr| attr.value.as_str())
    }

    /// Format attributes as key=value pairs
    pub fn format_attrs(&self) -> String {
        self.attrs
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Serialize to a JSON object `{"level", "message", "attrs": {..}}`
    ///
    /// Attributes are nested so a caller key can never shadow the record's own
    /// fields. Within `attrs`, a later attribute overwrites an earlier one with
    /// the same key.
    pub fn to_json(&self) -> Result<String> {
        let attrs: serde_json::Map<String, serde_json::Value> = self
            .attrs
            .iter()
            .map(|attr| (attr.key.clone(), attr.value.to_json_value()))
            .collect();

        let mut object = serde_json::Map::with_capacity(3);
        object.insert("level".into(), serde_json::to_value(self.level)?);
        object.insert("message".into(), self.message.clone().into());
        object.insert("attrs".into(), attrs.into());
        Ok(serde_json::to_string(&object)?)
    }
}
