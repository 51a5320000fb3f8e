//! Key-value attributes carried by a log record

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value of a structured attribute.
///
/// The facade never inspects values; it only carries them from the call site
/// to the handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    String(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::String(s) => write!(f, "{}", s),
            AttrValue::Int(i) => write!(f, "{}", i),
            AttrValue::UInt(u) => write!(f, "{}", u),
            AttrValue::Float(fl) => write!(f, "{}", fl),
            AttrValue::Bool(b) => write!(f, "{}", b),
            AttrValue::Null => write!(f, "null"),
        }
    }
}

impl AttrValue {
    /// Borrow the string payload, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Convert to serde_json::Value for JSON serialization
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            AttrValue::String(s) => serde_json::Value::String(s.clone()),
            AttrValue::Int(i) => serde_json::Value::Number((*i).into()),
            AttrValue::UInt(u) => serde_json::Value::Number((*u).into()),
            AttrValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            AttrValue::Bool(b) => serde_json::Value::Bool(*b),
            AttrValue::Null => serde_json::Value::Null,
        }
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::String(s)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::String(s.to_string())
    }
}

impl From<&String> for AttrValue {
    fn from(s: &String) -> Self {
        AttrValue::String(s.clone())
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty; $($t:ty),*) => {
        $(
            impl From<$t> for AttrValue {
                fn from(v: $t) -> Self {
                    AttrValue::$variant(v as $target)
                }
            }
        )*
    };
}

impl_from_int!(Int, i64; i8, i16, i32, i64, isize);
impl_from_int!(UInt, u64; u8, u16, u32, u64, usize);

impl From<f32> for AttrValue {
    fn from(f: f32) -> Self {
        AttrValue::Float(f64::from(f))
    }
}

impl From<f64> for AttrValue {
    fn from(f: f64) -> Self {
        AttrValue::Float(f)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(AttrValue::Null, Into::into)
    }
}

/// A single key-value pair attached to a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogAttr {
    pub key: String,
    pub value: AttrValue,
}

impl LogAttr {
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<AttrValue>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl<K, V> From<(K, V)> for LogAttr
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from((key, value): (K, V)) -> Self {
        LogAttr::new(key, value)
    }
}

impl fmt::Display for LogAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}
