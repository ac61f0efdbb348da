use std::fmt;

use serde::Deserialize;
use serde::de::Error as _;
use serde_json::Value;

/// One decoded log line as produced by the upstream scanner.
///
/// String-typed fields must be JSON strings; a missing field or a non-string
/// value for one of them fails decoding. The numeric fields accept any JSON
/// value and are checked later by the validator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    /// Unix timestamp in seconds.
    pub ts: FieldValue,
    /// Processing time.
    pub pt: FieldValue,
    pub sha: String,
    /// Path the file was observed at.
    pub ph: String,
    /// File name, base name plus extension.
    pub nm: String,
    /// Disposition code.
    pub dp: FieldValue,
    pub si: String,
    pub uu: String,
    pub bg: String,
}

impl Record {
    /// Decode a single line of input.
    ///
    /// # Errors
    /// Returns the decoder error if the line is not a JSON object carrying every
    /// required field. Arrays are rejected even when they hold the right number
    /// of elements.
    pub fn from_json_line(line: &str) -> serde_json::Result<Self> {
        match serde_json::from_str::<Value>(line)? {
            value @ Value::Object(_) => Self::deserialize(value),
            other => Err(serde_json::Error::custom(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A field that may arrive as a native number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum FieldValue {
    Integer(i128),
    Float(f64),
    Text(String),
    /// `null`, booleans, arrays and objects.
    Other(Value),
}

impl FieldValue {
    /// Normalize to an integer.
    ///
    /// Strings are trimmed and parsed as base-10; floats and non-scalar values
    /// never convert, even when their value is integral.
    #[must_use]
    pub fn as_integer(&self) -> Option<i128> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Float(_) | Self::Other(_) => None,
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Integer(i.into())
                } else if let Some(u) = n.as_u64() {
                    Self::Integer(u.into())
                } else {
                    n.as_f64()
                        .map_or_else(|| Self::Other(Value::Number(n)), Self::Float)
                }
            }
            Value::String(s) => Self::Text(s),
            other => Self::Other(other),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Text(s) => f.write_str(s),
            Self::Other(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
