use crate::error::{GitHubReposError, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// A single untyped value from the GitHub API payload.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    /// Arrays and objects
    Nested(Value),
}

impl RawValue {
    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }

    /// Text form of the value, `None` for null.
    pub fn to_text(&self) -> Option<String> {
        match self {
            RawValue::Null => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Null => write!(f, "null"),
            RawValue::Bool(b) => write!(f, "{}", b),
            RawValue::Number(n) => write!(f, "{}", n),
            RawValue::Text(s) => write!(f, "{}", s),
            RawValue::Nested(v) => write!(f, "{}", v),
        }
    }
}

impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => RawValue::Null,
            Value::Bool(b) => RawValue::Bool(b),
            Value::Number(n) => RawValue::Number(n),
            Value::String(s) => RawValue::Text(s),
            nested @ (Value::Array(_) | Value::Object(_)) => RawValue::Nested(nested),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

/// One repository as delivered by `GET /users/{owner}/repos`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    fields: HashMap<String, RawValue>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RawValue>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.fields.get(key)
    }

    /// Present and non-null, otherwise `MissingField`.
    pub fn require(&self, key: &str) -> Result<&RawValue> {
        match self.fields.get(key) {
            Some(value) if !value.is_null() => Ok(value),
            _ => Err(GitHubReposError::MissingField(key.to_string())),
        }
    }

    pub fn require_text(&self, key: &str) -> Result<String> {
        self.require(key).map(|value| value.to_string())
    }

    /// Absent and null both read as `None`.
    pub fn optional_text(&self, key: &str) -> Option<String> {
        self.fields.get(key).and_then(RawValue::to_text)
    }
}

impl FromIterator<(String, RawValue)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (String, RawValue)>>(iter: I) -> Self {
        RawRecord {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Decode a JSON array of objects into raw records.
///
/// An absent body is an `InvalidArgument`, never an empty list. A `null`
/// element decodes to `None` and is rejected when it is mapped.
pub fn decode_records(json: Option<&str>) -> Result<Vec<Option<RawRecord>>> {
    let json = json.ok_or_else(|| {
        GitHubReposError::InvalidArgument("JSON body must not be absent".to_string())
    })?;

    let items = match serde_json::from_str::<Value>(json)? {
        Value::Array(items) => items,
        other => {
            return Err(GitHubReposError::ParseError(format!(
                "Expected a JSON array, found {}",
                json_kind(&other)
            )));
        }
    };

    let records = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => Ok(Some(
                map.into_iter()
                    .map(|(key, value)| (key, RawValue::from(value)))
                    .collect::<RawRecord>(),
            )),
            Value::Null => Ok(None),
            other => Err(GitHubReposError::ParseError(format!(
                "Expected an object at index {}, found {}",
                index,
                json_kind(&other)
            ))),
        })
        .collect::<Result<Vec<Option<RawRecord>>>>()?;

    debug!(count = records.len(), "Decoded raw repository records");
    Ok(records)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
