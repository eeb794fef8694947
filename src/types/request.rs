use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::Action;
use crate::error::QueryError;

/// A single invocation: `{"action": "...", "params": {...}}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub action: Option<Value>,
    #[serde(default, deserialize_with = "object_or_empty")]
    pub params: Params,
}

/// Anything other than a JSON object leaves the parameters empty.
fn object_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Params, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => Params(map),
        _ => Params::default(),
    })
}

impl Request {
    pub fn new(action: impl Into<String>, params: Params) -> Self {
        Self {
            action: Some(Value::String(action.into())),
            params,
        }
    }

    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        serde_json::from_str(raw).map_err(QueryError::MalformedRequest)
    }

    /// Missing or non-string actions are unknown, not malformed.
    pub fn action(&self) -> Result<Action, QueryError> {
        match &self.action {
            Some(Value::String(name)) => {
                Action::parse(name).ok_or_else(|| QueryError::UnknownAction(name.clone()))
            }
            Some(other) => Err(QueryError::UnknownAction(other.to_string())),
            None => Err(QueryError::UnknownAction(String::new())),
        }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }
}

/// Action parameters. Values may be strings or numbers on the wire.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Text value of `key`. Empty strings, null and non-scalar values count
    /// as absent.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}
