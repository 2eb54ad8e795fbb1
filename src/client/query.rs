//! Typed query parameters for the per-entry operations.
//!
//! Each operation takes its own query type so required fields are enforced
//! at compile time. Callers holding an ad hoc JSON query bag (keys `where`,
//! `set`, `get`, `is`) can convert it with `TryFrom`, which reports every
//! missing key as a `ClientError::Validation`.

use serde_json::{Map, Value};

use crate::client::error::{ClientError, ClientResult};

/// Replace the fields of one entry: `{ where: <entry id>, set: <fields> }`.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateQuery {
    pub entry_id: String,
    pub set: Value,
}

impl UpdateQuery {
    pub fn new(entry_id: impl Into<String>, set: impl Into<Value>) -> Self {
        Self {
            entry_id: entry_id.into(),
            set: set.into(),
        }
    }
}

/// Remove one entry: `{ where: <entry id> }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteQuery {
    pub entry_id: String,
}

impl DeleteQuery {
    pub fn new(entry_id: impl Into<String>) -> Self {
        Self {
            entry_id: entry_id.into(),
        }
    }
}

/// Fetch one entry: `{ where: <entry id> }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryQuery {
    pub entry_id: String,
}

impl EntryQuery {
    pub fn new(entry_id: impl Into<String>) -> Self {
        Self {
            entry_id: entry_id.into(),
        }
    }
}

/// Fetch a single field of one entry: `{ where: <entry id>, get: <field> }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldQuery {
    pub entry_id: String,
    pub field: String,
}

impl FieldQuery {
    pub fn new(entry_id: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            entry_id: entry_id.into(),
            field: field.into(),
        }
    }
}

/// Fetch every entry whose `field` equals `value`: `{ where: <field>, is: <value> }`.
#[derive(Debug, Clone, PartialEq)]
pub struct EntriesQuery {
    pub field: String,
    pub value: Value,
}

impl EntriesQuery {
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Reject the bag unless every key in `keys` is present and non-null.
fn require(query: &Map<String, Value>, keys: &[&str]) -> ClientResult<()> {
    let missing: Vec<&str> = keys
        .iter()
        .copied()
        .filter(|key| query.get(*key).is_none_or(Value::is_null))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ClientError::Validation {
            message: format!("missing required query key(s): {}", missing.join(", ")),
        })
    }
}

fn string_key(query: &Map<String, Value>, key: &str) -> ClientResult<String> {
    match query.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(ClientError::Validation {
            message: format!("query key '{}' must be a string", key),
        }),
    }
}

fn value_key(query: &Map<String, Value>, key: &str) -> Value {
    query.get(key).cloned().unwrap_or(Value::Null)
}

impl TryFrom<&Map<String, Value>> for UpdateQuery {
    type Error = ClientError;

    fn try_from(query: &Map<String, Value>) -> ClientResult<Self> {
        require(query, &["where", "set"])?;
        Ok(Self {
            entry_id: string_key(query, "where")?,
            set: value_key(query, "set"),
        })
    }
}

impl TryFrom<&Map<String, Value>> for DeleteQuery {
    type Error = ClientError;

    fn try_from(query: &Map<String, Value>) -> ClientResult<Self> {
        require(query, &["where"])?;
        Ok(Self {
            entry_id: string_key(query, "where")?,
        })
    }
}

impl TryFrom<&Map<String, Value>> for EntryQuery {
    type Error = ClientError;

    fn try_from(query: &Map<String, Value>) -> ClientResult<Self> {
        require(query, &["where"])?;
        Ok(Self {
            entry_id: string_key(query, "where")?,
        })
    }
}

impl TryFrom<&Map<String, Value>> for FieldQuery {
    type Error = ClientError;

    fn try_from(query: &Map<String, Value>) -> ClientResult<Self> {
        require(query, &["where", "get"])?;
        Ok(Self {
            entry_id: string_key(query, "where")?,
            field: string_key(query, "get")?,
        })
    }
}

impl TryFrom<&Map<String, Value>> for EntriesQuery {
    type Error = ClientError;

    fn try_from(query: &Map<String, Value>) -> ClientResult<Self> {
        require(query, &["where", "is"])?;
        Ok(Self {
            field: string_key(query, "where")?,
            value: value_key(query, "is"),
        })
    }
}
