use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Field type tags accepted in an entry template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    String,
    Number,
    Boolean,
    Object,
}

impl TypeTag {
    pub const ALL: [TypeTag; 4] = [
        TypeTag::String,
        TypeTag::Number,
        TypeTag::Boolean,
        TypeTag::Object,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::String => "string",
            TypeTag::Number => "number",
            TypeTag::Boolean => "boolean",
            TypeTag::Object => "object",
        }
    }

    /// Parse a template value; only the four tag strings are recognised.
    pub fn from_value(value: &Value) -> Option<Self> {
        let tag = value.as_str()?;
        Self::ALL.into_iter().find(|t| t.as_str() == tag)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of one table as submitted to the migration endpoint.
///
/// Fields default when absent or null so that an incomplete table surfaces
/// as a validation error naming the problem rather than a decode error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub identifier: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub requires: Vec<String>,
    #[serde(
        default,
        rename = "entryTemplate",
        deserialize_with = "null_as_default"
    )]
    pub entry_template: Map<String, Value>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Table {
    pub fn new(name: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
            ..Default::default()
        }
    }

    /// Add a required field with the given type.
    pub fn required_field(mut self, field: impl Into<String>, tag: TypeTag) -> Self {
        let field = field.into();
        self.requires.push(field.clone());
        self.entry_template.insert(field, Value::from(tag.as_str()));
        self
    }

    /// Add an optional field with the given type.
    pub fn field(mut self, field: impl Into<String>, tag: TypeTag) -> Self {
        self.entry_template
            .insert(field.into(), Value::from(tag.as_str()));
        self
    }
}

/// Contents of a local schema file: one database and its tables.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DatabaseDescriptor {
    #[serde(rename = "DatabaseID", default, deserialize_with = "null_as_default")]
    pub database_id: String,
    #[serde(rename = "Tables", default, deserialize_with = "null_as_default")]
    pub tables: Vec<Table>,
}
