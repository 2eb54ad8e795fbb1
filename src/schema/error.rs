//! Schema file error types.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum SchemaError {
    #[error("Failed to access {}", path.display())]
    #[diagnostic(code(bsondb::schema::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed schema file: {message}")]
    #[diagnostic(
        code(bsondb::schema::decode),
        help("The schema file must be a JSON object with DatabaseID and Tables keys.")
    )]
    Decode { message: String },

    #[error("Invalid table object '{table}': {property} is missing or empty")]
    #[diagnostic(
        code(bsondb::schema::missing_property),
        help("Table object must have identifier, name, entryTemplate, and requires properties.")
    )]
    MissingProperty { table: String, property: &'static str },

    #[error(
        "Invalid type {value} for {field} in {table}. Valid types are: string, number, boolean, object"
    )]
    #[diagnostic(code(bsondb::schema::invalid_type))]
    InvalidFieldType {
        table: String,
        field: String,
        value: String,
    },

    #[error("Identifier '{identifier}' of table {table} is not declared in entryTemplate")]
    #[diagnostic(code(bsondb::schema::undeclared_identifier))]
    UndeclaredIdentifier { table: String, identifier: String },

    #[error("Identifier '{identifier}' of table {table} must be of type string.")]
    #[diagnostic(
        code(bsondb::schema::identifier_type),
        help("Declare the identifier field as \"string\" in entryTemplate.")
    )]
    IdentifierNotString { table: String, identifier: String },

    #[error("{} already exists", path.display())]
    #[diagnostic(
        code(bsondb::schema::already_exists),
        help("Pass --force to overwrite it.")
    )]
    AlreadyExists { path: PathBuf },
}

impl From<serde_json::Error> for SchemaError {
    fn from(e: serde_json::Error) -> Self {
        SchemaError::Decode {
            message: e.to_string(),
        }
    }
}

pub type SchemaResult<T> = Result<T, SchemaError>;
