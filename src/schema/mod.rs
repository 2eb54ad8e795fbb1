//! Local schema files describing the tables of one database.
//!
//! A schema file is read once, checked client-side, and submitted as a whole
//! to the migration endpoint.

pub mod error;
pub mod model;
pub mod scaffold;
pub mod validate;

use std::fs;
use std::path::Path;

pub use error::{SchemaError, SchemaResult};
pub use model::{DatabaseDescriptor, Table, TypeTag};
pub use scaffold::{DEFAULT_SCHEMA_FILE, starter_descriptor, write_starter};
pub use validate::{validate, validate_table};

/// Decode a descriptor from JSON text without validating it.
pub fn parse(contents: &str) -> SchemaResult<DatabaseDescriptor> {
    Ok(serde_json::from_str(contents)?)
}

/// Read and decode a descriptor from disk without validating it.
pub fn read(path: &Path) -> SchemaResult<DatabaseDescriptor> {
    let contents = fs::read_to_string(path).map_err(|source| SchemaError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&contents)
}

/// Read, decode and validate a descriptor.
pub fn load(path: &Path) -> SchemaResult<DatabaseDescriptor> {
    let descriptor = read(path)?;
    validate(&descriptor)?;
    Ok(descriptor)
}
