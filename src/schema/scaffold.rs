use std::fs;
use std::path::Path;

use tracing::debug;

use crate::schema::error::{SchemaError, SchemaResult};
use crate::schema::model::{DatabaseDescriptor, Table, TypeTag};

/// Default schema file name, relative to the working directory.
pub const DEFAULT_SCHEMA_FILE: &str = "tables.json";

/// Placeholder the user replaces with their real database identifier.
pub const DATABASE_ID_PLACEHOLDER: &str = "Put database ID here";

/// Starter descriptor with a single `users` table keyed by email.
pub fn starter_descriptor() -> DatabaseDescriptor {
    DatabaseDescriptor {
        database_id: DATABASE_ID_PLACEHOLDER.to_string(),
        tables: vec![
            Table::new("users", "email")
                .required_field("email", TypeTag::String)
                .required_field("password", TypeTag::String),
        ],
    }
}

/// Write the starter descriptor to `path`.
///
/// An existing file is only replaced when `force` is set.
pub fn write_starter(path: &Path, force: bool) -> SchemaResult<DatabaseDescriptor> {
    if path.exists() && !force {
        return Err(SchemaError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    let descriptor = starter_descriptor();
    let mut contents = serde_json::to_string_pretty(&descriptor)?;
    contents.push('\n');

    fs::write(path, contents).map_err(|source| SchemaError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "wrote starter schema");

    Ok(descriptor)
}
