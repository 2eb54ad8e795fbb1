//! Schema scaffold command.

use std::path::Path;

use crate::cli::error::CliResult;
use crate::schema;

/// Write a starter schema file with one example table.
pub fn init(path: &Path, force: bool) -> CliResult<String> {
    let descriptor = schema::write_starter(path, force)?;
    Ok(format!(
        "✓ Created {} with {} example table\n  Set DatabaseID to your database identifier, then run: bsondb migrate",
        path.display(),
        descriptor.tables.len()
    ))
}
