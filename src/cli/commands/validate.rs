//! Offline schema check.

use std::path::Path;

use tabled::{Table, Tabled};

use crate::cli::error::CliResult;
use crate::cli::utils::{apply_table_style, format_list, format_template, truncate_with_ellipsis};
use crate::schema::{self, DatabaseDescriptor};

#[derive(Tabled)]
pub(crate) struct TableDisplay {
    #[tabled(rename = "Table")]
    pub(crate) name: String,
    #[tabled(rename = "Identifier")]
    pub(crate) identifier: String,
    #[tabled(rename = "Requires")]
    pub(crate) requires: String,
    #[tabled(rename = "Fields")]
    pub(crate) fields: String,
}

impl From<&schema::Table> for TableDisplay {
    fn from(table: &schema::Table) -> Self {
        Self {
            name: table.name.clone(),
            identifier: table.identifier.clone(),
            requires: truncate_with_ellipsis(&format_list(&table.requires), 40),
            fields: truncate_with_ellipsis(&format_template(&table.entry_template), 60),
        }
    }
}

pub(crate) fn format_table(descriptor: &DatabaseDescriptor) -> String {
    if descriptor.tables.is_empty() {
        return "No tables defined.".to_string();
    }

    let rows: Vec<TableDisplay> = descriptor.tables.iter().map(|t| t.into()).collect();
    let mut table = Table::new(rows);
    apply_table_style(&mut table);
    table.to_string()
}

/// Load and validate a schema file without contacting the server.
pub fn validate(path: &Path, format: &str) -> CliResult<String> {
    let descriptor = schema::load(path)?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&descriptor)?),
        _ => Ok(format!(
            "✓ {} is valid: {} table(s) for database {}\n{}",
            path.display(),
            descriptor.tables.len(),
            descriptor.database_id,
            format_table(&descriptor)
        )),
    }
}
