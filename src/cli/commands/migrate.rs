//! Table migration: confirm, load and validate, submit.

use std::io::{BufRead, Write};
use std::path::Path;

use tracing::debug;

use crate::cli::error::{CliError, CliResult};
use crate::cli::prompt::confirm;
use crate::client::{ApiClient, MigrationOutcome, migrate_tables};
use crate::schema;

pub const MIGRATION_PROMPT: &str =
    "Are you sure you want to continue? All table data will be lost. (yes/no): ";

pub const CANCELLED_MESSAGE: &str = "The migration has been canceled.";

/// Where to inspect the database once the migration is through.
pub const DASHBOARD_URL: &str = "https://bson-api.com/";

/// Replace the remote tables with the ones described in `path`.
///
/// Unless `assume_yes` is set, the user must confirm on `input` first. Any
/// answer other than yes leaves the file unread and the server untouched.
/// Progress lines go to `output`; the final message is returned.
pub async fn migrate<R: BufRead, W: Write>(
    api_client: &ApiClient,
    path: &Path,
    assume_yes: bool,
    input: &mut R,
    output: &mut W,
) -> CliResult<String> {
    if !assume_yes && !confirm(MIGRATION_PROMPT, input, output)? {
        return Ok(CANCELLED_MESSAGE.to_string());
    }

    let descriptor = schema::load(path)?;
    debug!(path = %path.display(), tables = descriptor.tables.len(), "schema validated");
    writeln!(
        output,
        "Migrating {} table(s) for database {}...",
        descriptor.tables.len(),
        descriptor.database_id
    )?;

    match migrate_tables(api_client, &descriptor).await? {
        MigrationOutcome::Created { tables } => Ok(format!(
            "{} tables have been created successfully.\nGo to {} to view your database.",
            tables, DASHBOARD_URL
        )),
        MigrationOutcome::Rejected { error } => Err(CliError::MigrationRejected { message: error }),
    }
}
