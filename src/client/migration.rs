use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument};

use crate::client::api_client::ApiClient;
use crate::client::error::ClientResult;
use crate::schema::{DatabaseDescriptor, Table};

pub(crate) const MIGRATE_TABLES_PATH: &str = "/api/migrate-tables";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MigrateTablesRequest<'a> {
    pub(crate) database_id: &'a str,
    pub(crate) tables: &'a [Table],
}

/// What the server made of a migration request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// All submitted tables were accepted.
    Created { tables: usize },
    /// The server answered with an `error` field.
    Rejected { error: String },
}

/// Submit every table of `descriptor`, replacing the remote schema.
///
/// The descriptor is sent as-is; run `schema::validate` first.
#[instrument(skip(api_client, descriptor), fields(database_id = %descriptor.database_id, tables = descriptor.tables.len()))]
pub async fn migrate_tables(
    api_client: &ApiClient,
    descriptor: &DatabaseDescriptor,
) -> ClientResult<MigrationOutcome> {
    let body = MigrateTablesRequest {
        database_id: &descriptor.database_id,
        tables: &descriptor.tables,
    };
    let response = api_client
        .request_json(Method::POST, MIGRATE_TABLES_PATH, Some(&body))
        .await?;

    match response.get("error") {
        None | Some(Value::Null) => {
            info!("tables migrated");
            Ok(MigrationOutcome::Created {
                tables: descriptor.tables.len(),
            })
        }
        Some(Value::String(error)) => Ok(MigrationOutcome::Rejected {
            error: error.clone(),
        }),
        Some(other) => Ok(MigrationOutcome::Rejected {
            error: other.to_string(),
        }),
    }
}
