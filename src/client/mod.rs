//! Client for the BsonDB REST API.
//!
//! `ApiClient` is the single request-dispatch primitive; `BsonDb` builds the
//! fixed-shape request bodies for each entry and table operation on top of it,
//! and `migrate_tables` submits a whole schema descriptor.

pub mod api_client;
pub mod database;
pub mod error;
pub mod migration;
pub mod query;
pub mod response;

pub use api_client::{API_URL_ENV, ApiClient, DEFAULT_API_URL};
pub use database::BsonDb;
pub use error::{ClientError, ClientResult};
pub use migration::{MigrationOutcome, migrate_tables};
pub use query::{DeleteQuery, EntriesQuery, EntryQuery, FieldQuery, UpdateQuery};
pub use response::ApiResponse;




#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;
