//! Client library and migration CLI for the BsonDB hosted document database.
//!
//! ```no_run
//! # async fn demo() -> bsondb::client::ClientResult<()> {
//! use bsondb::client::{ApiClient, BsonDb, EntryQuery};
//! use serde_json::json;
//!
//! let db = BsonDb::new("my-database-id", ApiClient::new(None)?);
//! db.create_entry("users", &json!({"email": "ada@example.com", "password": "pw"}))
//!     .await?;
//! let entry = db.get_entry("users", &EntryQuery::new("ada@example.com")).await?;
//! println!("{}", entry.text()?);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod schema;

#[cfg(test)]
mod test_server;
