use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use crate::client::api_client::ApiClient;
use crate::client::error::ClientResult;
use crate::client::query::{DeleteQuery, EntriesQuery, EntryQuery, FieldQuery, UpdateQuery};
use crate::client::response::ApiResponse;

pub(crate) const ADD_ENTRY_PATH: &str = "/api/add-entry";
pub(crate) const UPDATE_FIELD_PATH: &str = "/api/update-field";
pub(crate) const DELETE_ENTRY_PATH: &str = "/api/delete-entry";
pub(crate) const TABLE_PATH: &str = "/api/table";
pub(crate) const ENTRY_PATH: &str = "/api/entry";
pub(crate) const FIELD_PATH: &str = "/api/field";
pub(crate) const ENTRIES_PATH: &str = "/api/entries";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TableRequest<'a> {
    pub(crate) database_id: &'a str,
    pub(crate) table: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddEntryRequest<'a> {
    pub(crate) database_id: &'a str,
    pub(crate) table: &'a str,
    pub(crate) entry: &'a Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateEntryRequest<'a> {
    pub(crate) database_id: &'a str,
    pub(crate) table: &'a str,
    pub(crate) entry_id: &'a str,
    pub(crate) entry: &'a Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EntryRequest<'a> {
    pub(crate) database_id: &'a str,
    pub(crate) table: &'a str,
    pub(crate) entry_id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FieldRequest<'a> {
    pub(crate) database_id: &'a str,
    pub(crate) table: &'a str,
    pub(crate) entry_id: &'a str,
    pub(crate) field: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EntriesRequest<'a> {
    pub(crate) database_id: &'a str,
    pub(crate) table: &'a str,
    pub(crate) field: &'a str,
    pub(crate) value: &'a Value,
}

/// Handle to one logical database on the BsonDB service.
///
/// Every method performs exactly one HTTP round trip and returns the raw
/// response payload. The handle itself is immutable.
#[derive(Debug, Clone)]
pub struct BsonDb {
    database_id: String,
    api_client: ApiClient,
}

impl BsonDb {
    pub fn new(database_id: impl Into<String>, api_client: ApiClient) -> Self {
        Self {
            database_id: database_id.into(),
            api_client,
        }
    }

    pub fn database_id(&self) -> &str {
        &self.database_id
    }

    pub fn api_client(&self) -> &ApiClient {
        &self.api_client
    }

    /// Insert a new entry into `table`.
    #[instrument(skip(self, entry), fields(database_id = %self.database_id))]
    pub async fn create_entry(&self, table: &str, entry: &Value) -> ClientResult<ApiResponse> {
        let body = AddEntryRequest {
            database_id: &self.database_id,
            table,
            entry,
        };
        self.api_client
            .request_bytes(Method::POST, ADD_ENTRY_PATH, Some(&body))
            .await
    }

    /// Overwrite the fields of the entry identified by `query.entry_id`.
    #[instrument(skip(self, query), fields(database_id = %self.database_id, entry_id = %query.entry_id))]
    pub async fn update_entry(&self, table: &str, query: &UpdateQuery) -> ClientResult<ApiResponse> {
        let body = UpdateEntryRequest {
            database_id: &self.database_id,
            table,
            entry_id: &query.entry_id,
            entry: &query.set,
        };
        self.api_client
            .request_bytes(Method::PUT, UPDATE_FIELD_PATH, Some(&body))
            .await
    }

    #[instrument(skip(self, query), fields(database_id = %self.database_id, entry_id = %query.entry_id))]
    pub async fn delete_entry(&self, table: &str, query: &DeleteQuery) -> ClientResult<ApiResponse> {
        let body = EntryRequest {
            database_id: &self.database_id,
            table,
            entry_id: &query.entry_id,
        };
        self.api_client
            .request_bytes(Method::POST, DELETE_ENTRY_PATH, Some(&body))
            .await
    }

    /// Fetch every entry of `table`.
    #[instrument(skip(self), fields(database_id = %self.database_id))]
    pub async fn get_table(&self, table: &str) -> ClientResult<ApiResponse> {
        let body = TableRequest {
            database_id: &self.database_id,
            table,
        };
        self.api_client
            .request_bytes(Method::POST, TABLE_PATH, Some(&body))
            .await
    }

    #[instrument(skip(self, query), fields(database_id = %self.database_id, entry_id = %query.entry_id))]
    pub async fn get_entry(&self, table: &str, query: &EntryQuery) -> ClientResult<ApiResponse> {
        let body = EntryRequest {
            database_id: &self.database_id,
            table,
            entry_id: &query.entry_id,
        };
        self.api_client
            .request_bytes(Method::POST, ENTRY_PATH, Some(&body))
            .await
    }

    /// Fetch one field of one entry.
    #[instrument(skip(self, query), fields(database_id = %self.database_id, entry_id = %query.entry_id))]
    pub async fn get_field(&self, table: &str, query: &FieldQuery) -> ClientResult<ApiResponse> {
        let body = FieldRequest {
            database_id: &self.database_id,
            table,
            entry_id: &query.entry_id,
            field: &query.field,
        };
        self.api_client
            .request_bytes(Method::POST, FIELD_PATH, Some(&body))
            .await
    }

    /// Fetch all entries whose `query.field` equals `query.value`.
    #[instrument(skip(self, query), fields(database_id = %self.database_id, field = %query.field))]
    pub async fn get_entries(&self, table: &str, query: &EntriesQuery) -> ClientResult<ApiResponse> {
        let body = EntriesRequest {
            database_id: &self.database_id,
            table,
            field: &query.field,
            value: &query.value,
        };
        self.api_client
            .request_bytes(Method::POST, ENTRIES_PATH, Some(&body))
            .await
    }
}
