//! Client error types.
//!
//! Every failure a remote call can produce maps onto one of these variants.
//! Nothing is retried; the caller decides what to do with the error.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum ClientError {
    #[error("Failed to reach the BsonDB API")]
    #[diagnostic(
        code(bsondb::client::transport),
        help(
            "Check your network connection.\nOr set BSONDB_API_URL to point to a reachable server."
        )
    )]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP status error: {status} {reason}")]
    #[diagnostic(code(bsondb::client::http_status))]
    HttpStatus {
        status: u16,
        reason: String,
        body: String,
    },

    #[error("Invalid response from BsonDB API: {message}")]
    #[diagnostic(
        code(bsondb::client::decode),
        help("The server returned data in an unexpected format.")
    )]
    Decode { message: String },

    #[error("Failed to encode request body: {message}")]
    #[diagnostic(code(bsondb::client::encode))]
    Encode { message: String },

    #[error("Invalid query: {message}")]
    #[diagnostic(code(bsondb::client::validation))]
    Validation { message: String },
}

impl ClientError {
    /// HTTP status code carried by the error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode {
            message: e.to_string(),
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
