use miette::Diagnostic;
use thiserror::Error;

use crate::client::ClientError;
use crate::schema::SchemaError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Schema(#[from] SchemaError),

    #[error("Error creating tables: {message}")]
    #[diagnostic(
        code(bsondb::cli::migration_rejected),
        help("The server refused the migration. No tables were changed.")
    )]
    MigrationRejected { message: String },

    #[error("Terminal I/O failed")]
    #[diagnostic(code(bsondb::cli::io))]
    Io {
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(source: std::io::Error) -> Self {
        CliError::Io { source }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Schema(SchemaError::from(e))
    }
}

pub type CliResult<T> = Result<T, CliError>;
