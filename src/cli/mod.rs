pub mod commands;
pub mod error;
pub mod prompt;
pub mod utils;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::client::ApiClient;
use crate::schema::DEFAULT_SCHEMA_FILE;

#[derive(Parser)]
#[command(name = "bsondb")]
#[command(author, version, about = "BsonDB schema and migration CLI", long_about = None)]
pub struct Cli {
    /// Override the API URL (default: BSONDB_API_URL env or https://bsondb.up.railway.app)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Abort requests that take longer than this many seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter schema file with one example table
    Init {
        /// Where to write the schema file
        #[arg(long, default_value = DEFAULT_SCHEMA_FILE)]
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Check a schema file without contacting the server
    Validate {
        /// Schema file to check
        #[arg(long, default_value = DEFAULT_SCHEMA_FILE)]
        file: PathBuf,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Replace the remote tables with the ones in a schema file
    Migrate {
        /// Schema file to submit
        #[arg(long, default_value = DEFAULT_SCHEMA_FILE)]
        file: PathBuf,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Initialize tracing subscriber with env filter, logging to stderr
fn init_tracing(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "bsondb=warn",
        1 => "bsondb=debug",
        _ => "bsondb=trace",
    };

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init();
}

pub async fn run() -> miette::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = match cli.command {
        Some(Commands::Init { path, force }) => commands::init::init(&path, force)?,
        Some(Commands::Validate { file, format }) => commands::validate::validate(&file, &format)?,
        Some(Commands::Migrate { file, yes }) => {
            let api_client =
                ApiClient::with_timeout(cli.api_url, cli.timeout.map(Duration::from_secs))?;
            let mut input = io::stdin().lock();
            let mut stdout = io::stdout();
            commands::migrate::migrate(&api_client, &file, yes, &mut input, &mut stdout).await?
        }
        None => {
            // Show help when no command provided
            let _ = Cli::parse_from(["bsondb", "--help"]);
            return Ok(());
        }
    };

    println!("{}", output);
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_migrate_defaults() {
        let cli = Cli::parse_from(["bsondb", "migrate"]);
        match cli.command {
            Some(Commands::Migrate { file, yes }) => {
                assert_eq!(file, PathBuf::from(DEFAULT_SCHEMA_FILE));
                assert!(!yes);
            }
            _ => panic!("expected migrate command"),
        }
        assert_eq!(cli.verbose, 0);
        assert!(cli.api_url.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "bsondb",
            "migrate",
            "--yes",
            "--file",
            "schema.json",
            "--api-url",
            "http://localhost:4000",
            "--timeout",
            "30",
            "-vv",
        ]);
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:4000"));
        assert_eq!(cli.timeout, Some(30));
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Commands::Migrate { file, yes }) => {
                assert_eq!(file, PathBuf::from("schema.json"));
                assert!(yes);
            }
            _ => panic!("expected migrate command"),
        }
    }

    #[test]
    fn test_init_force_flag() {
        let cli = Cli::parse_from(["bsondb", "init", "--path", "out.json", "--force"]);
        match cli.command {
            Some(Commands::Init { path, force }) => {
                assert_eq!(path, PathBuf::from("out.json"));
                assert!(force);
            }
            _ => panic!("expected init command"),
        }
    }
}
