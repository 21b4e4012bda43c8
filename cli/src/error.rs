//! Error types for the CLI

use std::path::PathBuf;

use sql2struct_codegen::{FilterError, ParseError, TemplateError};
use thiserror::Error;

use crate::config::ConfigError;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Could not reach the database
    #[error("Connection error: {0}")]
    Connection(String),

    /// Listing tables or fetching DDL failed
    #[error("{}", query_message(.table, .message))]
    Query {
        table: Option<String>,
        message: String,
    },

    /// DDL could not be parsed
    #[error("Failed to parse DDL of table '{table}': {source}")]
    Parse {
        table: String,
        #[source]
        source: ParseError,
    },

    /// Go source could not be rendered
    #[error("Failed to generate code for table '{table}': {source}")]
    Template {
        table: String,
        #[source]
        source: TemplateError,
    },

    /// Invalid table filter
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// I/O error
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Database driver not compiled in
    #[error("Database driver not enabled. Rebuild with `--features {feature}`")]
    MissingDriver { feature: &'static str },

    /// Some tables failed; each failure was already reported
    #[error("{failed} of {total} table(s) failed")]
    TablesFailed { failed: usize, total: usize },

    /// Other errors
    #[error("{0}")]
    Other(String),
}

fn query_message(table: &Option<String>, message: &str) -> String {
    match table {
        Some(t) => format!("Query failed for table '{t}': {message}"),
        None => format!("Query failed: {message}"),
    }
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn query(table: Option<&str>, message: impl std::fmt::Display) -> Self {
        Self::Query {
            table: table.map(str::to_string),
            message: message.to_string(),
        }
    }
}
