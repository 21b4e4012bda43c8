//! Error types for parsing, rendering and filtering

use thiserror::Error;

/// DDL that could not be turned into a [`Table`](crate::Table)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no CREATE TABLE statement found")]
    MissingCreateTable,

    #[error("line {line}: CREATE TABLE without a table name")]
    MissingTableName { line: usize },

    #[error("line {line}: unterminated backtick identifier in `{text}`")]
    UnterminatedIdentifier { line: usize, text: String },

    #[error("line {line}: unterminated string literal in `{text}`")]
    UnterminatedString { line: usize, text: String },

    #[error("line {line}: column definition without a type: `{text}`")]
    MissingColumnType { line: usize, text: String },

    #[error("primary key references unknown column `{column}`")]
    UnknownKeyColumn { column: String },
}

/// Rendering failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("invalid Go package name '{0}'")]
    InvalidPackage(String),

    #[error("`{name}` does not convert to a valid Go identifier")]
    InvalidIdentifier { name: String },

    #[error("formatting failed: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Table name filter errors
#[derive(Debug, Clone, Error)]
pub enum FilterError {
    #[error("invalid table filter '{pattern}': {source}")]
    Invalid {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
