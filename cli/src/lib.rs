//! sql2struct CLI - Generate Go structs from MySQL table definitions
//!
//! The `sql2struct` binary reads `CREATE TABLE` statements from DDL files or a
//! live MySQL database and writes one Go source file per table, with ORM and
//! JSON struct tags and a `TableName()` method.
//!
//! # Quick Start
//!
//! 1. Run `sql2struct init` to create a `sql2struct.toml`
//! 2. Point `[source] ddl` at your schema dump
//! 3. Run `sql2struct generate`
//!
//! # Configuration
//!
//! ```toml
//! out = "./model"
//! package = "model"
//! tag = "gorm"
//! withJsonTag = true
//! tablesFilter = ["^user"]
//!
//! [source]
//! ddl = ["schema/*.sql"]
//! ```
//!
//! Reading from MySQL requires the `mysql` feature:
//!
//! ```toml
//! [source]
//! url = { env = "DATABASE_URL" }
//! ```
//!
//! # Commands
//!
//! - `sql2struct init` - Create a new sql2struct.toml configuration file
//! - `sql2struct generate` - Write one `.go` file per selected table
//! - `sql2struct generate --dry-run` - Print the generated code instead
//! - `sql2struct tables` - List the tables that would be generated
//! - `sql2struct check` - Validate the configuration

pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod source;
pub mod writer;

pub use config::{Config, Error as ConfigError, Overrides, SourceKind};
pub use error::CliError;
pub use source::SchemaSource;
pub use writer::FileWriter;
