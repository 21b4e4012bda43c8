//! sql2struct code generation
//!
//! Turns MySQL `CREATE TABLE` statements into Go structs:
//!
//! 1. [`parse_table`] reads the DDL into a [`Table`] of [`Field`]s;
//! 2. [`generate`] renders the table into Go source with serialization tags;
//! 3. [`TableFilter`] selects which tables to generate by name pattern.
//!
//! ```
//! use sql2struct_codegen::{GenerateOptions, generate, parse_table};
//!
//! let table = parse_table(
//!     "CREATE TABLE `users` (\n  `id` int(11) NOT NULL,\n  PRIMARY KEY (`id`)\n) ENGINE=InnoDB",
//! )?;
//! let file = generate(&table, &GenerateOptions::default())?;
//! assert!(file.code.contains("type Users struct {"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod ddl;
pub mod error;
pub mod filter;
pub mod initialisms;
pub mod parser;
pub mod render;
pub mod types;

pub use ddl::{Field, Table};
pub use error::{FilterError, ParseError, TemplateError};
pub use filter::TableFilter;
pub use initialisms::normalize_initialisms;
pub use parser::{parse_table, split_statements, table_name};
pub use render::{GenerateOptions, GeneratedFile, generate};
pub use types::GoType;
