//! # sql2struct
//!
//! Generate Go structs from MySQL `CREATE TABLE` statements.
//!
//! ## Quick Start
//!
//! ```rust
//! use sql2struct::prelude::*;
//!
//! let ddl = "CREATE TABLE `user_info` (
//!   `id` bigint unsigned NOT NULL COMMENT 'primary key',
//!   `nick_name` varchar(64) NOT NULL DEFAULT 'anon',
//!   `created_at` datetime NOT NULL,
//!   PRIMARY KEY (`id`)
//! ) ENGINE=InnoDB COMMENT='users'";
//!
//! let table = parse_table(ddl)?;
//! let file = generate(&table, &GenerateOptions::default())?;
//!
//! assert!(file.code.contains("type UserInfo struct {"));
//! assert!(file.code.contains("import \"time\""));
//! assert!(file.code.contains("func (t *UserInfo) TableName() string"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The `sql2struct` binary lives in the `sql2struct-cli` package and adds DDL
//! file discovery, MySQL introspection and formatter integration on top of
//! this library.
//!
//! ## Type Mapping
//!
//! | MySQL                                   | Go          |
//! |-----------------------------------------|-------------|
//! | `int`, `bigint`, `smallint`, `mediumint`| `int64`     |
//! | any of the above `unsigned`             | `uint64`    |
//! | `tinyint`                               | `uint8`     |
//! | `bool`, `boolean`                       | `bool`      |
//! | `float` / `double`                      | `float32` / `float64` |
//! | `decimal`, `char`, `varchar`, `text`... | `string`    |
//! | `blob` family, `binary`, `varbinary`    | `[]byte`    |
//! | `date`, `time`, `datetime`, `timestamp` | `time.Time` |

pub use sql2struct_codegen::*;

/// Everything needed to parse and render a table
pub mod prelude {
    pub use sql2struct_codegen::{
        Field, GenerateOptions, GeneratedFile, GoType, ParseError, Table, TableFilter,
        TemplateError, generate, parse_table, split_statements,
    };
}
