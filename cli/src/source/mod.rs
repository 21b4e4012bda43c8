//! Schema sources: where table names and their DDL come from
//!
//! A source lists tables and returns the `CREATE TABLE` text of one table.
//! DDL files are always available; MySQL needs the `mysql` feature.

mod ddl_files;
#[cfg(feature = "mysql")]
mod mysql;

pub use ddl_files::DdlFileSource;
#[cfg(feature = "mysql")]
pub use mysql::MySqlSource;

use sql2struct_codegen::TableFilter;

use crate::config::{Config, SourceKind};
use crate::error::CliError;

/// Table listing and DDL retrieval
pub trait SchemaSource {
    /// All table names, in source order
    fn list_tables(&mut self) -> Result<Vec<String>, CliError>;

    /// The `CREATE TABLE` statement of `table`
    fn table_ddl(&mut self, table: &str) -> Result<String, CliError>;
}

/// Open the source configured in `config`
pub fn open(config: &Config) -> Result<Box<dyn SchemaSource>, CliError> {
    match config.source_kind()? {
        SourceKind::DdlFiles(patterns) => {
            let files = Config::ddl_files(&patterns)?;
            Ok(Box::new(DdlFileSource::from_files(&files)?))
        }

        #[cfg(feature = "mysql")]
        SourceKind::MySql(url) => Ok(Box::new(MySqlSource::connect(&url)?)),

        #[cfg(not(feature = "mysql"))]
        SourceKind::MySql(_) => Err(CliError::MissingDriver { feature: "mysql" }),
    }
}

/// Table names to generate: the configured list if any, else everything the
/// source lists, narrowed by `filter`
pub fn select_tables(
    config: &Config,
    source: &mut dyn SchemaSource,
    filter: &TableFilter,
) -> Result<Vec<String>, CliError> {
    let names = if config.tables.is_empty() {
        source.list_tables()?
    } else {
        config.tables.clone()
    };
    let selected = filter.filter(&names);
    tracing::debug!(listed = names.len(), selected = selected.len(), "selected tables");
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &str = "CREATE TABLE `user_info` (\n`id` int\n);\nCREATE TABLE `order_info` (\n`id` int\n);\n";

    #[test]
    fn listing_is_filtered() {
        let mut source = DdlFileSource::from_text(DUMP).unwrap();
        let filter = TableFilter::new(["^user_"]).unwrap();
        let tables = select_tables(&Config::default(), &mut source, &filter).unwrap();
        assert_eq!(tables, ["user_info"]);
    }

    #[test]
    fn configured_tables_replace_listing() {
        let mut source = DdlFileSource::from_text(DUMP).unwrap();
        let config = Config {
            tables: vec!["order_info".into()],
            ..Config::default()
        };
        let tables = select_tables(&config, &mut source, &TableFilter::default()).unwrap();
        assert_eq!(tables, ["order_info"]);
    }

    #[cfg(not(feature = "mysql"))]
    #[test]
    fn mysql_without_driver() {
        let mut config = Config::default();
        config.apply(crate::config::Overrides {
            url: Some("mysql://localhost/db".into()),
            ..Default::default()
        });
        assert!(matches!(
            open(&config),
            Err(CliError::MissingDriver { feature: "mysql" })
        ));
    }
}
