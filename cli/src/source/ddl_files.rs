//! Table definitions read from `.sql` files

use std::path::{Path, PathBuf};

use sql2struct_codegen::{split_statements, table_name};

use super::SchemaSource;
use crate::error::CliError;

/// `CREATE TABLE` statements collected from one or more DDL files
#[derive(Debug, Clone, Default)]
pub struct DdlFileSource {
    /// (table name, statement) in file order
    statements: Vec<(String, String)>,
}

impl DdlFileSource {
    pub fn from_files(files: &[PathBuf]) -> Result<Self, CliError> {
        let mut source = Self::default();
        for path in files {
            let text = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
            source.add_text(&text, Some(path.as_path()))?;
        }
        Ok(source)
    }

    pub fn from_text(text: &str) -> Result<Self, CliError> {
        let mut source = Self::default();
        source.add_text(text, None)?;
        Ok(source)
    }

    fn add_text(&mut self, text: &str, path: Option<&Path>) -> Result<(), CliError> {
        for statement in split_statements(text) {
            let name = table_name(statement).map_err(|source| CliError::Parse {
                table: path
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "<ddl>".to_string()),
                source,
            })?;

            if self.statements.iter().any(|(existing, _)| *existing == name) {
                tracing::warn!(table = %name, "duplicate CREATE TABLE, keeping the first");
                continue;
            }
            self.statements.push((name, statement.to_string()));
        }
        Ok(())
    }
}

impl SchemaSource for DdlFileSource {
    fn list_tables(&mut self) -> Result<Vec<String>, CliError> {
        Ok(self.statements.iter().map(|(name, _)| name.clone()).collect())
    }

    fn table_ddl(&mut self, table: &str) -> Result<String, CliError> {
        self.statements
            .iter()
            .find(|(name, _)| name == table)
            .map(|(_, ddl)| ddl.clone())
            .ok_or_else(|| CliError::query(Some(table), "no CREATE TABLE statement in the DDL files"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_and_fetches() {
        let mut source = DdlFileSource::from_text(
            "CREATE TABLE `a` (\n`id` int\n);\nCREATE TABLE `b` (\n`id` int\n);\nCREATE TABLE `a` (\n`x` int\n);",
        )
        .unwrap();
        assert_eq!(source.list_tables().unwrap(), ["a", "b"]);
        assert!(source.table_ddl("a").unwrap().contains("`id` int"));
        assert!(matches!(
            source.table_ddl("missing"),
            Err(CliError::Query { table: Some(ref t), .. }) if t == "missing"
        ));
    }

    #[test]
    fn unreadable_file() {
        let err = DdlFileSource::from_files(&[PathBuf::from("/nonexistent/dump.sql")]).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }
}
