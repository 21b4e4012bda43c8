//! Live MySQL source (`SHOW TABLES` / `SHOW CREATE TABLE`)

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use super::SchemaSource;
use crate::error::CliError;

/// A single-connection MySQL pool driven by a current-thread runtime
pub struct MySqlSource {
    rt: tokio::runtime::Runtime,
    pool: MySqlPool,
}

impl MySqlSource {
    pub fn connect(url: &str) -> Result<Self, CliError> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| CliError::Other(format!("Failed to create async runtime: {}", e)))?;

        let pool = rt
            .block_on(MySqlPoolOptions::new().max_connections(1).connect(url))
            .map_err(|e| CliError::Connection(format!("Failed to connect to MySQL: {}", e)))?;

        tracing::debug!("connected to mysql");
        Ok(Self { rt, pool })
    }
}

impl SchemaSource for MySqlSource {
    fn list_tables(&mut self) -> Result<Vec<String>, CliError> {
        self.rt
            .block_on(sqlx::query_scalar::<_, String>("SHOW TABLES").fetch_all(&self.pool))
            .map_err(|e| CliError::query(None, e))
    }

    fn table_ddl(&mut self, table: &str) -> Result<String, CliError> {
        let sql = format!("SHOW CREATE TABLE `{}`", table.replace('`', "``"));
        let (_, ddl): (String, String) = self
            .rt
            .block_on(sqlx::query_as(&sql).fetch_one(&self.pool))
            .map_err(|e| CliError::query(Some(table), e))?;
        Ok(ddl)
    }
}

impl Drop for MySqlSource {
    fn drop(&mut self) {
        self.rt.block_on(self.pool.close());
    }
}
