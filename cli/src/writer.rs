//! Writes generated files and runs external formatters on them

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::CliError;

/// Extension of generated files
pub const EXTENSION: &str = "go";

/// A formatter that could not be run or reported failure. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterWarning {
    pub formatter: String,
    pub message: String,
}

impl fmt::Display for FormatterWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.formatter, self.message)
    }
}

/// Writes `<lowercase table name>.go` files into one directory
#[derive(Debug, Clone)]
pub struct FileWriter {
    out_dir: PathBuf,
    /// Formatter command lines, e.g. `gofmt -l -w`
    formatters: Vec<String>,
}

impl FileWriter {
    pub fn new(out_dir: impl Into<PathBuf>, formatters: Vec<String>) -> Self {
        Self {
            out_dir: out_dir.into(),
            formatters,
        }
    }

    pub fn file_path(&self, table: &str) -> PathBuf {
        self.out_dir
            .join(format!("{}.{}", table.to_lowercase(), EXTENSION))
    }

    /// Create the output directory if needed and write the file
    pub fn write(&self, table: &str, code: &str) -> Result<PathBuf, CliError> {
        std::fs::create_dir_all(&self.out_dir).map_err(|e| CliError::io(&self.out_dir, e))?;
        let path = self.file_path(table);
        std::fs::write(&path, code).map_err(|e| CliError::io(&path, e))?;
        tracing::debug!(path = %path.display(), bytes = code.len(), "wrote file");
        Ok(path)
    }

    /// Run every formatter on `path`, collecting failures
    pub fn format(&self, path: &Path) -> Vec<FormatterWarning> {
        self.formatters
            .iter()
            .filter_map(|cmd| run_formatter(cmd, path).err())
            .inspect(|w| tracing::debug!(formatter = %w.formatter, "{}", w.message))
            .collect()
    }
}

fn run_formatter(command_line: &str, path: &Path) -> Result<(), FormatterWarning> {
    let mut parts = command_line.split_whitespace();
    let Some(program) = parts.next() else {
        return Ok(());
    };
    let warning = |message: String| FormatterWarning {
        formatter: program.to_string(),
        message,
    };

    let output = Command::new(program)
        .args(parts)
        .arg(path)
        .output()
        .map_err(|e| warning(format!("failed to run: {e}")))?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = stderr.trim();
        Err(warning(if detail.is_empty() {
            format!("exited with {}", output.status)
        } else {
            detail.to_string()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_lowercase_file_in_new_dir() {
        let temp = TempDir::new().unwrap();
        let writer = FileWriter::new(temp.path().join("model/nested"), vec![]);
        let path = writer.write("UserInfo", "package model\n").unwrap();
        assert_eq!(path, temp.path().join("model/nested/userinfo.go"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "package model\n");
    }

    #[test]
    fn missing_formatter_is_a_warning() {
        let temp = TempDir::new().unwrap();
        let writer = FileWriter::new(
            temp.path(),
            vec!["sql2struct-no-such-formatter -w".into(), "   ".into()],
        );
        let path = writer.write("t", "package model\n").unwrap();
        let warnings = writer.format(&path);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].formatter, "sql2struct-no-such-formatter");
        assert!(warnings[0].message.starts_with("failed to run"));
    }

    #[test]
    fn write_into_a_file_path_fails() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let writer = FileWriter::new(&blocker, vec![]);
        assert!(matches!(writer.write("t", ""), Err(CliError::Io { .. })));
    }
}
