//! Configuration for the sql2struct CLI
//!
//! Handles loading `sql2struct.toml` and merging command-line overrides.

use serde::Deserialize;
use sql2struct_codegen::{FilterError, GenerateOptions, TableFilter};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "sql2struct.toml";

// ============================================================================
// Configuration
// ============================================================================

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub source: Source,

    #[serde(default = "default_out")]
    pub out: PathBuf,

    #[serde(default = "default_package")]
    pub package: String,

    #[serde(default = "default_tag")]
    pub tag: String,

    #[serde(default = "yes")]
    pub with_json_tag: bool,

    #[serde(default)]
    pub table_prefix: String,

    /// Explicit table list; replaces listing the source when non-empty
    #[serde(default)]
    pub tables: Vec<String>,

    #[serde(default)]
    pub tables_filter: Option<Filter>,

    /// Commands run on every written file, the file path appended
    #[serde(default = "default_formatters")]
    pub formatters: Vec<String>,
}

fn default_out() -> PathBuf { PathBuf::from("./model") }
fn default_package() -> String { "model".into() }
fn default_tag() -> String { "gorm".into() }
fn default_formatters() -> Vec<String> { vec!["goimports -l -w".into(), "gofmt -l -w".into()] }
fn yes() -> bool { true }

impl Default for Config {
    fn default() -> Self {
        Self {
            source: Source::default(),
            out: default_out(),
            package: default_package(),
            tag: default_tag(),
            with_json_tag: true,
            table_prefix: String::new(),
            tables: Vec::new(),
            tables_filter: None,
            formatters: default_formatters(),
        }
    }
}

/// Where table definitions come from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Source {
    /// DDL file glob(s)
    #[serde(default)]
    pub ddl: Option<Filter>,

    /// Database URL
    #[serde(default)]
    url: Option<RawUrl>,
}

/// Filter (single or multiple values)
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Filter {
    One(String),
    Many(Vec<String>),
}

impl Filter {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        match self {
            Self::One(s) => std::slice::from_ref(s).iter().map(String::as_str),
            Self::Many(v) => v.iter().map(String::as_str),
        }
    }

    pub fn display(&self) -> String {
        self.iter().collect::<Vec<_>>().join(", ")
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawUrl {
    Plain(String),
    Env { env: String },
}

/// Resolved schema source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    /// DDL files matching these glob patterns
    DdlFiles(Vec<String>),
    /// MySQL connection URL
    MySql(String),
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub out: Option<PathBuf>,
    pub package: Option<String>,
    pub tag: Option<String>,
    pub with_json_tag: Option<bool>,
    pub table_prefix: Option<String>,
    pub tables: Vec<String>,
    pub filters: Vec<String>,
    pub ddl: Vec<String>,
    pub url: Option<String>,
    pub no_format: bool,
}

// ============================================================================
// Config implementation
// ============================================================================

impl Config {
    /// Load from default config file
    pub fn load() -> Result<Self, Error> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load from specific path
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::NotFound(path.into())
            } else {
                Error::Io(path.into(), e)
            }
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| Error::Parse(path.into(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, else the default file when present, else defaults
    pub fn discover(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(path) => Self::load_from(path),
            None if Path::new(CONFIG_FILE).exists() => Self::load(),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), Error> {
        if self.source.ddl.is_some() && self.source.url.is_some() {
            return Err(Error::ConflictingSource);
        }
        if self.tag.trim().is_empty() {
            return Err(Error::Invalid("tag must not be empty".into()));
        }
        Ok(())
    }

    /// Merge command-line overrides; a `--ddl` or `--url` replaces the configured source
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(out) = overrides.out {
            self.out = out;
        }
        if let Some(package) = overrides.package {
            self.package = package;
        }
        if let Some(tag) = overrides.tag {
            self.tag = tag;
        }
        if let Some(json) = overrides.with_json_tag {
            self.with_json_tag = json;
        }
        if let Some(prefix) = overrides.table_prefix {
            self.table_prefix = prefix;
        }
        if !overrides.tables.is_empty() {
            self.tables = overrides.tables;
        }
        if !overrides.filters.is_empty() {
            self.tables_filter = Some(Filter::Many(overrides.filters));
        }
        if !overrides.ddl.is_empty() {
            self.source = Source {
                ddl: Some(Filter::Many(overrides.ddl)),
                url: None,
            };
        } else if let Some(url) = overrides.url {
            self.source = Source {
                ddl: None,
                url: Some(RawUrl::Plain(url)),
            };
        }
        if overrides.no_format {
            self.formatters.clear();
        }
    }

    /// Resolve the schema source, reading `{ env = "..." }` URLs from the environment
    pub fn source_kind(&self) -> Result<SourceKind, Error> {
        match (&self.source.ddl, &self.source.url) {
            (Some(_), Some(_)) => Err(Error::ConflictingSource),
            (Some(ddl), None) => Ok(SourceKind::DdlFiles(ddl.iter().map(str::to_string).collect())),
            (None, Some(raw)) => {
                let url = match raw {
                    RawUrl::Plain(url) => url.clone(),
                    RawUrl::Env { env } => {
                        std::env::var(env).map_err(|_| Error::MissingEnv(env.clone()))?
                    }
                };
                if !url.starts_with("mysql://") {
                    return Err(Error::InvalidUrl(url));
                }
                Ok(SourceKind::MySql(url))
            }
            (None, None) => Err(Error::MissingSource),
        }
    }

    /// Resolve DDL files (with glob support)
    pub fn ddl_files(patterns: &[String]) -> Result<Vec<PathBuf>, Error> {
        let mut files = Vec::new();

        for pattern in patterns {
            match glob::glob(pattern) {
                Ok(paths) => {
                    let matched: Vec<_> = paths.filter_map(Result::ok).collect();
                    if matched.is_empty() {
                        let p = PathBuf::from(pattern);
                        if p.exists() {
                            files.push(p);
                        }
                    } else {
                        files.extend(matched);
                    }
                }
                Err(e) => return Err(Error::Glob(pattern.clone(), e)),
            }
        }

        if files.is_empty() {
            return Err(Error::NoDdlFiles(patterns.join(", ")));
        }

        Ok(files)
    }

    /// Compiled table name filter
    pub fn table_filter(&self) -> Result<TableFilter, FilterError> {
        match &self.tables_filter {
            Some(filter) => TableFilter::new(filter.iter()),
            None => Ok(TableFilter::default()),
        }
    }

    /// Code generation options
    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            package: self.package.clone(),
            tag_key: self.tag.clone(),
            with_json_tag: self.with_json_tag,
            table_prefix: self.table_prefix.clone(),
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse {}: {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("no schema source: set [source] ddl or url, or pass --ddl/--url")]
    MissingSource,

    #[error("[source] accepts either ddl or url, not both")]
    ConflictingSource,

    #[error("environment variable {0} is not set")]
    MissingEnv(String),

    #[error("database URL must start with mysql://, got '{0}'")]
    InvalidUrl(String),

    #[error("invalid glob '{0}': {1}")]
    Glob(String, #[source] glob::PatternError),

    #[error("no DDL files found: {0}")]
    NoDdlFiles(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigError = Error;

// ============================================================================
// Tests
// ============================================================================
