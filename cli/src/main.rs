//! sql2struct CLI - Main entry point
//!
//! This is the main binary for the sql2struct tool.

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use sql2struct_cli::commands;
use sql2struct_cli::config::{Config, Overrides};
use sql2struct_cli::error::CliError;

/// sql2struct - Generate Go structs from MySQL CREATE TABLE statements
#[derive(Parser, Debug)]
#[command(name = "sql2struct")]
#[command(author, version, about = "Generate Go structs from MySQL table definitions", long_about = None)]
struct Cli {
    /// Path to config file (default: sql2struct.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print debug diagnostics
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
enum Command {
    /// Generate one Go file per selected table
    Generate {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        output: OutputArgs,

        /// Print the generated code instead of writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// List the tables that would be generated
    Tables {
        #[command(flatten)]
        source: SourceArgs,

        /// Also list tables rejected by the filter
        #[arg(long)]
        all: bool,
    },

    /// Validate the configuration
    Check {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Create a new sql2struct.toml
    Init {
        /// Configure a MySQL URL source instead of a DDL file
        #[arg(long)]
        mysql: bool,
    },
}

/// Where tables come from and which of them to generate
#[derive(Args, Debug, Default)]
struct SourceArgs {
    /// DDL file or glob (repeatable); replaces the configured source
    #[arg(long, value_name = "PATH", conflicts_with = "url")]
    ddl: Vec<String>,

    /// MySQL connection URL; replaces the configured source
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Generate only this table (repeatable)
    #[arg(short, long = "table", value_name = "NAME")]
    tables: Vec<String>,

    /// Table name regular expression (repeatable)
    #[arg(short, long = "filter", value_name = "REGEX")]
    filters: Vec<String>,
}

/// Shape of the generated Go code
#[derive(Args, Debug, Default)]
struct OutputArgs {
    /// Output directory
    #[arg(short, long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Go package name
    #[arg(short, long)]
    package: Option<String>,

    /// Struct tag key for the column metadata
    #[arg(long)]
    tag: Option<String>,

    /// Emit json tags
    #[arg(long, overrides_with = "no_json")]
    json: bool,

    /// Omit json tags
    #[arg(long)]
    no_json: bool,

    /// Prefix added to the name returned by TableName()
    #[arg(long, value_name = "PREFIX")]
    prefix: Option<String>,

    /// Skip the configured formatters
    #[arg(long)]
    no_format: bool,
}

impl SourceArgs {
    fn into_overrides(self, output: OutputArgs) -> Overrides {
        let with_json_tag = match (output.json, output.no_json) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        };
        Overrides {
            out: output.out,
            package: output.package,
            tag: output.tag,
            with_json_tag,
            table_prefix: output.prefix,
            tables: self.tables,
            filters: self.filters,
            ddl: self.ddl,
            url: self.url,
            no_format: output.no_format,
        }
    }
}

fn main() -> ExitCode {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false);
    if verbose {
        builder.with_max_level(Level::DEBUG).init();
    } else {
        builder
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .init();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Command::Generate {
            source,
            output,
            dry_run,
        } => {
            let config = load_config(config_path, source.into_overrides(output))?;
            commands::generate::run(&config, dry_run)
        }

        Command::Tables { source, all } => {
            let config = load_config(config_path, source.into_overrides(OutputArgs::default()))?;
            commands::tables::run(&config, all)
        }

        Command::Check { source, output } => {
            let config = load_config(config_path, source.into_overrides(output))?;
            commands::check::run(&config)
        }

        Command::Init { mysql } => {
            let dir = std::env::current_dir().map_err(|e| CliError::io(".", e))?;
            commands::init::run(&dir, mysql)
        }
    }
}

fn load_config(path: Option<&std::path::Path>, overrides: Overrides) -> Result<Config, CliError> {
    let mut config = Config::discover(path)?;
    config.apply(overrides);
    tracing::debug!(?config, "effective configuration");
    Ok(config)
}
