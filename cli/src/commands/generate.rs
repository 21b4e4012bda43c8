//! Generate command implementation
//!
//! Lists the selected tables, then fetches, parses, renders and writes each one
//! in turn. A failing table is reported and skipped; the command fails at the
//! end if any table did.

use std::path::PathBuf;

use colored::Colorize;
use sql2struct_codegen::{GenerateOptions, generate, parse_table};

use crate::config::Config;
use crate::error::CliError;
use crate::output;
use crate::source::{self, SchemaSource};
use crate::writer::FileWriter;

/// Run the generate command. With `dry_run` the code goes to stdout instead of files.
pub fn run(config: &Config, dry_run: bool) -> Result<(), CliError> {
    let filter = config.table_filter()?;
    let options = config.generate_options();
    let mut source = source::open(config)?;
    let tables = source::select_tables(config, source.as_mut(), &filter)?;

    if tables.is_empty() {
        eprintln!("{}", output::warn_line("No tables matched; nothing to generate."));
        return Ok(());
    }

    if !dry_run {
        println!("{}", output::heading("Generating Go structs..."));
        println!();
        println!("{}", output::field("Tables", tables.len()));
        println!("{}", output::field("Output", config.out.display()));
        println!("{}", output::field("Package", &config.package));
        println!();
    }

    let writer = FileWriter::new(&config.out, config.formatters.clone());
    let mut failed = 0;

    for table in &tables {
        match generate_table(source.as_mut(), table, &options, &writer, dry_run) {
            Ok(Some(path)) => println!("  {} {}", "✓".green(), path.display()),
            Ok(None) => {}
            Err(e) => {
                failed += 1;
                eprintln!("{}", output::err_line(&e.to_string()));
            }
        }
    }

    if failed > 0 {
        return Err(CliError::TablesFailed {
            failed,
            total: tables.len(),
        });
    }

    if !dry_run {
        println!();
        println!(
            "{} {} file(s) written to {}",
            output::success("Done!"),
            tables.len(),
            config.out.display()
        );
    }

    Ok(())
}

/// Fetch, parse, render and write a single table
fn generate_table(
    source: &mut dyn SchemaSource,
    name: &str,
    options: &GenerateOptions,
    writer: &FileWriter,
    dry_run: bool,
) -> Result<Option<PathBuf>, CliError> {
    tracing::debug!(table = name, "fetching ddl");
    let ddl = source.table_ddl(name)?;

    let table = parse_table(&ddl).map_err(|source| CliError::Parse {
        table: name.to_string(),
        source,
    })?;

    let file = generate(&table, options).map_err(|source| CliError::Template {
        table: name.to_string(),
        source,
    })?;

    for warning in &file.warnings {
        eprintln!("{}", output::warn_line(warning));
    }

    if dry_run {
        print!("{}", file.code);
        return Ok(None);
    }

    let path = writer.write(&table.name, &file.code)?;
    for warning in writer.format(&path) {
        eprintln!("{}", output::warn_line(&warning.to_string()));
    }

    Ok(Some(path))
}
