//! Tables command implementation
//!
//! Prints the tables `generate` would process.

use colored::Colorize;

use crate::config::Config;
use crate::error::CliError;
use crate::output;
use crate::source;

/// Run the tables command. `all` also shows the tables the filter rejects.
pub fn run(config: &Config, all: bool) -> Result<(), CliError> {
    let filter = config.table_filter()?;
    let mut source = source::open(config)?;

    if !all {
        for name in source::select_tables(config, source.as_mut(), &filter)? {
            println!("{name}");
        }
        return Ok(());
    }

    let names = if config.tables.is_empty() {
        source.list_tables()?
    } else {
        config.tables.clone()
    };
    for name in names {
        if filter.matches(&name) {
            println!("{} {}", "+".green(), name);
        } else {
            println!("{} {}", "-".bright_black(), output::muted(&name));
        }
    }

    Ok(())
}
