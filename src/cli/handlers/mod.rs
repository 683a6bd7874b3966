//! Shared command handler helpers

mod list;

pub use list::run_record_command;

use colored::Colorize;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::json::format_json;

/// Print a one-line result: a colored sentence for tables, `data` for JSON.
pub fn report<T: Serialize>(format: OutputFormat, ok: bool, line: &str, data: &T) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", format_json(data)?),
        OutputFormat::Table if ok => println!("{} {}", "✓".green(), line),
        OutputFormat::Table => println!("{} {}", "✗".red(), line),
    }
    Ok(())
}
