//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod formatters;
pub mod json;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.format(format)?);
        Ok(())
    }
}

impl<T: Tabled + Serialize> Formattable for Vec<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(table::format_table(self)),
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}

/// A single record: one-row table, or a bare object under `data` in JSON
pub struct Single<T>(pub T);

impl<T: Tabled + Serialize> Formattable for Single<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(table::format_table(std::slice::from_ref(&self.0))),
            OutputFormat::Json => Ok(json::format_json(&self.0)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled, Serialize)]
    struct Row {
        #[tabled(rename = "CODE")]
        code: String,
    }

    #[test]
    fn test_vec_formats_both_ways() {
        let rows = vec![Row {
            code: "INV1".to_string(),
        }];
        assert!(rows.format(OutputFormat::Table).unwrap().contains("CODE"));
        assert!(rows.format(OutputFormat::Json).unwrap().contains("\"code\": \"INV1\""));
    }

    #[test]
    fn test_single_json_is_object() {
        let single = Single(Row {
            code: "INV1".to_string(),
        });
        let out = single.format(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["data"]["code"], "INV1");
    }
}
