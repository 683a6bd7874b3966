//! Global CLI options shared across all commands

use std::time::Duration;

use crate::cli::{Cli, OutputFormat};

/// Global flags, captured once after parsing and handed to every handler.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (table, json)
    pub format: OutputFormat,

    /// Config file path (defaults to `config.json`)
    pub config: Option<String>,

    /// Service base URL
    pub server: String,

    /// HTTP timeout
    pub timeout: Duration,
}

impl GlobalOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            server: cli.server.clone(),
            timeout: Duration::from_secs(cli.timeout),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }
}
