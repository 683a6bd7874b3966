//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod account;
pub mod args;
pub mod completions;
pub mod context;
pub mod handlers;
pub mod public;
pub mod records;
pub mod status;

pub use args::{OutputFormat, RecordArgs};
pub use context::CommandContext;

/// Server used when `--server` is not given
pub const DEFAULT_SERVER: &str = "https://test.caitan.app";

/// ciac - command line client for the Crypto Investment Advisor service
#[derive(Parser, Debug)]
#[command(name = "ciac")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "CIAC_FORMAT",
        default_value = "table",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Config file with account email, password and token file
    #[arg(short, long, global = true, env = "CIAC_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Service base URL
    #[arg(
        short,
        long,
        global = true,
        env = "CIAC_SERVER",
        default_value = DEFAULT_SERVER,
        hide_env = true
    )]
    pub server: String,

    /// HTTP timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout: u64,

    /// Enable debug logging
    #[arg(long, global = true, env = "CIAC_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the server clock
    Timestamp,

    /// Email a verification code
    Code {
        /// Address to send to (defaults to the configured email)
        #[arg(long)]
        email: Option<String>,
    },

    /// Register the configured account
    Register {
        /// Verification code received by email
        #[arg(long)]
        vc: Option<String>,

        /// Invitation code of the referrer
        #[arg(long)]
        ic: Option<String>,
    },

    /// Log in, reusing the cached session when still valid
    Login {
        /// Log in even if the cached session is valid
        #[arg(short, long)]
        force: bool,
    },

    /// Show the account profile
    User,

    /// List invitation rewards
    Invited(RecordArgs),

    /// List recharges
    Recharged(RecordArgs),

    /// Bind an invitation code to the account
    Bind {
        /// Invitation code
        #[arg(long)]
        code: String,
    },

    /// Get a recharge address
    Address {
        /// Chain protocol number
        #[arg(long)]
        protocol: i64,

        /// Coin type number
        #[arg(long = "type")]
        coin_type: Option<i64>,

        /// Allocate a new address even if one exists
        #[arg(short, long)]
        force: bool,
    },

    /// Show configuration and cached session status
    Status,

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
