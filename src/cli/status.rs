//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::client::TokenStore;
use crate::config::Config;
use crate::error::Result;
use crate::output::formatters::format_duration;

/// Show config and cached session state. Never touches the network.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "ciac Status".bold());
    println!("Server: {}", opts.server.cyan());

    let config_path = Config::resolve_path(opts.config_ref());
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(err) => {
            println!("{} {}", "✗".red(), err);
            println!(
                "  → Create {} with your email and password",
                config_path.display().to_string().cyan()
            );
            println!();
            return Ok(());
        }
    };
    println!("Config file: {}", config_path.display().to_string().cyan());
    println!();

    match config.email.as_deref() {
        Some(email) if !email.trim().is_empty() => println!("{} Account: {}", "✓".green(), email),
        _ => println!("{} No email configured", "✗".red()),
    }

    if config.password.is_some() {
        println!("{} Password configured", "✓".green());
    } else {
        println!("{} No password configured (will prompt on login)", "○".dimmed());
    }

    let store = TokenStore::new(config.token_path()?);
    println!("Token file: {}", store.path().display().to_string().cyan());

    match store.load() {
        Ok(Some(credential)) => {
            let now = chrono::Utc::now();
            if credential.is_valid_at(now) {
                println!(
                    "{} Session valid (expires in {})",
                    "✓".green(),
                    format_duration(credential.remaining_at(now).to_std().unwrap_or_default())
                );
            } else {
                println!(
                    "{} Session expired (will log in on next command)",
                    "⚠".yellow()
                );
            }
        }
        Ok(None) => println!(
            "{} No cached session (will log in on next command)",
            "○".dimmed()
        ),
        Err(err) => {
            println!("{} {}", "✗".red(), err);
            println!("  → Run 'ciac login --force' to replace it");
        }
    }

    println!();
    Ok(())
}
