//! ciac - command line client for the Crypto Investment Advisor service

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;

use cli::args::GlobalOptions;
use cli::{Cli, Commands};
use client::models::AddressRequest;
use error::{Error, Result};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let result = tokio::select! {
        result = run(cli) => result,
        Ok(()) = tokio::signal::ctrl_c() => Err(Error::Interrupted),
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Timestamp => cli::public::timestamp(&opts).await,
        Commands::Code { email } => cli::public::code(&opts, email.as_deref()).await,
        Commands::Register { vc, ic } => {
            cli::public::register(&opts, vc.as_deref(), ic.as_deref()).await
        }
        Commands::Login { force } => cli::account::login(&opts, force).await,
        Commands::User => cli::account::user(&opts).await,
        Commands::Invited(args) => cli::records::invited(&opts, &args).await,
        Commands::Recharged(args) => cli::records::recharged(&opts, &args).await,
        Commands::Bind { code } => cli::account::bind(&opts, &code).await,
        Commands::Address {
            protocol,
            coin_type,
            force,
        } => {
            let request = AddressRequest {
                protocol,
                coin_type,
                force,
            };
            cli::account::address(&opts, request).await
        }
        Commands::Status => cli::status::run(&opts),
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}
