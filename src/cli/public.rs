//! Commands that need no session: server time, verification code, sign-up

use dialoguer::{Password, theme::ColorfulTheme};
use serde::Serialize;

use crate::cli::args::GlobalOptions;
use crate::cli::context::PublicContext;
use crate::cli::handlers::report;
use crate::client::{Outcome, Registration};
use crate::config::Config;
use crate::error::Result;

#[derive(Serialize)]
struct ServerTime {
    timestamp: i64,
    time: String,
}

/// Run the `timestamp` command
pub async fn timestamp(opts: &GlobalOptions) -> Result<()> {
    let ctx = PublicContext::new(opts)?;
    let time = ctx.client.server_time().await?;
    let data = ServerTime {
        timestamp: time.timestamp_millis(),
        time: time.to_rfc3339(),
    };
    report(
        ctx.format,
        true,
        &format!("Server time {} ({})", data.time, data.timestamp),
        &data,
    )
}

/// Run the `code` command
pub async fn code(opts: &GlobalOptions, email: Option<&str>) -> Result<()> {
    let email = match email {
        Some(email) => email.to_string(),
        None => Config::load_at(opts.config_ref())?.require_email()?.to_string(),
    };
    let ctx = PublicContext::new(opts)?;
    let outcome = ctx.client.send_code(&email).await?;
    print_outcome(&ctx, &outcome, &format!("Verification code sent to {}", email))
}

/// Run the `register` command for the configured account
pub async fn register(opts: &GlobalOptions, vc: Option<&str>, ic: Option<&str>) -> Result<()> {
    let config = Config::load_at(opts.config_ref())?;
    let email = config.require_email()?;
    let password = match config.password.as_deref() {
        Some(password) => password.to_string(),
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Choose a password for {}", email))
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()?,
    };

    let ctx = PublicContext::new(opts)?;
    let registration = Registration {
        email,
        password: &password,
        verification_code: vc,
        invitation_code: ic,
    };
    let outcome = ctx.client.register(&registration).await?;
    print_outcome(&ctx, &outcome, &format!("Registered {}", email))
}

fn print_outcome(ctx: &PublicContext, outcome: &Outcome, success: &str) -> Result<()> {
    let line = if outcome.accepted {
        success.to_string()
    } else if outcome.message.is_empty() {
        "Request refused by server".to_string()
    } else {
        format!("Request refused by server: {}", outcome.message)
    };
    report(ctx.format, outcome.accepted, &line, outcome)
}
