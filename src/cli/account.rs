//! Session-backed account commands: login, profile, bind, recharge address

use serde::Serialize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::report;
use crate::client::models::AddressRequest;
use crate::error::Result;
use crate::models::ProfileDisplay;
use crate::output::{Formattable, Single};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginStatus {
    token: String,
    expire_at: Option<String>,
}

/// Run the `login` command
pub async fn login(opts: &GlobalOptions, force: bool) -> Result<()> {
    let ctx = CommandContext::new(opts, force)?;
    let credential = ctx.session.ensure_authenticated(force).await?;

    let expire_at = credential.expires_at.map(|t| t.to_rfc3339());
    let line = format!(
        "Logged in as {} (token expires {})",
        ctx.session.account().identity,
        expire_at.as_deref().unwrap_or("never")
    );
    let status = LoginStatus {
        token: credential.redacted(),
        expire_at,
    };
    report(ctx.format, true, &line, &status)
}

/// Run the `user` command
pub async fn user(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts, false)?;
    let profile = ctx.client.user_info().await?;
    Single(ProfileDisplay::from(profile)).print(ctx.format)
}

#[derive(Serialize)]
struct BindResult<'a> {
    code: &'a str,
    bound: bool,
}

/// Run the `bind` command
pub async fn bind(opts: &GlobalOptions, code: &str) -> Result<()> {
    let ctx = CommandContext::new(opts, false)?;
    let bound = ctx.client.bind(code).await?;
    let line = if bound {
        format!("Invitation code {} bound", code)
    } else {
        format!("Invitation code {} not bound", code)
    };
    report(ctx.format, bound, &line, &BindResult { code, bound })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddressResult {
    protocol: i64,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    coin_type: Option<i64>,
    address: String,
}

/// Run the `address` command
pub async fn address(opts: &GlobalOptions, request: AddressRequest) -> Result<()> {
    let ctx = CommandContext::new(opts, false)?;
    let address = ctx.client.address(&request).await?;
    let allocated = !address.is_empty();
    let line = if allocated {
        format!("Recharge address: {}", address)
    } else {
        "No recharge address allocated".to_string()
    };
    let result = AddressResult {
        protocol: request.protocol,
        coin_type: request.coin_type,
        address,
    };
    report(ctx.format, allocated, &line, &result)
}
