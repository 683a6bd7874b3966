//! Record listing handler
//!
//! `invited` and `recharged` share the same flow: build the page query,
//! fetch one page through the session, convert to display rows and print.

use std::future::Future;

use serde::Serialize;
use tabled::Tabled;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, RecordArgs};
use crate::client::{Authenticator, CiacClient, PageQuery};
use crate::error::Result;
use crate::output::Formattable;

/// Run a listing command.
///
/// # Type Parameters
///
/// * `T` - record type returned by the fetcher
/// * `D` - display row built from `T`
///
/// # Example
///
/// ```ignore
/// run_record_command::<RechargeRecord, RechargeRecordDisplay, _, _>(
///     opts,
///     args,
///     "recharges",
///     |client, query| async move { client.recharge_records(&query).await },
/// ).await
/// ```
pub async fn run_record_command<T, D, Fut, F>(
    opts: &GlobalOptions,
    args: &RecordArgs,
    resource_name: &str,
    fetcher: F,
) -> Result<()>
where
    D: From<T> + Tabled + Serialize,
    Fut: Future<Output = Result<Vec<T>>>,
    F: FnOnce(CiacClient<Authenticator>, PageQuery) -> Fut,
{
    let query = args.to_query()?;
    let ctx = CommandContext::new(opts, false)?;

    if query.is_empty() {
        log::debug!("Fetching {} with server defaults", resource_name);
    } else {
        log::debug!("Fetching {} with {:?}", resource_name, query);
    }
    let records = fetcher(ctx.client, query).await?;
    log::debug!("Fetched {} {}", records.len(), resource_name);

    let rows: Vec<D> = records.into_iter().map(D::from).collect();
    rows.print(ctx.format)
}
