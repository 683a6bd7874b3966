//! Invitation reward and recharge listings

use crate::cli::RecordArgs;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_record_command;
use crate::client::models::{InvitationRecord, RechargeRecord};
use crate::error::Result;
use crate::models::{InvitationRecordDisplay, RechargeRecordDisplay};

/// Run the `invited` command
pub async fn invited(opts: &GlobalOptions, args: &RecordArgs) -> Result<()> {
    run_record_command::<InvitationRecord, InvitationRecordDisplay, _, _>(
        opts,
        args,
        "invitation records",
        |client, query| async move { client.invitation_records(&query).await },
    )
    .await
}

/// Run the `recharged` command
pub async fn recharged(opts: &GlobalOptions, args: &RecordArgs) -> Result<()> {
    run_record_command::<RechargeRecord, RechargeRecordDisplay, _, _>(
        opts,
        args,
        "recharge records",
        |client, query| async move { client.recharge_records(&query).await },
    )
    .await
}
