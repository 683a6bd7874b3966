//! Invitation and recharge record display models

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{InvitationRecord, RechargeRecord};
use crate::output::formatters::format_millis;

/// Invitation reward row
#[derive(Debug, Clone, Tabled, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationRecordDisplay {
    #[tabled(rename = "NICKNAME")]
    pub nick_name: String,

    #[tabled(rename = "TYPE")]
    pub reward_type: i64,

    #[tabled(rename = "AMOUNT")]
    pub reward_number: i64,

    #[tabled(rename = "UNIT")]
    pub reward_unit: i64,

    #[tabled(rename = "REWARDED AT")]
    pub reward_time: String,
}

impl From<InvitationRecord> for InvitationRecordDisplay {
    fn from(record: InvitationRecord) -> Self {
        Self {
            nick_name: record.nick_name,
            reward_type: record.reward_type,
            reward_number: record.reward_number,
            reward_unit: record.reward_unit,
            reward_time: format_millis(record.reward_time),
        }
    }
}

/// Recharge row
#[derive(Debug, Clone, Tabled, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RechargeRecordDisplay {
    #[tabled(rename = "FROM")]
    pub recharge_from: String,

    #[tabled(rename = "TO")]
    pub recharge_to: String,

    #[tabled(rename = "AMOUNT")]
    pub recharge_number: f64,

    #[tabled(rename = "UNIT")]
    pub recharge_unit: i64,

    #[tabled(rename = "CHAIN")]
    pub chain: String,

    #[tabled(rename = "RECHARGED AT")]
    pub recharge_time: String,
}

impl From<RechargeRecord> for RechargeRecordDisplay {
    fn from(record: RechargeRecord) -> Self {
        let chain = match (record.chain, record.symbol) {
            (Some(chain), Some(symbol)) => format!("{} ({})", chain, symbol),
            (Some(chain), None) => chain,
            (None, Some(symbol)) => symbol,
            (None, None) => "--".to_string(),
        };
        Self {
            recharge_from: record.recharge_from,
            recharge_to: record.recharge_to,
            recharge_number: record.recharge_number,
            recharge_unit: record.recharge_unit,
            chain,
            recharge_time: format_millis(record.recharge_time),
        }
    }
}
