//! Invitation and recharge history records

use serde::{Deserialize, Serialize};

/// One page of a record listing (`data.record`).
///
/// An empty page is the end of pagination, not an error.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordPage<T> {
    #[serde(rename = "record")]
    pub records: Vec<T>,
}

/// Reward earned from an invited user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationRecord {
    pub nick_name: String,
    pub reward_type: i64,
    pub reward_number: i64,
    pub reward_unit: i64,
    /// Epoch milliseconds
    pub reward_time: i64,
}

/// Deposit made to the account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RechargeRecord {
    pub recharge_for: i64,
    pub recharge_from: String,
    pub recharge_to: String,
    pub recharge_number: f64,
    pub recharge_unit: i64,
    /// Epoch milliseconds
    pub recharge_time: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,

    /// When the deposit was credited, epoch milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<i64>,
}
