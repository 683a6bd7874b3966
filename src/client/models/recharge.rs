//! Recharge (deposit) address allocation

use serde::Deserialize;

/// Parameters of `GET /recharge`
#[derive(Debug, Clone, Default)]
pub struct AddressRequest {
    /// Chain protocol identifier
    pub protocol: i64,
    /// Coin type, omitted when not given
    pub coin_type: Option<i64>,
    /// Allocate a new address if none exists yet
    pub force: bool,
}

/// `data` object of `GET /recharge`
#[derive(Debug, Clone, Deserialize)]
pub struct AddressData {
    #[serde(default)]
    pub protocol: Option<i64>,

    #[serde(default, rename = "type")]
    pub coin_type: Option<i64>,

    #[serde(rename = "addressText", default)]
    pub address: String,

    #[serde(default)]
    pub remarks: Option<String>,
}
