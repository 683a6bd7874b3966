//! Account-level payloads: login/bind results, profile, server time

use serde::{Deserialize, Serialize};

/// `data` object carrying only the nested result code (login, bind, sendCode,
/// register)
#[derive(Debug, Clone, Deserialize)]
pub struct ResultData {
    #[serde(alias = "Result")]
    pub result: Option<i64>,
}

/// `data` object of `GET /timestamp`
#[derive(Debug, Clone, Deserialize)]
pub struct TimestampData {
    /// Server time in milliseconds since epoch
    #[serde(alias = "Timestamp")]
    pub timestamp: i64,
}

/// `data` object of `GET /user`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    #[serde(default)]
    pub nick_name: Option<String>,

    pub email: String,

    /// The account's own invitation code
    pub code: String,

    /// Membership expiry as rendered by the server
    #[serde(default)]
    pub expire: String,

    /// Membership time left, in minutes
    pub remaining_time: i64,
}

/// Profile view model handed to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub email: String,
    pub invitation_code: String,
    pub expire: String,
    pub remaining_time: std::time::Duration,
}

impl From<ProfileData> for Profile {
    fn from(data: ProfileData) -> Self {
        // Negative remainders come back for lapsed memberships
        let minutes = u64::try_from(data.remaining_time).unwrap_or(0);
        Self {
            email: data.email,
            invitation_code: data.code,
            expire: data.expire,
            remaining_time: std::time::Duration::from_secs(minutes.saturating_mul(60)),
        }
    }
}
