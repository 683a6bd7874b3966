//! Profile display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Profile;
use crate::output::formatters::format_duration;

/// Profile display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDisplay {
    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "INVITATION CODE")]
    pub invitation_code: String,

    #[tabled(rename = "EXPIRE")]
    pub expire: String,

    #[tabled(rename = "REMAINING")]
    pub remaining_time: String,
}

impl From<Profile> for ProfileDisplay {
    fn from(profile: Profile) -> Self {
        Self {
            email: profile.email,
            invitation_code: profile.invitation_code,
            expire: if profile.expire.is_empty() {
                "--".to_string()
            } else {
                profile.expire
            },
            remaining_time: format_duration(profile.remaining_time),
        }
    }
}
