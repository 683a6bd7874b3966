//! Server payload models
//!
//! Each endpoint's `data` object has one type here; all of them travel inside
//! [`ResponseEnvelope`](super::envelope::ResponseEnvelope).

mod account;
mod record;
mod recharge;

pub use account::{Profile, ProfileData, ResultData, TimestampData};
pub use record::{InvitationRecord, RechargeRecord, RecordPage};
pub use recharge::{AddressData, AddressRequest};
