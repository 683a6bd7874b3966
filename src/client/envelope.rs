//! The server's uniform response wrapper and per-endpoint success rules
//!
//! Every endpoint answers with `{"State": <code>, "msg": <text>, "data": {...}}`.
//! Whether an answer means success differs by endpoint, so each rule is a
//! named predicate below instead of an inline comparison at the call site.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::DecodeError;

use super::models::{AddressData, ResultData};

/// Top-level status the server uses for success
pub const STATUS_OK: i64 = 200;

/// Nested `data.result` value the server uses for success
pub const RESULT_OK: i64 = 1;

/// Decoded response wrapper
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseEnvelope<T> {
    /// Top-level status code, not sent by every endpoint
    #[serde(rename = "State", alias = "state", default)]
    pub status: Option<i64>,

    #[serde(rename = "msg", alias = "Msg", default)]
    pub message: Option<String>,

    #[serde(alias = "Data")]
    pub data: T,
}

impl<T> ResponseEnvelope<T> {
    /// Server message, or an empty string when none was sent
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }
}

/// Strictly decode a response body; shape mismatches are errors, never defaults
pub fn decode_envelope<T: DeserializeOwned>(body: &[u8]) -> Result<ResponseEnvelope<T>, DecodeError> {
    serde_json::from_slice(body).map_err(|e| DecodeError::new(e, body))
}

/// Login: `data.result` must be exactly 1
pub fn login_succeeded(envelope: &ResponseEnvelope<ResultData>) -> bool {
    envelope.data.result == Some(RESULT_OK)
}

/// Invitation-code binding: `data.result` must be exactly 1, anything else is
/// "not bound"
pub fn bind_succeeded(envelope: &ResponseEnvelope<ResultData>) -> bool {
    envelope.data.result == Some(RESULT_OK)
}

/// Send-code and register share the nested result rule
pub fn request_accepted(envelope: &ResponseEnvelope<ResultData>) -> bool {
    envelope.data.result == Some(RESULT_OK)
}

/// Address allocation: top-level status must be 200; nothing else counts
pub fn address_allocated(envelope: &ResponseEnvelope<Option<AddressData>>) -> bool {
    envelope.status == Some(STATUS_OK)
}

// Profile and record listings have no predicate: a successful decode is success.
