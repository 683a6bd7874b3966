//! Unauthenticated helper endpoints: server time, verification code, sign-up

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::envelope::{self, ResponseEnvelope};
use super::models::{ResultData, TimestampData};
use super::request::RequestBuilder;
use crate::error::{DecodeError, Result, TransportError};

const TIMESTAMP_PATH: &str = "timestamp";
const SEND_CODE_PATH: &str = "sendCode";
const REGISTER_PATH: &str = "register";

/// Server's verdict on a send-code or register request.
///
/// A refusal is a normal answer, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub accepted: bool,
    pub message: String,
}

impl From<ResponseEnvelope<ResultData>> for Outcome {
    fn from(envelope: ResponseEnvelope<ResultData>) -> Self {
        Self {
            accepted: envelope::request_accepted(&envelope),
            message: envelope.message().to_string(),
        }
    }
}

/// Registration details
#[derive(Debug, Clone, Serialize)]
pub struct Registration<'a> {
    #[serde(rename = "mail")]
    pub email: &'a str,

    #[serde(rename = "pwd")]
    pub password: &'a str,

    /// Code received by email
    #[serde(rename = "code", skip_serializing_if = "Option::is_none")]
    pub verification_code: Option<&'a str>,

    /// Invitation code of the referrer
    #[serde(rename = "invitationCode", skip_serializing_if = "Option::is_none")]
    pub invitation_code: Option<&'a str>,
}

#[derive(Serialize)]
struct Stamped<T: Serialize> {
    #[serde(flatten)]
    inner: T,
    tamptime: String,
}

#[derive(Serialize)]
struct SendCodeRequest<'a> {
    mail: &'a str,
}

/// Client for endpoints that need no session
#[derive(Clone)]
pub struct PublicClient {
    requests: RequestBuilder,
}

impl PublicClient {
    pub fn new(requests: RequestBuilder) -> Self {
        Self { requests }
    }

    /// Server clock, milliseconds since epoch
    pub async fn timestamp(&self) -> Result<i64> {
        let url = self.requests.endpoint_url(TIMESTAMP_PATH)?;
        log::debug!("request URL {}", url);
        let body = self.requests.get(url).await?;
        let envelope: ResponseEnvelope<TimestampData> = envelope::decode_envelope(&body)?;
        Ok(envelope.data.timestamp)
    }

    /// Server clock as an instant
    pub async fn server_time(&self) -> Result<DateTime<Utc>> {
        let millis = self.timestamp().await?;
        DateTime::from_timestamp_millis(millis).ok_or_else(|| {
            DecodeError::invalid(
                format!("timestamp {} is out of range", millis),
                millis.to_string().as_bytes(),
            )
            .into()
        })
    }

    /// Ask the server to email a verification code
    pub async fn send_code(&self, email: &str) -> Result<Outcome> {
        self.post(SEND_CODE_PATH, SendCodeRequest { mail: email }).await
    }

    /// Create an account
    pub async fn register(&self, registration: &Registration<'_>) -> Result<Outcome> {
        self.post(REGISTER_PATH, registration).await
    }

    async fn post<T: Serialize>(&self, path: &str, body: T) -> Result<Outcome> {
        let request = Stamped {
            inner: body,
            tamptime: self.requests.timestamp(),
        };
        let response = self.requests.post_json(path, &request).await?;
        let body = response.bytes().await.map_err(TransportError::from)?;
        let envelope: ResponseEnvelope<ResultData> = envelope::decode_envelope(&body)?;
        Ok(envelope.into())
    }
}
