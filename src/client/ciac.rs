//! Authenticated account endpoints

use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::AuthApi;
use super::envelope::{self, ResponseEnvelope};
use super::models::{
    AddressData, AddressRequest, InvitationRecord, Profile, ProfileData, RechargeRecord, RecordPage,
    ResultData,
};
use super::pagination::PageQuery;
use super::request::RequestBuilder;
use super::session::SessionManager;
use crate::error::Result;

const USER_PATH: &str = "user";
const INVITATION_RECORD_PATH: &str = "invitationRecord";
const RECHARGE_RECORD_PATH: &str = "rechargeRecord";
const BIND_PATH: &str = "bindInvitation";
const ADDRESS_PATH: &str = "recharge";

/// Client for the bearer-authenticated endpoints.
///
/// Each call asks the session for a credential first, so no request ever
/// leaves with a token already known to be expired.
pub struct CiacClient<A: AuthApi> {
    session: Arc<SessionManager<A>>,
    requests: RequestBuilder,
}

impl<A: AuthApi> CiacClient<A> {
    pub fn new(session: Arc<SessionManager<A>>, requests: RequestBuilder) -> Self {
        Self { session, requests }
    }

    async fn get<T: DeserializeOwned>(&self, url: reqwest::Url) -> Result<ResponseEnvelope<T>> {
        let credential = self.session.ensure_authenticated(false).await?;
        let body = self.requests.get_authenticated(url, &credential.secret).await?;
        Ok(envelope::decode_envelope(&body)?)
    }

    /// Account profile; decoding is the only success condition
    pub async fn user_info(&self) -> Result<Profile> {
        let url = self.requests.query_url(USER_PATH, &[])?;
        let envelope: ResponseEnvelope<ProfileData> = self.get(url).await?;
        Ok(envelope.data.into())
    }

    /// One page of invitation rewards; an empty page ends pagination
    pub async fn invitation_records(&self, query: &PageQuery) -> Result<Vec<InvitationRecord>> {
        self.records(INVITATION_RECORD_PATH, query).await
    }

    /// One page of recharges; an empty page ends pagination
    pub async fn recharge_records(&self, query: &PageQuery) -> Result<Vec<RechargeRecord>> {
        self.records(RECHARGE_RECORD_PATH, query).await
    }

    async fn records<T: DeserializeOwned>(&self, path: &str, query: &PageQuery) -> Result<Vec<T>> {
        let url = self.requests.paginated_url(path, query)?;
        let envelope: ResponseEnvelope<RecordPage<T>> = self.get(url).await?;
        log::debug!("Fetched {} records from {}", envelope.data.records.len(), path);
        Ok(envelope.data.records)
    }

    /// Bind an invitation code. `Ok(false)` means the server said no.
    pub async fn bind(&self, code: &str) -> Result<bool> {
        let url = self
            .requests
            .query_url(BIND_PATH, &[("invitationCode", code.to_string())])?;
        let envelope: ResponseEnvelope<ResultData> = self.get(url).await?;
        let bound = envelope::bind_succeeded(&envelope);
        if !bound {
            log::info!("Bind refused: {}", envelope.message());
        }
        Ok(bound)
    }

    /// Recharge address. An empty string means none was allocated.
    pub async fn address(&self, request: &AddressRequest) -> Result<String> {
        let mut params = vec![("protocol", request.protocol.to_string())];
        if let Some(coin_type) = request.coin_type {
            params.push(("type", coin_type.to_string()));
        }
        params.push(("force", request.force.to_string()));

        let url = self.requests.query_url(ADDRESS_PATH, &params)?;
        let envelope: ResponseEnvelope<Option<AddressData>> = self.get(url).await?;
        if !envelope::address_allocated(&envelope) {
            log::info!("No address allocated: {}", envelope.message());
            return Ok(String::new());
        }
        Ok(envelope.data.map(|d| d.address).unwrap_or_default())
    }
}
