//! Authenticated, paginated request construction

use std::sync::Arc;

use reqwest::{Client as HttpClient, Url};
use serde::Serialize;

use crate::error::TransportError;

use super::clock::Clock;
use super::pagination::PageQuery;

/// Freshness timestamp parameter sent with every request
pub const PARAM_TIMESTAMP: &str = "tamptime";

/// Builds request URLs against the server base and performs the HTTP calls.
///
/// Holds no credentials; the bearer secret is passed per call by whoever
/// obtained it from the session.
#[derive(Clone)]
pub struct RequestBuilder {
    http: HttpClient,
    base_url: Url,
    clock: Arc<dyn Clock>,
}

impl RequestBuilder {
    pub fn new(http: HttpClient, server: &str, clock: Arc<dyn Clock>) -> Result<Self, TransportError> {
        let base_url = Url::parse(server).map_err(|e| TransportError::InvalidUrl(format!("{}: {}", server, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(TransportError::InvalidUrl(server.to_string()));
        }
        Ok(Self { http, base_url, clock })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Current time in milliseconds, as a `tamptime` value
    pub fn timestamp(&self) -> String {
        self.clock.now_millis().to_string()
    }

    /// `{server}/{path}` with no query
    pub fn endpoint_url(&self, path: &str) -> Result<Url, TransportError> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|_| TransportError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(path);
        Ok(url)
    }

    /// `{server}/{path}?<params>&tamptime=<now ms>`
    pub fn query_url(&self, path: &str, params: &[(&str, String)]) -> Result<Url, TransportError> {
        let mut url = self.endpoint_url(path)?;
        {
            let mut query = url.query_pairs_mut();
            for (key, value) in params {
                query.append_pair(key, value);
            }
            query.append_pair(PARAM_TIMESTAMP, &self.timestamp());
        }
        log::debug!("request URL {}", url);
        Ok(url)
    }

    /// Listing URL: only the fields set in `query` become parameters
    pub fn paginated_url(&self, path: &str, query: &PageQuery) -> Result<Url, TransportError> {
        self.query_url(path, &query.to_query_params())
    }

    /// GET with `Authorization: Bearer`, returning the raw body.
    ///
    /// Non-2xx statuses are not errors here: the envelope in the body decides.
    pub async fn get_authenticated(&self, url: Url, bearer: &str) -> Result<Vec<u8>, TransportError> {
        let response = self.http.get(url).bearer_auth(bearer).send().await?;
        log::debug!("Status: {}", response.status());
        let body = response.bytes().await?;
        log::trace!("Raw response: {}", String::from_utf8_lossy(&body));
        Ok(body.to_vec())
    }

    /// Unauthenticated GET, returning the raw body
    pub async fn get(&self, url: Url) -> Result<Vec<u8>, TransportError> {
        let response = self.http.get(url).send().await?;
        log::debug!("Status: {}", response.status());
        Ok(response.bytes().await?.to_vec())
    }

    /// Unauthenticated JSON POST to `{server}/{path}`; the caller reads the
    /// response (login needs its headers)
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, TransportError> {
        let url = self.endpoint_url(path)?;
        log::debug!("request URL {}", url);
        let response = self.http.post(url).json(body).send().await?;
        log::debug!("Status: {}", response.status());
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::clock::ManualClock;
    use chrono::{TimeZone, Utc};
    use std::collections::HashMap;

    fn builder(server: &str) -> (RequestBuilder, ManualClock) {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2021, 7, 27, 12, 0, 0).unwrap());
        let rb = RequestBuilder::new(HttpClient::new(), server, Arc::new(clock.clone())).unwrap();
        (rb, clock)
    }

    fn params(url: &Url) -> HashMap<String, String> {
        url.query_pairs().into_owned().collect()
    }

    #[test]
    fn test_invalid_server_url() {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        assert!(RequestBuilder::new(HttpClient::new(), "not a url", clock.clone()).is_err());
        assert!(RequestBuilder::new(HttpClient::new(), "mailto:a@b.c", clock).is_err());
    }

    #[test]
    fn test_endpoint_url_keeps_base_path() {
        let (rb, _) = builder("https://example.com/api/");
        assert_eq!(rb.endpoint_url("login").unwrap().as_str(), "https://example.com/api/login");

        let (rb, _) = builder("https://example.com");
        assert_eq!(rb.endpoint_url("login").unwrap().as_str(), "https://example.com/login");
    }

    #[test]
    fn test_paginated_url_omits_unset_page() {
        let (rb, clock) = builder("https://example.com");
        let url = rb.paginated_url("invitationRecord", &PageQuery::new().page_size(10)).unwrap();
        let q = params(&url);

        assert_eq!(url.path(), "/invitationRecord");
        assert!(!q.contains_key("pager"));
        assert_eq!(q.get("pagerNum").map(String::as_str), Some("10"));
        assert_eq!(q.get("tamptime"), Some(&clock.now_millis().to_string()));
        assert!(!q.contains_key("start"));
        assert!(!q.contains_key("end"));
    }

    #[test]
    fn test_paginated_url_sends_page_zero() {
        let (rb, _) = builder("https://example.com");
        let url = rb.paginated_url("rechargeRecord", &PageQuery::new().page(0)).unwrap();
        assert_eq!(params(&url).get("pager").map(String::as_str), Some("0"));
    }

    #[test]
    fn test_timestamp_is_fresh_per_url() {
        let (rb, clock) = builder("https://example.com");
        let first = rb.query_url("user", &[]).unwrap();
        clock.advance(chrono::Duration::seconds(5));
        let second = rb.query_url("user", &[]).unwrap();
        assert_ne!(params(&first)["tamptime"], params(&second)["tamptime"]);
    }

    #[test]
    fn test_query_url_encodes_values() {
        let (rb, _) = builder("https://example.com");
        let url = rb
            .query_url("bindInvitation", &[("invitationCode", "A B&C".to_string())])
            .unwrap();
        assert_eq!(params(&url)["invitationCode"], "A B&C");
    }

    #[tokio::test]
    async fn test_get_authenticated_sends_bearer_and_returns_error_bodies() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/user")
            .match_header("authorization", "Bearer SECRET")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .with_body(r#"{"State":500,"msg":"boom","data":null}"#)
            .expect(1)
            .create_async()
            .await;

        let (rb, _) = builder(&server.url());
        let url = rb.query_url("user", &[]).unwrap();
        let body = rb.get_authenticated(url, "SECRET").await.unwrap();

        assert!(String::from_utf8(body).unwrap().contains("boom"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        let (rb, _) = builder("http://127.0.0.1:1");
        let url = rb.query_url("user", &[]).unwrap();
        assert!(rb.get_authenticated(url, "SECRET").await.is_err());
    }
}
