//! Login handshake: email/password in, cookie-borne session token out

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::SET_COOKIE;
use serde::Serialize;

use crate::error::AuthError;

use super::AuthApi;
use super::clock::Clock;
use super::envelope::{self, ResponseEnvelope};
use super::models::ResultData;
use super::request::RequestBuilder;
use super::token::{self, Credential};

const LOGIN_PATH: &str = "login";

#[derive(Serialize)]
struct LoginRequest<'a> {
    mail: &'a str,
    pwd: &'a str,
    tamptime: String,
}

/// Performs `POST {server}/login` and turns the `Set-Cookie` reply into a
/// [`Credential`]
#[derive(Clone)]
pub struct Authenticator {
    requests: RequestBuilder,
    clock: Arc<dyn Clock>,
}

impl Authenticator {
    pub fn new(requests: RequestBuilder, clock: Arc<dyn Clock>) -> Self {
        Self { requests, clock }
    }
}

#[async_trait]
impl AuthApi for Authenticator {
    async fn login(&self, identity: &str, password: &str) -> Result<Credential, AuthError> {
        let request = LoginRequest {
            mail: identity,
            pwd: password,
            tamptime: self.clock.now_millis().to_string(),
        };

        let response = self.requests.post_json(LOGIN_PATH, &request).await?;
        let observed_at = self.clock.now();

        // The session only exists in the headers; grab them before the body
        // consumes the response
        let cookies: Vec<String> = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_owned)
            .collect();

        let body = response.bytes().await.map_err(crate::error::TransportError::from)?;
        let envelope: ResponseEnvelope<ResultData> = envelope::decode_envelope(&body)?;
        log::debug!("Login response: state={:?} msg={:?}", envelope.status, envelope.message());

        if !envelope::login_succeeded(&envelope) {
            return Err(AuthError::Rejected(envelope.message().to_string()));
        }

        let credential = cookies
            .iter()
            .find_map(|raw| token::parse_cookie(raw, observed_at).ok())
            .ok_or(AuthError::MissingCredential)?;

        log::info!(
            "Logged in as {}, token {} expires at {:?}",
            identity,
            credential.redacted(),
            credential.expires_at
        );
        Ok(credential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::clock::ManualClock;
    use chrono::{Duration, TimeZone, Utc};
    use mockito::Matcher;

    fn authenticator(server: &str) -> (Authenticator, ManualClock) {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2021, 7, 27, 12, 0, 0).unwrap());
        let shared: Arc<dyn Clock> = Arc::new(clock.clone());
        let requests = RequestBuilder::new(reqwest::Client::new(), server, shared.clone()).unwrap();
        (Authenticator::new(requests, shared), clock)
    }

    #[tokio::test]
    async fn test_login_parses_cookie() {
        let mut server = mockito::Server::new_async().await;
        let (auth, clock) = authenticator(&server.url());
        let mock = server
            .mock("POST", "/login")
            .match_header("content-type", "application/json")
            .match_body(Matcher::AllOf(vec![
                Matcher::PartialJsonString(r#"{"mail":"a@b.c","pwd":"secret"}"#.to_string()),
                Matcher::PartialJsonString(format!(r#"{{"tamptime":"{}"}}"#, clock.now_millis())),
            ]))
            .with_status(200)
            .with_header("set-cookie", "jwt=XYZ; Path=/; Max-Age=60")
            .with_body(r#"{"State":200,"data":{"result":1}}"#)
            .expect(1)
            .create_async()
            .await;

        let cred = auth.login("a@b.c", "secret").await.unwrap();
        assert_eq!(cred.secret, "XYZ");
        assert_eq!(cred.expires_at, Some(clock.now() + Duration::seconds(60)));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_login_rejected_uses_server_message() {
        let mut server = mockito::Server::new_async().await;
        let (auth, _) = authenticator(&server.url());
        let _mock = server
            .mock("POST", "/login")
            .with_status(200)
            .with_header("set-cookie", "jwt=XYZ; Max-Age=60")
            .with_body(r#"{"State":200,"msg":"wrong password","data":{"result":0}}"#)
            .create_async()
            .await;

        match auth.login("a@b.c", "bad").await {
            Err(AuthError::Rejected(msg)) => assert_eq!(msg, "wrong password"),
            other => panic!("Expected Rejected, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_login_success_without_cookie_is_missing_credential() {
        let mut server = mockito::Server::new_async().await;
        let (auth, _) = authenticator(&server.url());
        let _mock = server
            .mock("POST", "/login")
            .with_status(200)
            .with_body(r#"{"State":200,"data":{"result":1}}"#)
            .create_async()
            .await;

        assert!(matches!(
            auth.login("a@b.c", "secret").await,
            Err(AuthError::MissingCredential)
        ));
    }

    #[tokio::test]
    async fn test_login_cookie_without_jwt_is_missing_credential() {
        let mut server = mockito::Server::new_async().await;
        let (auth, _) = authenticator(&server.url());
        let _mock = server
            .mock("POST", "/login")
            .with_status(200)
            .with_header("set-cookie", "lang=en; Path=/")
            .with_body(r#"{"State":200,"data":{"result":1}}"#)
            .create_async()
            .await;

        assert!(matches!(
            auth.login("a@b.c", "secret").await,
            Err(AuthError::MissingCredential)
        ));
    }

    #[tokio::test]
    async fn test_login_undecodable_body_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let (auth, _) = authenticator(&server.url());
        let _mock = server
            .mock("POST", "/login")
            .with_status(502)
            .with_body("Bad Gateway")
            .create_async()
            .await;

        assert!(matches!(
            auth.login("a@b.c", "secret").await,
            Err(AuthError::Decode(_))
        ));
    }
}
