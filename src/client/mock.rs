//! Mock login for testing
//!
//! Stands in for [`Authenticator`](super::Authenticator) so session tests can
//! count login calls without a server.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use super::AuthApi;
use super::token::Credential;
use crate::error::AuthError;

/// Mock authenticator.
///
/// # Example
/// ```ignore
/// let mock = MockAuthenticator::new().with_token("XYZ", Utc::now() + Duration::hours(1));
/// let session = SessionManager::new(account, mock.clone(), clock);
/// session.ensure_authenticated(false).await?;
/// assert_eq!(mock.login_count().await, 1);
/// ```
#[derive(Clone, Default)]
pub struct MockAuthenticator {
    /// Credential handed out on every successful login
    credential: Arc<Mutex<Option<Credential>>>,
    /// Error to return instead (consumed on first use)
    error: Arc<Mutex<Option<AuthError>>>,
    /// Simulated round-trip time
    delay: Option<Duration>,
    /// Number of login calls made
    logins: Arc<Mutex<usize>>,
    /// Identities passed to login, in order
    identities: Arc<Mutex<Vec<String>>>,
}

impl MockAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(self, secret: &str, expires_at: DateTime<Utc>) -> Self {
        self.with_credential(Credential::new(secret, expires_at))
    }

    pub fn with_credential(self, credential: Credential) -> Self {
        *self.credential.try_lock().expect("fresh mock") = Some(credential);
        self
    }

    pub fn with_error(self, error: AuthError) -> Self {
        *self.error.try_lock().expect("fresh mock") = Some(error);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub async fn login_count(&self) -> usize {
        *self.logins.lock().await
    }

    pub async fn identities(&self) -> Vec<String> {
        self.identities.lock().await.clone()
    }
}

#[async_trait]
impl AuthApi for MockAuthenticator {
    async fn login(&self, identity: &str, _password: &str) -> Result<Credential, AuthError> {
        *self.logins.lock().await += 1;
        self.identities.lock().await.push(identity.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(err) = self.error.lock().await.take() {
            return Err(err);
        }

        self.credential
            .lock()
            .await
            .clone()
            .ok_or(AuthError::MissingCredential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_counts_logins_and_consumes_error() {
        let mock = MockAuthenticator::new()
            .with_token("XYZ", Utc::now())
            .with_error(AuthError::Rejected("nope".to_string()));

        assert!(mock.login("a@b.c", "pw").await.is_err());
        assert_eq!(mock.login("a@b.c", "pw").await.unwrap().secret, "XYZ");
        assert_eq!(mock.login_count().await, 2);
        assert_eq!(mock.identities().await, vec!["a@b.c", "a@b.c"]);
    }
}
