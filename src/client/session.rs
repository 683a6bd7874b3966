//! Session lifecycle: reuse a cached credential or log in again

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::{AuthError, SessionError, StorageError};

use super::AuthApi;
use super::clock::Clock;
use super::store::TokenStore;
use super::token::Credential;

/// Who we log in as and where the session token is kept
#[derive(Debug, Clone)]
pub struct Account {
    pub identity: String,
    pub password: String,
    pub token_file: PathBuf,
}

/// Sole owner of the current credential.
///
/// Every authenticated request goes through [`ensure_authenticated`], which
/// only hands out a credential that is unexpired at the moment of the call.
/// The whole decision runs under one lock, so concurrent callers that find
/// the credential stale wait for a single login instead of racing their own.
///
/// [`ensure_authenticated`]: SessionManager::ensure_authenticated
pub struct SessionManager<A: AuthApi> {
    account: Account,
    store: TokenStore,
    authenticator: A,
    clock: Arc<dyn Clock>,
    current: Mutex<Option<Credential>>,
}

impl<A: AuthApi> SessionManager<A> {
    pub fn new(account: Account, authenticator: A, clock: Arc<dyn Clock>) -> Self {
        let store = TokenStore::new(account.token_file.clone());
        Self {
            account,
            store,
            authenticator,
            clock,
            current: Mutex::new(None),
        }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Return a credential valid right now, logging in only when needed.
    ///
    /// With `force_refresh` the cached credential is ignored and exactly one
    /// login is performed. Otherwise the in-memory credential, then the token
    /// file, are reused while their expiry is strictly in the future.
    pub async fn ensure_authenticated(&self, force_refresh: bool) -> Result<Credential, SessionError> {
        let mut current = self.current.lock().await;

        if !force_refresh {
            let now = self.clock.now();

            if let Some(credential) = current.as_ref().filter(|c| c.is_valid_at(now)) {
                return Ok(credential.clone());
            }

            match self.store.load() {
                Err(err @ StorageError::Parse { .. }) => {
                    return Err(SessionError::CorruptStore(err));
                }
                Err(err) => return Err(SessionError::Storage(err)),
                Ok(None) => log::info!("No cached token, logging in"),
                Ok(Some(credential)) if credential.is_valid_at(now) => {
                    log::debug!(
                        "Reusing cached token {} (expires at {:?})",
                        credential.redacted(),
                        credential.expires_at
                    );
                    *current = Some(credential.clone());
                    return Ok(credential);
                }
                Ok(Some(credential)) => {
                    log::info!("Cached token expired at {:?}, need refresh", credential.expires_at);
                }
            }
        }

        let credential = self
            .authenticator
            .login(&self.account.identity, &self.account.password)
            .await?;

        // A cookie with no or past expiry would be refused on the next call anyway
        if !credential.is_valid_at(self.clock.now()) {
            return Err(AuthError::StaleCredential.into());
        }

        *current = Some(credential.clone());

        if let Err(err) = self.store.save(&credential) {
            log::warn!("Logged in but could not cache the token: {}", err);
        }

        Ok(credential)
    }
}
