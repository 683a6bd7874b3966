//! Client for the Crypto Investment Advisor service
//!
//! Layers, leaves first:
//! - [`store`] persists the session [`Credential`]
//! - [`token`] turns the login `Set-Cookie` header into a [`Credential`]
//! - [`auth`] performs the login handshake ([`AuthApi`])
//! - [`session`] decides between reusing the cached credential and logging in
//! - [`request`] builds authenticated, paginated requests; [`envelope`]
//!   decodes the replies

use async_trait::async_trait;

use crate::error::AuthError;

pub mod auth;
pub mod ciac;
pub mod clock;
pub mod envelope;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;
pub mod public;
pub mod request;
pub mod session;
pub mod store;
pub mod token;

pub use auth::Authenticator;
pub use ciac::CiacClient;
pub use clock::{Clock, SystemClock};
pub use pagination::PageQuery;
pub use public::{Outcome, PublicClient, Registration};
pub use request::RequestBuilder;
pub use session::{Account, SessionManager};
pub use store::TokenStore;
pub use token::Credential;

/// Login handshake
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange email and password for a fresh session credential
    async fn login(&self, identity: &str, password: &str) -> Result<Credential, AuthError>;
}
