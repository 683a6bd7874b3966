//! Command execution context
//!
//! Loads the config, builds the one HTTP client and wires the session
//! layers together so handlers only deal with their own endpoint.

use std::sync::Arc;

use dialoguer::{Password, theme::ColorfulTheme};

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::{
    Account, Authenticator, CiacClient, Clock, PublicClient, RequestBuilder, SessionManager,
    SystemClock, TokenStore,
};
use crate::config::Config;
use crate::error::{Result, StorageError};

/// Unauthenticated context: HTTP plumbing only.
pub struct PublicContext {
    pub client: PublicClient,
    pub requests: RequestBuilder,
    pub clock: Arc<dyn Clock>,
    pub format: OutputFormat,
}

impl PublicContext {
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(opts.timeout)
            .user_agent(concat!("ciac/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(crate::error::TransportError::from)?;
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let requests = RequestBuilder::new(http, &opts.server, clock.clone())?;
        log::debug!("Using server {}", requests.base_url());

        Ok(Self {
            client: PublicClient::new(requests.clone()),
            requests,
            clock,
            format: opts.format,
        })
    }
}

/// Context for commands that need the account session.
pub struct CommandContext {
    pub client: CiacClient<Authenticator>,
    pub session: Arc<SessionManager<Authenticator>>,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Load config and assemble the session.
    ///
    /// The password is prompted for only when the config has none and a
    /// login is going to happen (`force`, or no usable cached token). A corrupt
    /// token file fails the session before any login, so it is not asked for.
    pub fn new(opts: &GlobalOptions, force: bool) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        let identity = config.require_email()?.to_string();
        let token_file = config.token_path()?;

        let public = PublicContext::new(opts)?;
        let password = match config.password.clone() {
            Some(password) => password,
            None if force || login_expected(&token_file, public.clock.as_ref()) => {
                prompt_password(&identity)?
            }
            None => String::new(),
        };

        let account = Account {
            identity,
            password,
            token_file,
        };
        let authenticator = Authenticator::new(public.requests.clone(), public.clock.clone());
        let session = Arc::new(SessionManager::new(account, authenticator, public.clock.clone()));
        let client = CiacClient::new(session.clone(), public.requests);

        Ok(Self {
            client,
            session,
            format: public.format,
        })
    }
}

fn login_expected(path: &std::path::Path, clock: &dyn Clock) -> bool {
    match TokenStore::new(path).load() {
        Ok(Some(credential)) => !credential.is_valid_at(clock.now()),
        Err(StorageError::Parse { .. }) => false,
        _ => true,
    }
}

fn prompt_password(identity: &str) -> Result<String> {
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Password for {}", identity))
        .interact()?;
    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Credential;
    use chrono::{Duration, Utc};

    fn opts(config: &std::path::Path) -> GlobalOptions {
        GlobalOptions {
            format: OutputFormat::Table,
            config: Some(config.to_string_lossy().into_owned()),
            server: "http://127.0.0.1:1".to_string(),
            timeout: std::time::Duration::from_secs(1),
        }
    }

    #[test]
    fn test_context_with_configured_password() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.json");
        let token = dir.path().join("token.json");
        std::fs::write(
            &config,
            format!(
                r#"{{"email":"a@b.c","password":"pw","tokenFile":"{}"}}"#,
                token.display()
            ),
        )
        .unwrap();

        let ctx = CommandContext::new(&opts(&config), false).unwrap();
        assert_eq!(ctx.session.account().identity, "a@b.c");
        assert_eq!(ctx.session.account().token_file, token);
    }

    #[test]
    fn test_no_prompt_when_cached_token_valid() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.json");
        let token = dir.path().join("token.json");
        TokenStore::new(&token)
            .save(&Credential::new("SECRET", Utc::now() + Duration::hours(1)))
            .unwrap();
        std::fs::write(
            &config,
            format!(r#"{{"email":"a@b.c","tokenFile":"{}"}}"#, token.display()),
        )
        .unwrap();

        let ctx = CommandContext::new(&opts(&config), false).unwrap();
        assert!(ctx.session.account().password.is_empty());
    }

    #[test]
    fn test_no_prompt_when_token_file_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.json");
        let token = dir.path().join("token.json");
        std::fs::write(&token, r#"{"jwt": "SECRET""#).unwrap();
        std::fs::write(
            &config,
            format!(r#"{{"email":"a@b.c","tokenFile":"{}"}}"#, token.display()),
        )
        .unwrap();

        let ctx = CommandContext::new(&opts(&config), false).unwrap();
        assert!(ctx.session.account().password.is_empty());
    }

    #[test]
    fn test_missing_email_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.json");
        std::fs::write(&config, r#"{"password":"pw"}"#).unwrap();

        assert!(CommandContext::new(&opts(&config), false).is_err());
    }

    #[test]
    fn test_bad_server_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut options = opts(&dir.path().join("config.json"));
        options.server = "not a url".to_string();
        assert!(PublicContext::new(&options).is_err());
    }
}
