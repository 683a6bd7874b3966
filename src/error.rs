//! Error types for the ciac client

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ciac operations
pub type Result<T> = std::result::Result<T, Error>;

/// Maximum length for response bodies quoted in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Interrupted")]
    Interrupted,
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Durable token store failures
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read token file {}: {message}", .path.display())]
    Read { path: PathBuf, message: String },

    #[error("Failed to write token file {}: {message}", .path.display())]
    Write { path: PathBuf, message: String },

    #[error("Malformed token file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

/// Login handshake failures
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Login rejected by server: {0}")]
    Rejected(String),

    #[error("Login reported success but no session cookie was returned")]
    MissingCredential,

    #[error("Login returned a session cookie without a usable expiry")]
    StaleCredential,

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Session lifecycle failures
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Cached token is corrupt, fix or remove it (or log in with --force): {0}")]
    CorruptStore(StorageError),

    #[error(transparent)]
    Storage(StorageError),

    #[error("Authentication failed: {0}")]
    AuthFailed(#[from] AuthError),
}

/// Network-level failures talking to the server
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request timed out")]
    Timeout,

    #[error("Failed to connect to server: {0}")]
    Connect(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else {
            TransportError::Network(err.to_string())
        }
    }
}

/// Response shape mismatch
#[derive(Debug, Error)]
#[error("Invalid server response: {message}. Body was: {body}")]
pub struct DecodeError {
    pub message: String,
    pub body: String,
}

impl DecodeError {
    pub fn new(err: serde_json::Error, body: &[u8]) -> Self {
        Self {
            message: err.to_string(),
            body: truncate_body(&String::from_utf8_lossy(body)),
        }
    }

    /// Well-formed JSON carrying a value the client cannot represent
    pub fn invalid(message: impl Into<String>, body: &[u8]) -> Self {
        Self {
            message: message.into(),
            body: truncate_body(&String::from_utf8_lossy(body)),
        }
    }
}

/// Truncate a response body to avoid logging excessive data
fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY_LENGTH {
        return body.to_string();
    }
    let mut end = MAX_ERROR_BODY_LENGTH;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("No email configured. Set `email` in the config file or pass --email.")]
    MissingEmail,

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
