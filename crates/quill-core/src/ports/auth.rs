//! Authentication ports for the single-owner session flow.

use chrono::{DateTime, Utc};

/// Claims carried inside a session token. Never persisted server-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    pub username: String,
    /// Expiry as a unix timestamp in seconds.
    pub exp: i64,
}

impl SessionClaims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

/// Token service trait for signed session tokens.
pub trait TokenService: Send + Sync {
    /// Mint a signed token for `username`.
    fn issue(&self, username: &str) -> Result<String, AuthError>;

    /// Check signature and expiry, returning the embedded claims.
    fn validate(&self, token: &str) -> Result<SessionClaims, AuthError>;

    /// How long an issued token stays valid.
    fn lifetime_seconds(&self) -> i64;
}

/// Credential check against the configured owner account.
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, username: &str, password: &str) -> bool;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing session token")]
    MissingToken,

    #[error("Signing failed: {0}")]
    Signing(String),
}
