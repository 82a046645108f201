//! Owner login and session token checks.

use std::sync::Arc;

use crate::ports::{AuthError, Authenticator, SessionClaims, TokenService};

/// Validates the owner credential pair and mints/validates session tokens.
#[derive(Clone)]
pub struct SessionIssuer {
    authenticator: Arc<dyn Authenticator>,
    tokens: Arc<dyn TokenService>,
}

impl SessionIssuer {
    pub fn new(authenticator: Arc<dyn Authenticator>, tokens: Arc<dyn TokenService>) -> Self {
        Self {
            authenticator,
            tokens,
        }
    }

    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        self.authenticator.authenticate(username, password)
    }

    pub fn issue(&self, username: &str) -> Result<String, AuthError> {
        self.tokens.issue(username)
    }

    pub fn validate(&self, token: &str) -> Result<SessionClaims, AuthError> {
        self.tokens.validate(token)
    }

    /// Authenticate and, on success, issue a token for `username`.
    pub fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        if !self.authenticate(username, password) {
            tracing::warn!("Rejected owner login attempt");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.issue(username)?;
        tracing::info!(username = %username, "Owner session issued");
        Ok(token)
    }

    pub fn lifetime_seconds(&self) -> i64 {
        self.tokens.lifetime_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedAuthenticator;

    impl Authenticator for FixedAuthenticator {
        fn authenticate(&self, username: &str, password: &str) -> bool {
            username == "admin" && password == "secret"
        }
    }

    /// Token is the username itself; "broken" fails to sign.
    struct EchoTokens;

    impl TokenService for EchoTokens {
        fn issue(&self, username: &str) -> Result<String, AuthError> {
            if username == "broken" {
                return Err(AuthError::Signing("bad key".to_string()));
            }
            Ok(format!("token-for-{username}"))
        }

        fn validate(&self, token: &str) -> Result<SessionClaims, AuthError> {
            token
                .strip_prefix("token-for-")
                .map(|username| SessionClaims {
                    username: username.to_string(),
                    exp: 0,
                })
                .ok_or_else(|| AuthError::InvalidToken("unknown".to_string()))
        }

        fn lifetime_seconds(&self) -> i64 {
            86_400
        }
    }

    fn issuer() -> SessionIssuer {
        SessionIssuer::new(Arc::new(FixedAuthenticator), Arc::new(EchoTokens))
    }

    #[test]
    fn test_login_success_issues_token() {
        let token = issuer().login("admin", "secret").unwrap();
        let claims = issuer().validate(&token).unwrap();
        assert_eq!(claims.username, "admin");
    }

    #[test]
    fn test_login_wrong_password() {
        let result = issuer().login("admin", "nope");
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[test]
    fn test_validate_garbage() {
        assert!(matches!(
            issuer().validate("garbage"),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_signing_failure_propagates() {
        assert!(matches!(issuer().issue("broken"), Err(AuthError::Signing(_))));
    }

    #[test]
    fn test_lifetime_passthrough() {
        assert_eq!(issuer().lifetime_seconds(), 86_400);
    }
}
