//! The single owner account, configured at startup.

use subtle::ConstantTimeEq;

use quill_core::ports::Authenticator;

/// Owner username/password pair checked in constant time.
///
/// Both fields are always compared so a wrong username costs the same as a
/// wrong password. An empty configured field never matches.
#[derive(Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl Authenticator for StaticCredentials {
    fn authenticate(&self, username: &str, password: &str) -> bool {
        if self.username.is_empty() || self.password.is_empty() {
            return false;
        }

        let user_ok = self.username.as_bytes().ct_eq(username.as_bytes());
        let pass_ok = self.password.as_bytes().ct_eq(password.as_bytes());

        (user_ok & pass_ok).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> StaticCredentials {
        StaticCredentials::new("admin", "password")
    }

    #[test]
    fn test_exact_pair_matches() {
        assert!(owner().authenticate("admin", "password"));
    }

    #[test]
    fn test_any_other_pair_fails() {
        let creds = owner();
        let attempts = [
            ("admin", "wrong"),
            ("root", "password"),
            ("password", "admin"),
            ("Admin", "password"),
            ("admin", "Password"),
            ("admin ", "password"),
            ("admin", "passwor"),
            ("", "password"),
            ("admin", ""),
            ("", ""),
        ];

        for (user, pass) in attempts {
            assert!(!creds.authenticate(user, pass), "{user:?}/{pass:?} accepted");
        }
    }

    #[test]
    fn test_empty_configuration_never_matches() {
        let creds = StaticCredentials::new("", "");
        assert!(!creds.authenticate("", ""));
    }

    #[test]
    fn test_debug_hides_password() {
        let rendered = format!("{:?}", StaticCredentials::new("admin", "hunter2"));
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("hunter2"));
    }
}
