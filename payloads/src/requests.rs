use serde::{Deserialize, Serialize};

/// Credentials for both auth endpoints. The backend keys accounts by the
/// full address, so the username is expanded with [`crate::identity`] rules
/// before this struct is built.
///
/// Serialized into URL query parameters, matching the backend's interface.
/// See DESIGN.md for the transport caveat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthCredentials {
    pub email: String,
    pub password: String,
}

impl AuthCredentials {
    /// Expand a bare username into the credentials the backend expects.
    pub fn for_username(username: &str, password: &str) -> Self {
        Self {
            email: crate::identity::derive_email(username),
            password: password.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_username_into_address() {
        let creds = AuthCredentials::for_username("alice", "longenough1");
        assert_eq!(creds.email, "alice@litmail.art");
        assert_eq!(creds.password, "longenough1");
    }

    #[test]
    fn repeated_expansion_starts_from_the_username() {
        // The address is rebuilt from the bare username on every submit;
        // there is no path that feeds a derived address back in.
        for _ in 0..3 {
            let creds = AuthCredentials::for_username("alice", "pw");
            assert_eq!(creds.email.matches("@litmail.art").count(), 1);
        }
    }
}
