use serde::{Deserialize, Serialize};

/// Body of a successful login. The token is opaque to the client; it is
/// persisted verbatim and attached to later mail requests by the webmail
/// app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginSuccess {
    pub token: String,
}

/// Error body the backend may attach to a rejected request. `detail` is
/// optional; older backend builds return a bare status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_success_parses_token() {
        let body: LoginSuccess =
            serde_json::from_str(r#"{"token":"abc123"}"#).unwrap();
        assert_eq!(body.token, "abc123");
    }

    #[test]
    fn api_error_detail_is_optional() {
        let with: ApiError =
            serde_json::from_str(r#"{"detail":"username taken"}"#).unwrap();
        assert_eq!(with.detail.as_deref(), Some("username taken"));

        let without: ApiError = serde_json::from_str("{}").unwrap();
        assert_eq!(without.detail, None);
    }
}
