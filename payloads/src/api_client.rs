use crate::{requests, responses};
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for the auth endpoints of the mail backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/v1/{path}", &self.address)
    }

    async fn post_query(
        &self,
        path: &str,
        query: &impl Serialize,
    ) -> ReqwestResult {
        self.inner_client
            .post(self.format_url(path))
            .query(query)
            .send()
            .await
    }
}

/// Methods on the backend API
impl APIClient {
    /// Create an account for the derived address.
    ///
    /// The caller gates submission on the signup field rules; no
    /// independent validation happens here. A rejection carries the
    /// backend's `detail` message when it sends one.
    pub async fn signup(
        &self,
        credentials: &requests::AuthCredentials,
    ) -> Result<(), ClientError> {
        let response = self.post_query("auth/signup", credentials).await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await?;
            return Err(ClientError::Rejected(
                status,
                signup_rejection(&body),
            ));
        }
        Ok(())
    }

    /// Exchange credentials for a session token.
    ///
    /// Rejections collapse to a fixed message: unlike signup, nothing the
    /// backend says about a failed login is shown to the user.
    pub async fn login(
        &self,
        credentials: &requests::AuthCredentials,
    ) -> Result<responses::LoginSuccess, ClientError> {
        let response = self.post_query("auth/login", credentials).await?;
        if !response.status().is_success() {
            return Err(ClientError::Rejected(
                response.status(),
                "Invalid credentials".to_string(),
            ));
        }
        Ok(response.json::<responses::LoginSuccess>().await?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The backend answered with a non-success status. Displays the
    /// user-facing message, never the status code.
    #[error("{1}")]
    Rejected(StatusCode, String),
    /// No response was obtained at all.
    #[error("Network error")]
    Network(#[from] reqwest::Error),
}

/// User-facing message for a rejected signup: the body's `detail` field
/// when present, else a generic fallback.
fn signup_rejection(body: &str) -> String {
    serde_json::from_str::<responses::ApiError>(body)
        .ok()
        .and_then(|e| e.detail)
        .unwrap_or_else(|| "Signup failed".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_rejection_prefers_server_detail() {
        assert_eq!(
            signup_rejection(r#"{"detail":"username taken"}"#),
            "username taken"
        );
    }

    #[test]
    fn signup_rejection_falls_back_on_opaque_bodies() {
        assert_eq!(signup_rejection("{}"), "Signup failed");
        assert_eq!(signup_rejection("not json"), "Signup failed");
        assert_eq!(signup_rejection(""), "Signup failed");
        assert_eq!(signup_rejection(r#"{"detail":null}"#), "Signup failed");
    }

    #[test]
    fn rejected_error_displays_only_the_message() {
        let err = ClientError::Rejected(
            StatusCode::UNAUTHORIZED,
            "Invalid credentials".to_string(),
        );
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn url_formatting_targets_the_versioned_api() {
        let client = APIClient {
            address: "http://mail.litsuite.app:8000".to_string(),
            inner_client: reqwest::Client::new(),
        };
        assert_eq!(
            client.format_url("auth/signup"),
            "http://mail.litsuite.app:8000/api/v1/auth/signup"
        );
    }
}
