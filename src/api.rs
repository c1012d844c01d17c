// API client for the DSA Quest backend
//
// Thin JSON-over-HTTP wrapper: one fixed base URL, bearer token from the
// injected `TokenProvider` on every request that needs it, no retry or
// refresh logic. The `Api` enum dispatches between the real backend and
// the in-memory demo backend so the TUI code never cares which one it is
// talking to.

use crate::auth::TokenProvider;
use crate::demo::DemoApi;
use crate::models::Problem;
use crate::tracker::TimeSubmission;
use serde::Deserialize;
use serde_json::json;
use std::fmt;
use std::sync::Arc;

/// Errors surfaced by backend calls
///
/// Transport failures (DNS, refused connection, timeout) carry the
/// reqwest error; HTTP-level failures carry the status and the backend's
/// `message`/`detail` payload when present.
#[derive(Debug)]
pub enum ApiError {
    Transport(reqwest::Error),
    Status { status: u16, message: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "Network error: {}", e),
            ApiError::Status { status, message } => write!(f, "{} (HTTP {})", message, status),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e)
    }
}

/// Pull a human-readable message out of a backend error payload
///
/// The backend is inconsistent about the field name: login and OTP
/// endpoints use `detail`, registration-start uses `message`. Fall back
/// to a generic string when neither parses.
fn extract_message(status: u16, body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorPayload {
        message: Option<String>,
        detail: Option<String>,
    }

    serde_json::from_str::<ErrorPayload>(body)
        .ok()
        .and_then(|p| p.message.or(p.detail))
        .unwrap_or_else(|| format!("Request failed with status {}", status))
}

#[derive(Deserialize)]
struct LoginResponse {
    access_token: String,
}

/// HTTP client bound to the backend base URL
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl ApiClient {
    pub fn new(base_url: &str, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Build a POST with JSON content type and, if present, the bearer token
    fn post(&self, path: &str, body: serde_json::Value) -> reqwest::RequestBuilder {
        let mut req = self
            .http
            .post(self.url(path))
            .header("Content-Type", "application/json")
            .json(&body);
        if let Some(token) = self.tokens.token() {
            req = req.header("Authorization", format!("Bearer {}", token));
        }
        req
    }

    /// Check the response status and map failures to `ApiError::Status`
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            message: extract_message(status.as_u16(), &body),
        })
    }

    /// `POST auth/login/` — returns the bearer token
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let response = self
            .post("auth/login/", json!({ "email": email, "password": password }))
            .send()
            .await?;
        let response = Self::check(response).await?;
        let payload: LoginResponse = response.json().await?;
        Ok(payload.access_token)
    }

    /// `POST auth/register/start` — triggers OTP dispatch
    pub async fn register_start(&self, email: &str) -> Result<(), ApiError> {
        let response = self
            .post("auth/register/start", json!({ "email": email }))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// `POST auth/register/verify` — validates the OTP
    pub async fn register_verify(&self, email: &str, otp: &str) -> Result<(), ApiError> {
        let response = self
            .post("auth/register/verify", json!({ "email": email, "otp": otp }))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// `POST auth/register/complete` — creates the account
    pub async fn register_complete(
        &self,
        email: &str,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<(), ApiError> {
        let response = self
            .post(
                "auth/register/complete",
                json!({
                    "email": email,
                    "username": username,
                    "password": password,
                    "confirm_password": confirm_password,
                }),
            )
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// `GET home/problems/` — the full problem list
    pub async fn problems(&self) -> Result<Vec<Problem>, ApiError> {
        let mut req = self
            .http
            .get(self.url("home/problems/"))
            .header("Content-Type", "application/json");
        if let Some(token) = self.tokens.token() {
            req = req.header("Authorization", format!("Bearer {}", token));
        }
        let response = Self::check(req.send().await?).await?;
        Ok(response.json().await?)
    }

    /// `POST home/updateTime/{id}` — record elapsed seconds and status
    pub async fn update_time(&self, submission: &TimeSubmission) -> Result<(), ApiError> {
        let path = format!("home/updateTime/{}", submission.problem_id);
        let response = self
            .post(
                &path,
                json!({ "time": submission.time_secs, "status": submission.status }),
            )
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// `POST home/updateStatus/{id}` — mark a problem solved
    pub async fn mark_solved(&self, problem_id: u64) -> Result<(), ApiError> {
        let path = format!("home/updateStatus/{}", problem_id);
        let response = self.post(&path, json!({ "status": "Solved" })).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}

/// Backend dispatch: the real API or the in-memory demo backend
#[derive(Clone)]
pub enum Api {
    Remote(ApiClient),
    Demo(DemoApi),
}

impl Api {
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        match self {
            Api::Remote(c) => c.login(email, password).await,
            Api::Demo(d) => d.login(email, password).await,
        }
    }

    pub async fn register_start(&self, email: &str) -> Result<(), ApiError> {
        match self {
            Api::Remote(c) => c.register_start(email).await,
            Api::Demo(d) => d.register_start(email).await,
        }
    }

    pub async fn register_verify(&self, email: &str, otp: &str) -> Result<(), ApiError> {
        match self {
            Api::Remote(c) => c.register_verify(email, otp).await,
            Api::Demo(d) => d.register_verify(email, otp).await,
        }
    }

    pub async fn register_complete(
        &self,
        email: &str,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<(), ApiError> {
        match self {
            Api::Remote(c) => {
                c.register_complete(email, username, password, confirm_password)
                    .await
            }
            Api::Demo(d) => d.register_complete(username).await,
        }
    }

    pub async fn problems(&self) -> Result<Vec<Problem>, ApiError> {
        match self {
            Api::Remote(c) => c.problems().await,
            Api::Demo(d) => d.problems().await,
        }
    }

    pub async fn update_time(&self, submission: &TimeSubmission) -> Result<(), ApiError> {
        match self {
            Api::Remote(c) => c.update_time(submission).await,
            Api::Demo(d) => d.update_time(submission).await,
        }
    }

    pub async fn mark_solved(&self, problem_id: u64) -> Result<(), ApiError> {
        match self {
            Api::Remote(c) => c.mark_solved(problem_id).await,
            Api::Demo(d) => d.mark_solved(problem_id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryTokenStore;

    #[test]
    fn extract_message_prefers_backend_payload() {
        assert_eq!(
            extract_message(400, r#"{"message": "Failed to send OTP"}"#),
            "Failed to send OTP"
        );
        assert_eq!(
            extract_message(401, r#"{"detail": "Invalid OTP"}"#),
            "Invalid OTP"
        );
        // message wins when both are present
        assert_eq!(
            extract_message(400, r#"{"message": "a", "detail": "b"}"#),
            "a"
        );
    }

    #[test]
    fn extract_message_falls_back_on_garbage() {
        assert_eq!(
            extract_message(502, "<html>bad gateway</html>"),
            "Request failed with status 502"
        );
        assert_eq!(
            extract_message(500, "{}"),
            "Request failed with status 500"
        );
    }

    #[test]
    fn url_joins_base_and_path() {
        let client = ApiClient::new(
            "https://api.example.com/",
            Arc::new(MemoryTokenStore::new()),
        );
        assert_eq!(
            client.url("/home/problems/"),
            "https://api.example.com/home/problems/"
        );
        assert_eq!(
            client.url("auth/login/"),
            "https://api.example.com/auth/login/"
        );
    }
}
