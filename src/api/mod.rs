mod artists;
mod auth;
mod commissions;
mod portfolios;

use std::sync::{Arc, Mutex};

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Errors surfaced by the transport layer. One attempt per call, no
/// retries, no timeouts: whatever happened is reported as-is.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status, possibly carrying a
    /// `message` field in the body.
    #[error("server returned {status}")]
    Status { status: u16, message: Option<String> },
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The response body did not match the expected shape.
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The server-supplied message if there is one, otherwise the given
    /// per-operation fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// The HTTP client. Cheap to clone; the token slot is shared between
/// clones and written only by the auth reducer (login, logout, failed
/// session restore).
#[derive(Clone)]
pub struct Api {
    base_url: Url,
    client: Client,
    token: Arc<Mutex<Option<String>>>,
}

impl std::fmt::Debug for Api {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Api")
            .field("base_url", &self.base_url.as_str())
            .field("has_token", &self.has_token())
            .finish()
    }
}

impl Api {
    pub fn new(mut base_url: Url, token: Option<String>) -> Self {
        // Relative joins drop the last path segment unless the base ends
        // with a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self {
            base_url,
            client: Client::new(),
            token: Arc::new(Mutex::new(token)),
        }
    }

    pub fn set_token(&self, token: String) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token);
        }
    }

    pub fn clear_token(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }

    pub fn has_token(&self) -> bool {
        self.token
            .lock()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }

    fn bearer(&self) -> Option<String> {
        self.token.lock().ok()?.clone()
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::Transport(format!("invalid path {path}: {e}")))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let endpoint = self.endpoint(path)?;
        self.send(self.client.get(endpoint)).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let endpoint = self.endpoint(path)?;
        self.send(self.client.post(endpoint).json(body)).await
    }

    /// POST where the response body is not interesting to this client.
    pub(crate) async fn post_empty<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let endpoint = self.endpoint(path)?;
        self.send_ignoring_body(self.client.post(endpoint).json(body))
            .await
    }

    pub(crate) async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let endpoint = self.endpoint(path)?;
        self.send(self.client.put(endpoint).json(body)).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let endpoint = self.endpoint(path)?;
        self.send_ignoring_body(self.client.delete(endpoint)).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = self.perform(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send_ignoring_body(&self, request: RequestBuilder) -> Result<(), ApiError> {
        self.perform(request).await.map(|_| ())
    }

    async fn perform(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = match self.bearer() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        // Best-effort extraction of the server's message field.
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_the_server_text() {
        let error = ApiError::Status {
            status: 400,
            message: Some("Username is already taken".to_string()),
        };
        assert_eq!(error.user_message("Signup failed"), "Username is already taken");
    }

    #[test]
    fn user_message_falls_back_per_operation() {
        let bare = ApiError::Status {
            status: 502,
            message: None,
        };
        assert_eq!(bare.user_message("Signup failed"), "Signup failed");
        let transport = ApiError::Transport("connection refused".to_string());
        assert_eq!(transport.user_message("Login failed"), "Login failed");
    }

    #[test]
    fn base_url_gets_a_trailing_slash() {
        let api = Api::new(Url::parse("http://localhost:8080/api").unwrap(), None);
        let endpoint = api.endpoint("artists/top").unwrap();
        assert_eq!(endpoint.as_str(), "http://localhost:8080/api/artists/top");
    }

    #[test]
    fn token_slot_round_trip() {
        let api = Api::new(Url::parse("http://localhost:8080/api/").unwrap(), None);
        assert!(!api.has_token());
        api.set_token("tok-1".to_string());
        assert!(api.has_token());
        // Clones see the same slot, the session context is one object.
        let clone = api.clone();
        clone.clear_token();
        assert!(!api.has_token());
    }
}
