//! HTTP helpers for the backend's JSON API. Feature clients use these helpers
//! so request setup and error decoding stay in one place. Every request goes
//! through the same `reqwest::Client`, which carries the session cookie jar;
//! the helpers never see the credential itself.

pub mod config;
pub mod errors;

pub use config::ApiConfig;
pub use errors::AuthError;

use crate::session::SessionHandle;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;
/// Message used when the server gives no usable explanation.
const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

/// Shared transport bound to one backend and one session credential.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Builds a client whose requests carry the credential held by `session`.
    ///
    /// # Errors
    /// Returns `AuthError::Config` if the underlying HTTP client cannot be built.
    pub fn new(config: ApiConfig, session: &SessionHandle) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .user_agent(crate::APP_USER_AGENT)
            .cookie_provider(session.provider())
            .build()
            .map_err(|err| AuthError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self { http, config })
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches JSON with the ambient session credential.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AuthError> {
        self.get_json_at(&self.config.url(path)).await
    }

    /// Fetches JSON from a URL already built against this client's config.
    pub(crate) async fn get_json_at<T: DeserializeOwned>(&self, url: &str) -> Result<T, AuthError> {
        debug!(%url, "GET");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(map_request_error)?;

        handle_json_response(response).await
    }

    /// Posts a JSON body and parses a JSON response.
    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AuthError> {
        let url = self.config.url(path);
        debug!(%url, "POST");
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(map_request_error)?;

        handle_json_response(response).await
    }

    /// Posts an empty body and ignores any response payload.
    pub(crate) async fn post_empty(&self, path: &str) -> Result<(), AuthError> {
        let url = self.config.url(path);
        debug!(%url, "POST");
        let response = self
            .http
            .post(&url)
            .send()
            .await
            .map_err(map_request_error)?;

        handle_empty_response(response).await
    }
}

/// Error payload shape produced by the backend framework.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Detail,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Detail {
    Message(String),
    Items(Vec<DetailItem>),
}

#[derive(Deserialize)]
struct DetailItem {
    msg: String,
}

/// Maps transport failures into `AuthError::Network`.
fn map_request_error(err: reqwest::Error) -> AuthError {
    if err.is_timeout() {
        AuthError::Network("Request timed out. Please try again.".to_string())
    } else if err.is_builder() {
        AuthError::Config(format!("Failed to build request: {err}"))
    } else {
        AuthError::Network(err.to_string())
    }
}

/// Parses JSON responses and surfaces HTTP errors with the server's message.
async fn handle_json_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, AuthError> {
    let status = response.status();
    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|err| AuthError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(AuthError::Http {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }
}

async fn handle_empty_response(response: reqwest::Response) -> Result<(), AuthError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(AuthError::Http {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }
}

/// Extracts the human-readable `detail` from an error body, falling back to
/// the sanitized raw body.
fn error_message(body: &str) -> String {
    if let Ok(ErrorBody { detail }) = serde_json::from_str::<ErrorBody>(body) {
        let message = match detail {
            Detail::Message(message) => message,
            Detail::Items(items) => items
                .into_iter()
                .map(|item| item.msg)
                .collect::<Vec<_>>()
                .join("; "),
        };
        return sanitize_body(&message);
    }

    sanitize_body(body)
}

/// Trims and truncates a message for display.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        GENERIC_ERROR.to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
