//! Backend endpoint configuration. The base URL is read once from
//! `EDURESOURCES_BACKEND_URL` and prefixed to every API path. Configuration
//! values are public; do not store secrets here.

use super::errors::AuthError;
use url::Url;

pub const ENV_BACKEND_URL: &str = "EDURESOURCES_BACKEND_URL";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";

/// Client configuration shared by every API call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Builds a config from an explicit base URL.
    ///
    /// # Errors
    /// Returns `AuthError::Config` if the value is not an absolute http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, AuthError> {
        let value = normalize_value(base_url).unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        let parsed = Url::parse(&value)
            .map_err(|err| AuthError::Config(format!("invalid backend URL {value:?}: {err}")))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AuthError::Config(format!(
                "backend URL must use http or https, got {:?}",
                parsed.scheme()
            )));
        }

        Ok(Self {
            base_url: value.trim_end_matches('/').to_string(),
        })
    }

    /// Loads config from the environment, falling back to the local default.
    ///
    /// # Errors
    /// Returns `AuthError::Config` if the environment value is malformed.
    pub fn load() -> Result<Self, AuthError> {
        let value = std::env::var(ENV_BACKEND_URL).unwrap_or_default();
        Self::new(&value)
    }

    /// Joins an API path onto the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        build_url_with_base(&self.base_url, path)
    }

    /// Joins `path` and then appends `segment` as one percent-encoded path
    /// segment, so `?`, `#` and `/` inside it stay part of the segment.
    ///
    /// # Errors
    /// Returns `AuthError::Config` if the joined URL cannot carry path segments.
    pub fn url_with_segment(&self, path: &str, segment: &str) -> Result<String, AuthError> {
        let mut url = Url::parse(&self.url(path))
            .map_err(|err| AuthError::Config(format!("invalid request URL: {err}")))?;
        url.path_segments_mut()
            .map_err(|()| AuthError::Config("backend URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .push(segment);
        Ok(url.into())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}
