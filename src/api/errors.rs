//! Error taxonomy shared by every client call. Messages are safe to show to
//! the user; they never carry passwords or session material.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Input rejected locally, before any request is sent, or by the server's
    /// field validation.
    #[error("{0}")]
    Validation(String),
    /// Bad credentials or an account that may not sign in yet.
    #[error("{0}")]
    Auth(String),
    /// The account already exists.
    #[error("{0}")]
    Conflict(String),
    /// No session, or the session expired.
    #[error("{0}")]
    Unauthenticated(String),
    #[error("Unable to reach the server: {0}")]
    Network(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Config error: {0}")]
    Config(String),
}

impl AuthError {
    /// Short label used as the title of failure notices.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Validation(_) => "Invalid input",
            Self::Auth(_) => "Sign in failed",
            Self::Conflict(_) => "Account exists",
            Self::Unauthenticated(_) => "Not signed in",
            Self::Network(_) => "Network error",
            Self::Http { .. } | Self::Parse(_) => "Request failed",
            Self::Config(_) => "Configuration error",
        }
    }

    /// Re-labels an unclassified HTTP failure using a per-endpoint status table.
    #[must_use]
    pub(crate) fn classify(self, map: impl FnOnce(u16, String) -> Result<Self, String>) -> Self {
        match self {
            Self::Http { status, message } => match map(status, message) {
                Ok(err) => err,
                Err(message) => Self::Http { status, message },
            },
            other => other,
        }
    }
}
