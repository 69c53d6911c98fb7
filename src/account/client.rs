//! Client wrappers for account endpoints that sit outside the session
//! lifecycle.

use crate::account::types::{MessageResponse, PasswordReset, ResendVerificationBody};
use crate::api::{ApiClient, AuthError};
use tracing::instrument;

pub const VERIFY_EMAIL_PATH: &str = "/api/auth/verify-email";
pub const RESEND_VERIFICATION_PATH: &str = "/api/auth/resend-verification";
pub const RESET_PASSWORD_PATH: &str = "/api/auth/reset-password";

#[derive(Clone, Debug)]
pub struct AccountClient {
    api: ApiClient,
}

impl AccountClient {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Confirms the email address behind a verification link token.
    ///
    /// # Errors
    /// `Validation` for an invalid or expired token, `Network` on transport
    /// failure.
    #[instrument(skip_all)]
    pub async fn verify_email(&self, token: &str) -> Result<String, AuthError> {
        let token = token.trim();
        if matches!(token, "" | "." | "..") {
            return Err(AuthError::Validation(
                "Verification link is invalid.".to_string(),
            ));
        }

        let url = self.api.config().url_with_segment(VERIFY_EMAIL_PATH, token)?;
        self.api
            .get_json_at::<MessageResponse>(&url)
            .await
            .map(|response| {
                response
                    .message
                    .unwrap_or_else(|| "Email verified successfully!".to_string())
            })
            .map_err(token_error)
    }

    /// Requests a fresh verification email.
    ///
    /// # Errors
    /// Returns the server's message for unknown addresses, `Network` on
    /// transport failure.
    #[instrument(skip_all)]
    pub async fn resend_verification(&self, email: &str) -> Result<String, AuthError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AuthError::Validation("Email is required.".to_string()));
        }

        self.api
            .post_json::<_, MessageResponse>(
                RESEND_VERIFICATION_PATH,
                &ResendVerificationBody { email },
            )
            .await
            .map(|response| {
                response.message.unwrap_or_else(|| {
                    "Please check your inbox for the verification link.".to_string()
                })
            })
    }

    /// Sets a new password using a reset link token.
    ///
    /// # Errors
    /// `Validation` for an invalid or expired token, `Network` on transport
    /// failure.
    #[instrument(skip_all)]
    pub async fn reset_password(&self, reset: &PasswordReset) -> Result<String, AuthError> {
        self.api
            .post_json::<_, MessageResponse>(RESET_PASSWORD_PATH, &reset.body())
            .await
            .map(|response| {
                response.message.unwrap_or_else(|| {
                    "You can now login with your new password.".to_string()
                })
            })
            .map_err(token_error)
    }
}

fn token_error(err: AuthError) -> AuthError {
    err.classify(|status, message| match status {
        400 | 404 | 410 | 422 => Ok(AuthError::Validation(message)),
        _ => Err(message),
    })
}
