//! Request and response types for account endpoints. Verification and reset
//! tokens are single-use secrets and must not be logged.

use crate::api::AuthError;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Shortest password accepted by the reset flow.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Generic `{ "message": ... }` acknowledgement.
#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Serialize)]
pub(crate) struct ResendVerificationBody<'a> {
    pub email: &'a str,
}

#[derive(Serialize)]
pub(crate) struct ResetPasswordBody<'a> {
    pub token: &'a str,
    pub new_password: &'a str,
}

/// A password reset checked locally before it is sent.
#[derive(Clone, Debug)]
pub struct PasswordReset {
    token: SecretString,
    new_password: SecretString,
}

impl PasswordReset {
    /// Validates the new password against its confirmation.
    ///
    /// # Errors
    /// Returns `Validation` for a missing token, a password shorter than
    /// [`MIN_PASSWORD_LEN`], or a confirmation that does not match.
    pub fn new(
        token: &str,
        new_password: SecretString,
        confirm_password: &SecretString,
    ) -> Result<Self, AuthError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(AuthError::Validation(
                "Reset link is missing its token.".to_string(),
            ));
        }
        if new_password.expose_secret().chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::Validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters long."
            )));
        }
        if new_password.expose_secret() != confirm_password.expose_secret() {
            return Err(AuthError::Validation(
                "Please make sure your passwords match.".to_string(),
            ));
        }

        Ok(Self {
            token: SecretString::from(token.to_string()),
            new_password,
        })
    }

    pub(crate) fn body(&self) -> ResetPasswordBody<'_> {
        ResetPasswordBody {
            token: self.token.expose_secret(),
            new_password: self.new_password.expose_secret(),
        }
    }
}
