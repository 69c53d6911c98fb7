//! One-shot account commands. Each builds its own client; none of them touch
//! the session store.

use crate::account::AccountClient;
use crate::api::{ApiClient, ApiConfig};
use crate::forms::{Notice, ResendVerificationForm, ResetPasswordForm, VerifyEmailForm};
use crate::session::SessionHandle;
use anyhow::{bail, Result};
use secrecy::SecretString;

fn client(backend_url: &str) -> Result<AccountClient> {
    let config = ApiConfig::new(backend_url)?;
    Ok(AccountClient::new(ApiClient::new(
        config,
        &SessionHandle::new(),
    )?))
}

fn report(notice: &Notice) -> Result<()> {
    if notice.is_error() {
        bail!("{notice}");
    }
    println!("{notice}");
    Ok(())
}

/// Handle the verify-email action
///
/// # Errors
/// Returns an error if the backend URL is invalid or verification fails.
pub async fn verify_email(backend_url: &str, token: String) -> Result<()> {
    let client = client(backend_url)?;
    let notice = VerifyEmailForm { token }.submit(&client).await;
    report(&notice)
}

/// Handle the resend-verification action
///
/// # Errors
/// Returns an error if the backend URL is invalid or the request fails.
pub async fn resend_verification(backend_url: &str, email: String) -> Result<()> {
    let client = client(backend_url)?;
    let notice = ResendVerificationForm { email }.submit(&client).await;
    report(&notice)
}

/// Handle the reset-password action
///
/// # Errors
/// Returns an error if the backend URL is invalid, the passwords are rejected
/// locally, or the reset fails.
pub async fn reset_password(
    backend_url: &str,
    token: String,
    new_password: SecretString,
    confirm_password: SecretString,
) -> Result<()> {
    let client = client(backend_url)?;
    let notice = ResetPasswordForm {
        token,
        new_password,
        confirm_password,
    }
    .submit(&client)
    .await;
    report(&notice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::NoticeKind;

    #[test]
    fn report_turns_error_notices_into_errors() {
        let notice = Notice::error("Verification failed", "Invalid or expired token");
        let result = report(&notice);
        assert!(result.is_err());
        if let Err(err) = result {
            assert!(err.to_string().contains("Invalid or expired token"));
        }

        let notice = Notice {
            kind: NoticeKind::Success,
            title: "Email sent".to_string(),
            description: "Check your inbox.".to_string(),
        };
        assert!(report(&notice).is_ok());
    }

    #[test]
    fn client_rejects_invalid_backend_url() {
        assert!(client("not a url").is_err());
    }
}
