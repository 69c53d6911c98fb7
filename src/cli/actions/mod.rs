pub mod account;
pub mod shell;

use anyhow::Result;
use secrecy::SecretString;

#[derive(Debug)]
pub enum Action {
    Shell {
        backend_url: String,
    },
    VerifyEmail {
        backend_url: String,
        token: String,
    },
    ResendVerification {
        backend_url: String,
        email: String,
    },
    ResetPassword {
        backend_url: String,
        token: String,
        password: SecretString,
        confirm_password: SecretString,
    },
}

impl Action {
    /// Run the selected action to completion.
    ///
    /// # Errors
    /// Returns an error if the backend URL is invalid, stdin/stdout fail, or a
    /// one-shot account command is rejected.
    pub async fn execute(self) -> Result<()> {
        match self {
            Self::Shell { backend_url } => shell::handle(&backend_url).await,
            Self::VerifyEmail { backend_url, token } => {
                account::verify_email(&backend_url, token).await
            }
            Self::ResendVerification { backend_url, email } => {
                account::resend_verification(&backend_url, email).await
            }
            Self::ResetPassword {
                backend_url,
                token,
                password,
                confirm_password,
            } => account::reset_password(&backend_url, token, password, confirm_password).await,
        }
    }
}
