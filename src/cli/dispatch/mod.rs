//! Maps validated CLI matches to the action the binary executes.

use crate::cli::actions::Action;
use crate::cli::commands::{
    ARG_BACKEND_URL, CMD_RESEND_VERIFICATION, CMD_RESET_PASSWORD, CMD_SHELL, CMD_VERIFY_EMAIL,
};
use anyhow::{anyhow, Context, Result};
use secrecy::SecretString;

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let backend_url = matches
        .get_one::<String>(ARG_BACKEND_URL)
        .cloned()
        .context("missing required argument: --backend-url")?;

    // Closure to return a required string argument from subcommand matches
    let required = |sub_m: &clap::ArgMatches, name: &str| -> Result<String> {
        sub_m
            .get_one::<String>(name)
            .cloned()
            .ok_or_else(|| anyhow!("missing required argument: {name}"))
    };

    match matches.subcommand() {
        None | Some((CMD_SHELL, _)) => Ok(Action::Shell { backend_url }),
        Some((CMD_VERIFY_EMAIL, sub_m)) => Ok(Action::VerifyEmail {
            backend_url,
            token: required(sub_m, "token")?,
        }),
        Some((CMD_RESEND_VERIFICATION, sub_m)) => Ok(Action::ResendVerification {
            backend_url,
            email: required(sub_m, "email")?,
        }),
        Some((CMD_RESET_PASSWORD, sub_m)) => Ok(Action::ResetPassword {
            backend_url,
            token: required(sub_m, "token")?,
            password: SecretString::from(required(sub_m, "password")?),
            confirm_password: SecretString::from(required(sub_m, "confirm-password")?),
        }),
        Some((other, _)) => Err(anyhow!("unknown command: {other}")),
    }
}
