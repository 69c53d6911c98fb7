pub mod logging;

use crate::api::config::{DEFAULT_BACKEND_URL, ENV_BACKEND_URL};
use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const ARG_BACKEND_URL: &str = "backend-url";

pub const CMD_SHELL: &str = "shell";
pub const CMD_VERIFY_EMAIL: &str = "verify-email";
pub const CMD_RESEND_VERIFICATION: &str = "resend-verification";
pub const CMD_RESET_PASSWORD: &str = "reset-password";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let command = Command::new("eduresources")
        .about("EduResources session client")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new(ARG_BACKEND_URL)
                .short('b')
                .long("backend-url")
                .help("Backend base URL prefixed to every API path")
                .env(ENV_BACKEND_URL)
                .default_value(DEFAULT_BACKEND_URL)
                .global(true),
        )
        .subcommand(
            Command::new(CMD_SHELL)
                .about("Interactive session: login, register, whoami, logout (default)"),
        )
        .subcommand(
            Command::new(CMD_VERIFY_EMAIL)
                .about("Verify an email address with the token from the verification link")
                .arg(Arg::new("token").help("Verification token").required(true)),
        )
        .subcommand(
            Command::new(CMD_RESEND_VERIFICATION)
                .about("Send a new verification email")
                .arg(
                    Arg::new("email")
                        .short('e')
                        .long("email")
                        .help("Account email address")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new(CMD_RESET_PASSWORD)
                .about("Set a new password with the token from a reset link")
                .arg(
                    Arg::new("token")
                        .short('t')
                        .long("token")
                        .help("Password reset token")
                        .required(true),
                )
                .arg(
                    Arg::new("password")
                        .long("password")
                        .help("New password")
                        .env("EDURESOURCES_NEW_PASSWORD")
                        .hide_env_values(true)
                        .required(true),
                )
                .arg(
                    Arg::new("confirm-password")
                        .long("confirm-password")
                        .help("New password, again")
                        .env("EDURESOURCES_CONFIRM_PASSWORD")
                        .hide_env_values(true)
                        .required(true),
                ),
        );

    logging::with_args(command)
}
