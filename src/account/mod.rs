//! Peripheral account flows: email verification, verification resend, and
//! password reset. These calls never change the session store; a verified
//! account still has to sign in through [`crate::session::AuthStore::login`].

pub mod client;
pub mod types;

pub use client::AccountClient;
pub use types::{PasswordReset, MIN_PASSWORD_LEN};
