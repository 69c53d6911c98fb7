//! # EduResources session client
//!
//! `eduresources` is the client side of the EduResources learning platform's
//! authentication flow: registration, login, logout, and silent session
//! restore on start, plus the peripheral account calls (email verification,
//! verification resend, password reset).
//!
//! ## Session model
//!
//! The backend issues an `HttpOnly` session cookie on login/registration and
//! clears it on logout. The client never reads that credential. It lives in an
//! opaque [`session::SessionHandle`] that the HTTP transport attaches to every
//! request, and application code only ever branches on the derived
//! authenticated/anonymous state held by the [`session::AuthStore`].
//!
//! ## Store lifecycle
//!
//! The store starts in `Restoring`, probes `/api/profile` exactly once, and
//! settles on `Authenticated` or `Anonymous`. After that, only `login`,
//! `register`, `logout` and `update_user` move it. The admin flag is derived
//! from the stored user and cannot be set on its own.

pub mod account;
pub mod api;
pub mod cli;
pub mod forms;
pub mod session;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
