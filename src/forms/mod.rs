//! Consumers of the session store: the login, registration, logout and
//! account forms. Each one checks its input locally, so invalid input never
//! reaches the network, then calls the store or account client and answers
//! with a transient [`Notice`] for both outcomes.

pub mod account;
pub mod login;
pub mod logout;
pub mod notice;
pub mod register;
mod validate;

pub use account::{ResendVerificationForm, ResetPasswordForm, VerifyEmailForm};
pub use login::LoginForm;
pub use logout::LogoutForm;
pub use notice::{Notice, NoticeKind};
pub use register::{RegistrationForm, SEMESTERS};
pub use validate::{valid_email, valid_usn};
