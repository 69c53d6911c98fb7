//! Authentication session: API client, opaque credential handle, and the
//! process-wide store.
//!
//! Flow overview: login and registration POST to `/api/auth/*`; the server
//! answers with `{ user }` and sets an `HttpOnly` session cookie. Logout asks
//! the server to clear it. On start the store probes `/api/profile` once to
//! find out whether a cookie from an earlier exchange is still valid. This
//! module touches credentials and must never log passwords or cookie values.

pub mod client;
pub(crate) mod handle;
pub mod store;
pub mod types;

pub use client::SessionClient;
pub use handle::SessionHandle;
pub use store::{AuthReader, AuthState, AuthStore};
pub use types::{Credentials, Registration, User};
