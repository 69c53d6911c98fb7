//! Opaque session credential capability.
//!
//! The backend sets an `HttpOnly` cookie on login/registration and clears it on
//! logout. `SessionHandle` owns the jar that stores it and hands it to the HTTP
//! transport, which attaches it to every request. There is no way
//! to read the cookie back: callers decide on the store's derived state only.

use reqwest::cookie::Jar;
use std::{fmt, sync::Arc};

#[derive(Clone, Default)]
pub struct SessionHandle {
    jar: Arc<Jar>,
}

impl SessionHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn provider(&self) -> Arc<Jar> {
        Arc::clone(&self.jar)
    }
}

impl fmt::Debug for SessionHandle {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("SessionHandle(..)")
    }
}
