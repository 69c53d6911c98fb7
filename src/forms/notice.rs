//! Transient notifications shown after a form submission. Messages must be
//! safe to render and never include secrets or tokens.

use crate::api::AuthError;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Supported notice styles.
pub enum NoticeKind {
    Error,
    Success,
    Info,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, title, description)
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, title, description)
    }

    fn new(kind: NoticeKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

impl From<&AuthError> for Notice {
    fn from(err: &AuthError) -> Self {
        Self::error(err.title(), err.to_string())
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.kind {
            NoticeKind::Error => "error",
            NoticeKind::Success => "ok",
            NoticeKind::Info => "info",
        };
        write!(formatter, "[{marker}] {}: {}", self.title, self.description)
    }
}
