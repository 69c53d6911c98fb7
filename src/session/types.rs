//! Request and response types for the auth API. Request types hold passwords
//! as `SecretString` and are only exposed while the wire body is built, so
//! these values can be logged or debug-printed without leaking secrets.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Identity snapshot returned by the server. Replaced wholesale on every auth
/// event, never merged.
///
/// Login replies may omit the id, in which case it is empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub usn: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub semester: Option<String>,
    #[serde(default, deserialize_with = "admin_flag")]
    pub is_admin: bool,
}

/// Only a literal `true` grants admin; `null`, strings and numbers do not.
fn admin_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}

/// Email and password for a login attempt.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }

    pub(crate) fn body(&self) -> LoginBody<'_> {
        LoginBody {
            email: &self.email,
            password: self.password.expose_secret(),
        }
    }
}

/// A validated registration, ready to send.
#[derive(Clone, Debug)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub usn: String,
    pub course: String,
    pub semester: String,
}

impl Registration {
    pub(crate) fn body(&self) -> RegisterBody<'_> {
        RegisterBody {
            name: &self.name,
            email: &self.email,
            password: self.password.expose_secret(),
            usn: &self.usn,
            course: &self.course,
            semester: &self.semester,
        }
    }
}

#[derive(Serialize)]
pub(crate) struct LoginBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub(crate) struct RegisterBody<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub usn: &'a str,
    pub course: &'a str,
    pub semester: &'a str,
}

/// `{ "user": ... }` envelope returned by login and registration.
#[derive(Debug, Deserialize)]
pub(crate) struct UserEnvelope {
    pub user: User,
}

/// The profile endpoint answers with either the envelope or the bare user.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ProfileBody {
    Wrapped(UserEnvelope),
    Bare(User),
}

impl ProfileBody {
    pub(crate) fn into_user(self) -> User {
        match self {
            Self::Wrapped(envelope) => envelope.user,
            Self::Bare(user) => user,
        }
    }
}
