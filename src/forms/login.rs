use crate::api::AuthError;
use crate::forms::notice::Notice;
use crate::session::{AuthStore, Credentials};
use secrecy::{ExposeSecret, SecretString};

#[derive(Clone, Debug)]
pub struct LoginForm {
    pub email: String,
    pub password: SecretString,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// # Errors
    /// Returns `Validation` when the email or password is blank.
    pub fn validate(&self) -> Result<Credentials, AuthError> {
        let email = self.email.trim();
        if email.is_empty() || self.password.expose_secret().trim().is_empty() {
            return Err(AuthError::Validation(
                "Email and password are required.".to_string(),
            ));
        }

        Ok(Credentials {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }

    pub async fn submit(&self, store: &mut AuthStore) -> Notice {
        let credentials = match self.validate() {
            Ok(credentials) => credentials,
            Err(err) => return Notice::from(&err),
        };

        match store.login(&credentials).await {
            Ok(user) => Notice::success("Signed in", format!("Welcome back, {}!", user.name)),
            Err(err) => Notice::from(&err),
        }
    }
}
