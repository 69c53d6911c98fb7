use crate::api::AuthError;
use crate::forms::{
    notice::Notice,
    validate::{valid_email, valid_usn},
};
use crate::session::{AuthStore, Registration};
use secrecy::{ExposeSecret, SecretString};

/// Semesters offered by the registration form.
pub const SEMESTERS: [&str; 8] = ["1st", "2nd", "3rd", "4th", "5th", "6th", "7th", "8th"];

/// Raw registration input as typed by the user.
#[derive(Clone, Debug)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
    pub usn: String,
    pub course: String,
    pub semester: String,
}

impl RegistrationForm {
    /// Checks the form without touching the network.
    ///
    /// # Errors
    /// Returns `Validation` for missing fields, a password mismatch, a
    /// malformed email or USN, or an unknown semester.
    pub fn validate(&self) -> Result<Registration, AuthError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let usn = self.usn.trim();
        let course = self.course.trim();
        let semester = self.semester.trim();

        if [name, email, usn, course, semester].iter().any(|v| v.is_empty())
            || self.password.expose_secret().is_empty()
        {
            return Err(AuthError::Validation(
                "Please fill in every field.".to_string(),
            ));
        }

        if self.password.expose_secret() != self.confirm_password.expose_secret() {
            return Err(AuthError::Validation(
                "Passwords do not match. Please try again.".to_string(),
            ));
        }

        if !valid_email(email) {
            return Err(AuthError::Validation(
                "Please enter a valid email address.".to_string(),
            ));
        }

        if !valid_usn(usn) {
            return Err(AuthError::Validation(
                "USN must be alphanumeric (letters and numbers only).".to_string(),
            ));
        }

        if !SEMESTERS.contains(&semester) {
            return Err(AuthError::Validation(format!(
                "Semester must be one of: {}.",
                SEMESTERS.join(", ")
            )));
        }

        Ok(Registration {
            name: name.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
            usn: usn.to_string(),
            course: course.to_string(),
            semester: semester.to_string(),
        })
    }

    /// Registers the account. Success is reported as "verify your email",
    /// never as a completed sign in.
    pub async fn submit(&self, store: &mut AuthStore) -> Notice {
        let registration = match self.validate() {
            Ok(registration) => registration,
            Err(err) => return Notice::from(&err),
        };

        match store.register(&registration).await {
            Ok(_) => Notice::info(
                "Registration successful",
                format!(
                    "We've sent a verification email to {}. Click the link in it to activate your account, then sign in.",
                    registration.email
                ),
            ),
            Err(err) => Notice::from(&err),
        }
    }
}
