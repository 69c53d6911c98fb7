//! Forms for the account flows that sit next to the session: following a
//! verification link, asking for a new one, and resetting a password.

use crate::account::{AccountClient, PasswordReset};
use crate::forms::{notice::Notice, validate::valid_email};
use secrecy::SecretString;

#[derive(Clone, Debug)]
pub struct VerifyEmailForm {
    pub token: String,
}

impl VerifyEmailForm {
    pub async fn submit(&self, client: &AccountClient) -> Notice {
        match client.verify_email(&self.token).await {
            Ok(message) => Notice::success("Verification successful", message),
            Err(err) => Notice::error("Verification failed", err.to_string()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ResendVerificationForm {
    pub email: String,
}

impl ResendVerificationForm {
    pub async fn submit(&self, client: &AccountClient) -> Notice {
        let email = self.email.trim();
        if !valid_email(email) {
            return Notice::error("Invalid input", "Please enter a valid email address.");
        }

        match client.resend_verification(email).await {
            Ok(message) => Notice::success("Email sent", message),
            Err(err) => Notice::from(&err),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ResetPasswordForm {
    pub token: String,
    pub new_password: SecretString,
    pub confirm_password: SecretString,
}

impl ResetPasswordForm {
    pub async fn submit(&self, client: &AccountClient) -> Notice {
        let reset = match PasswordReset::new(
            &self.token,
            self.new_password.clone(),
            &self.confirm_password,
        ) {
            Ok(reset) => reset,
            Err(err) => return Notice::from(&err),
        };

        match client.reset_password(&reset).await {
            Ok(message) => Notice::success("Password reset successful", message),
            Err(err) => Notice::error("Password reset failed", err.to_string()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api::{ApiClient, ApiConfig};
    use crate::forms::NoticeKind;
    use crate::session::SessionHandle;
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{any, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn client_for(server: &MockServer) -> AccountClient {
        let config = ApiConfig::new(&server.uri()).unwrap();
        AccountClient::new(ApiClient::new(config, &SessionHandle::new()).unwrap())
    }

    fn secret(value: &str) -> SecretString {
        SecretString::from(value.to_string())
    }

    #[tokio::test]
    async fn local_rejections_send_nothing() {
        if !can_bind_localhost() {
            return;
        }
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        let client = client_for(&server);

        let notice = ResetPasswordForm {
            token: "tok".to_string(),
            new_password: secret("abc123"),
            confirm_password: secret("abc124"),
        }
        .submit(&client)
        .await;
        assert_eq!(notice.kind, NoticeKind::Error);

        let notice = ResendVerificationForm {
            email: "not-an-email".to_string(),
        }
        .submit(&client)
        .await;
        assert_eq!(notice.kind, NoticeKind::Error);
    }

    #[tokio::test]
    async fn verify_failure_keeps_server_detail() {
        if !can_bind_localhost() {
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/verify-email/expired"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(json!({ "detail": "Invalid or expired token" })),
            )
            .mount(&server)
            .await;

        let notice = VerifyEmailForm {
            token: "expired".to_string(),
        }
        .submit(&client_for(&server))
        .await;

        assert_eq!(
            notice,
            Notice::error("Verification failed", "Invalid or expired token")
        );
    }

    #[tokio::test]
    async fn reset_success_is_reported() {
        if !can_bind_localhost() {
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/reset-password"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let notice = ResetPasswordForm {
            token: "tok".to_string(),
            new_password: secret("abc123"),
            confirm_password: secret("abc123"),
        }
        .submit(&client_for(&server))
        .await;

        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(
            notice.description,
            "You can now login with your new password."
        );
    }
}
