//! Client wrappers for the backend's session endpoints. Each call is a single
//! request/response exchange; the session cookie travels with the transport and
//! is never attached or inspected here.

use crate::api::{ApiClient, ApiConfig, AuthError};
use crate::session::{
    handle::SessionHandle,
    types::{Credentials, ProfileBody, Registration, User, UserEnvelope},
};
use tracing::instrument;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const LOGOUT_PATH: &str = "/api/auth/logout";
pub const PROFILE_PATH: &str = "/api/profile";

#[derive(Clone, Debug)]
pub struct SessionClient {
    api: ApiClient,
}

impl SessionClient {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Builds a client for `config` whose requests carry `session`.
    ///
    /// # Errors
    /// Returns `AuthError::Config` if the HTTP client cannot be built.
    pub fn connect(config: ApiConfig, session: &SessionHandle) -> Result<Self, AuthError> {
        ApiClient::new(config, session).map(Self::new)
    }

    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Signs in; on success the server also sets the session cookie.
    ///
    /// # Errors
    /// `Auth` for rejected credentials (including unverified accounts),
    /// `Network` on transport failure, `Http`/`Parse` otherwise.
    #[instrument(skip_all)]
    pub async fn login(&self, credentials: &Credentials) -> Result<User, AuthError> {
        self.api
            .post_json::<_, UserEnvelope>(LOGIN_PATH, &credentials.body())
            .await
            .map(|envelope| envelope.user)
            .map_err(|err| {
                err.classify(|status, message| match status {
                    400 | 401 | 403 => Ok(AuthError::Auth(message)),
                    _ => Err(message),
                })
            })
    }

    /// Creates an account. The server sends the verification email as a side
    /// effect; the returned user is not yet verified.
    ///
    /// # Errors
    /// `Conflict` for a duplicate account, `Validation` when the server rejects
    /// a field, `Network` on transport failure.
    #[instrument(skip_all)]
    pub async fn register(&self, registration: &Registration) -> Result<User, AuthError> {
        self.api
            .post_json::<_, UserEnvelope>(REGISTER_PATH, &registration.body())
            .await
            .map(|envelope| envelope.user)
            .map_err(|err| {
                err.classify(|status, message| match status {
                    400 | 409 => Ok(AuthError::Conflict(message)),
                    422 => Ok(AuthError::Validation(message)),
                    _ => Err(message),
                })
            })
    }

    /// Asks the server to invalidate the session cookie.
    ///
    /// # Errors
    /// Any failure is returned as-is; callers treat it as non-fatal.
    #[instrument(skip_all)]
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.api.post_empty(LOGOUT_PATH).await
    }

    /// Fetches the user behind the current session cookie.
    ///
    /// # Errors
    /// `Unauthenticated` when the cookie is missing or expired.
    #[instrument(skip_all)]
    pub async fn profile(&self) -> Result<User, AuthError> {
        self.api
            .get_json::<ProfileBody>(PROFILE_PATH)
            .await
            .map(ProfileBody::into_user)
            .map_err(|err| {
                err.classify(|status, message| match status {
                    401 | 403 => Ok(AuthError::Unauthenticated(message)),
                    _ => Err(message),
                })
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn client_for(server: &MockServer) -> SessionClient {
        let config = ApiConfig::new(&server.uri()).unwrap();
        SessionClient::connect(config, &SessionHandle::new()).unwrap()
    }

    fn asha() -> serde_json::Value {
        json!({
            "id": "u-1",
            "name": "Asha",
            "email": "asha@eduresources.test",
            "usn": "1AB21CS001",
            "course": "CSE",
            "semester": "5th",
            "is_admin": false
        })
    }

    #[tokio::test]
    async fn login_posts_credentials_and_returns_user() {
        if !can_bind_localhost() {
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(LOGIN_PATH))
            .and(body_json(json!({
                "email": "asha@eduresources.test",
                "password": "abc123"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": asha() })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let user = client
            .login(&Credentials::new("asha@eduresources.test", "abc123"))
            .await
            .unwrap();

        assert_eq!(user.id, "u-1");
        assert_eq!(user.usn.as_deref(), Some("1AB21CS001"));
    }

    #[tokio::test]
    async fn login_rejection_maps_to_auth_error_with_detail() {
        if !can_bind_localhost() {
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(LOGIN_PATH))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({ "detail": "Invalid credentials" })),
            )
            .mount(&server)
            .await;

        let result = client_for(&server)
            .login(&Credentials::new("asha@eduresources.test", "wrong"))
            .await;

        assert_eq!(
            result.unwrap_err(),
            AuthError::Auth("Invalid credentials".to_string())
        );
    }

    #[tokio::test]
    async fn login_unverified_account_is_auth_error() {
        if !can_bind_localhost() {
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(LOGIN_PATH))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "detail": "Please verify your email before logging in"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .login(&Credentials::new("asha@eduresources.test", "abc123"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Auth(ref message) if message.contains("verify")));
    }

    #[tokio::test]
    async fn register_duplicate_maps_to_conflict() {
        if !can_bind_localhost() {
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(REGISTER_PATH))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(json!({ "detail": "Email already registered" })),
            )
            .mount(&server)
            .await;

        let registration = Registration {
            name: "Asha".to_string(),
            email: "asha@eduresources.test".to_string(),
            password: "abc123".to_string().into(),
            usn: "1AB21CS001".to_string(),
            course: "CSE".to_string(),
            semester: "5th".to_string(),
        };
        let err = client_for(&server).register(&registration).await.unwrap_err();

        assert_eq!(
            err,
            AuthError::Conflict("Email already registered".to_string())
        );
    }

    #[tokio::test]
    async fn register_field_errors_map_to_validation() {
        if !can_bind_localhost() {
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(REGISTER_PATH))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "detail": [
                    { "loc": ["body", "email"], "msg": "value is not a valid email address", "type": "value_error" },
                    { "loc": ["body", "usn"], "msg": "field required", "type": "missing" }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let registration = Registration {
            name: "Asha".to_string(),
            email: "asha@".to_string(),
            password: "abc123".to_string().into(),
            usn: String::new(),
            course: "CSE".to_string(),
            semester: "5th".to_string(),
        };
        let err = client_for(&server).register(&registration).await.unwrap_err();

        assert_eq!(
            err,
            AuthError::Validation(
                "value is not a valid email address; field required".to_string()
            )
        );
    }

    #[tokio::test]
    async fn register_sends_every_profile_field() {
        if !can_bind_localhost() {
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(REGISTER_PATH))
            .and(body_json(json!({
                "name": "Asha",
                "email": "asha@eduresources.test",
                "password": "abc123",
                "usn": "1AB21CS001",
                "course": "CSE",
                "semester": "5th"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": asha() })))
            .expect(1)
            .mount(&server)
            .await;

        let registration = Registration {
            name: "Asha".to_string(),
            email: "asha@eduresources.test".to_string(),
            password: "abc123".to_string().into(),
            usn: "1AB21CS001".to_string(),
            course: "CSE".to_string(),
            semester: "5th".to_string(),
        };
        let user = client_for(&server).register(&registration).await.unwrap();
        assert_eq!(user.email, "asha@eduresources.test");
    }

    #[tokio::test]
    async fn profile_unauthorized_maps_to_unauthenticated() {
        if !can_bind_localhost() {
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(PROFILE_PATH))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({ "detail": "Not authenticated" })),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).profile().await.unwrap_err();
        assert_eq!(
            err,
            AuthError::Unauthenticated("Not authenticated".to_string())
        );
    }

    #[tokio::test]
    async fn profile_server_failure_stays_http() {
        if !can_bind_localhost() {
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(PROFILE_PATH))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&server)
            .await;

        let err = client_for(&server).profile().await.unwrap_err();
        assert_eq!(
            err,
            AuthError::Http {
                status: 500,
                message: "Internal Server Error".to_string()
            }
        );
    }

    #[tokio::test]
    async fn logout_surfaces_server_failure() {
        if !can_bind_localhost() {
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(LOGOUT_PATH))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server).logout().await.unwrap_err();
        assert!(matches!(err, AuthError::Http { status: 500, .. }));
    }

    #[tokio::test]
    async fn unreachable_backend_is_network_error() {
        // Nothing listens on port 9 (discard) on loopback in test environments.
        let config = ApiConfig::new("http://127.0.0.1:9").unwrap();
        let client = SessionClient::connect(config, &SessionHandle::new()).unwrap();

        let err = client.profile().await.unwrap_err();
        assert!(matches!(err, AuthError::Network(_)));
    }
}
