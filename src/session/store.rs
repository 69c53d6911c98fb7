//! Auth session state for the whole process.
//!
//! One `AuthStore` is built at start-up and owned by the code that drives user
//! actions; everything else reads through cloned [`AuthReader`]s. The state
//! lives in a `tokio::sync::watch` channel, so readers see every transition as
//! soon as the owning call settles. Mutators take `&mut self`, which keeps two
//! of them from ever running against the same store at once.
//!
//! A mutation is written only after its network call resolves. Dropping an
//! in-flight future (for example when the caller goes away) therefore discards
//! its late result instead of applying it.

use crate::api::AuthError;
use crate::session::{
    client::SessionClient,
    types::{Credentials, Registration, User},
};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Client-visible session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthState {
    /// The start-up probe has not settled yet.
    Restoring,
    Anonymous,
    Authenticated(Arc<User>),
}

impl AuthState {
    #[must_use]
    pub fn current_user(&self) -> Option<&Arc<User>> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Restoring | Self::Anonymous => None,
        }
    }

    /// True only when the stored user carries the admin flag.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.current_user().is_some_and(|user| user.is_admin)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Restoring)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// The single owner of the session state.
#[derive(Debug)]
pub struct AuthStore {
    client: SessionClient,
    state: watch::Sender<AuthState>,
    restored: bool,
}

impl AuthStore {
    /// Creates a store in the `Restoring` state. Nothing is sent until
    /// [`AuthStore::ready`] or a mutator runs.
    #[must_use]
    pub fn new(client: SessionClient) -> Self {
        let (state, _) = watch::channel(AuthState::Restoring);
        Self {
            client,
            state,
            restored: false,
        }
    }

    /// Creates a store and waits for the restore probe to settle.
    pub async fn init(client: SessionClient) -> Self {
        let mut store = Self::new(client);
        store.ready().await;
        store
    }

    /// Returns a read-only view that follows every transition.
    #[must_use]
    pub fn reader(&self) -> AuthReader {
        AuthReader {
            rx: self.state.subscribe(),
        }
    }

    #[must_use]
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn client(&self) -> &SessionClient {
        &self.client
    }

    /// Runs the restore probe if it has not completed yet and returns the
    /// settled state. After the first completed probe this never touches the
    /// network again.
    pub async fn ready(&mut self) -> AuthState {
        if !self.restored {
            self.restore().await;
        }
        self.state()
    }

    async fn restore(&mut self) {
        let next = match self.client.profile().await {
            Ok(user) => {
                debug!("existing session restored");
                AuthState::Authenticated(Arc::new(user))
            }
            Err(err) => {
                debug!(error = %err, "no session to restore");
                AuthState::Anonymous
            }
        };
        self.restored = true;
        self.state.send_replace(next);
    }

    /// Signs in and replaces the stored user.
    ///
    /// # Errors
    /// Propagates the client error; the previous state is left untouched.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<Arc<User>, AuthError> {
        self.ready().await;
        let user = Arc::new(self.client.login(credentials).await?);
        info!(admin = user.is_admin, "signed in");
        self.state
            .send_replace(AuthState::Authenticated(Arc::clone(&user)));
        Ok(user)
    }

    /// Registers and replaces the stored user. The account is still
    /// unverified server-side; callers should not present this as a login.
    ///
    /// # Errors
    /// Propagates the client error; the previous state is left untouched.
    pub async fn register(&mut self, registration: &Registration) -> Result<Arc<User>, AuthError> {
        self.ready().await;
        let user = Arc::new(self.client.register(registration).await?);
        info!("account registered");
        self.state
            .send_replace(AuthState::Authenticated(Arc::clone(&user)));
        Ok(user)
    }

    /// Signs out. The local session is cleared even when the server call fails.
    pub async fn logout(&mut self) {
        if let Err(err) = self.client.logout().await {
            warn!(error = %err, "logout request failed, clearing local session anyway");
        }
        self.restored = true;
        self.state.send_replace(AuthState::Anonymous);
        info!("signed out");
    }

    /// Replaces the stored user with `user` as given. Fields absent from `user`
    /// are not carried over from the previous record.
    ///
    /// # Errors
    /// Returns `Unauthenticated` when there is no signed-in user to replace.
    pub fn update_user(&mut self, user: User) -> Result<Arc<User>, AuthError> {
        let authenticated = self.state.borrow().is_authenticated();
        if !authenticated {
            return Err(AuthError::Unauthenticated(
                "No signed-in user to update.".to_string(),
            ));
        }

        let user = Arc::new(user);
        self.state
            .send_replace(AuthState::Authenticated(Arc::clone(&user)));
        Ok(user)
    }
}

/// Read-only handle onto the store's state.
#[derive(Clone, Debug)]
pub struct AuthReader {
    rx: watch::Receiver<AuthState>,
}

impl AuthReader {
    #[must_use]
    pub fn state(&self) -> AuthState {
        self.rx.borrow().clone()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<Arc<User>> {
        self.rx.borrow().current_user().cloned()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.rx.borrow().is_admin()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.rx.borrow().is_loading()
    }

    /// Waits for the next transition. Returns `None` once the store is gone.
    pub async fn changed(&mut self) -> Option<AuthState> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }

    /// Waits until the restore probe has settled.
    pub async fn settled(&mut self) -> Option<AuthState> {
        self.rx
            .wait_for(|state| !state.is_loading())
            .await
            .ok()
            .map(|state| state.clone())
    }
}
