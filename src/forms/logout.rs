use crate::forms::notice::Notice;
use crate::session::AuthStore;

/// Sign-out action. Always succeeds locally.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogoutForm;

impl LogoutForm {
    pub async fn submit(self, store: &mut AuthStore) -> Notice {
        store.logout().await;
        Notice::success("Signed out", "You have been signed out.")
    }
}
