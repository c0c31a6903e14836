// ── User store ──

use std::sync::Arc;

use tracing::info;

use rooster_api::User;

use super::cell::StateCell;
use crate::stream::StateStream;

/// Snapshot of the user store. `is_authenticated` is true exactly when
/// a user is present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserState {
    pub user: Option<User>,
    pub is_authenticated: bool,
}

impl UserState {
    fn with_user(user: Option<User>) -> Self {
        Self {
            is_authenticated: user.is_some(),
            user,
        }
    }
}

/// The signed-in user. Synchronous; nothing here talks to a backend.
#[derive(Clone)]
pub struct UserStore {
    state: Arc<StateCell<UserState>>,
}

impl UserStore {
    pub fn new(user: Option<User>) -> Self {
        Self {
            state: Arc::new(StateCell::new(UserState::with_user(user))),
        }
    }

    pub fn snapshot(&self) -> Arc<UserState> {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> StateStream<UserState> {
        StateStream::new(self.state.subscribe())
    }

    /// Sign in as `user`, replacing whoever was signed in.
    pub fn set_user(&self, user: User) {
        info!(user = %user.id, "signed in");
        self.state.update(|s| *s = UserState::with_user(Some(user)));
    }

    /// Clear the session. Signing out twice is harmless.
    pub fn logout(&self) {
        if let Some(user) = &self.snapshot().user {
            info!(user = %user.id, "signing out");
        }
        self.state.update(|s| *s = UserState::default());
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rooster_api::fixtures;

    #[test]
    fn starts_with_the_given_user() {
        let store = UserStore::new(Some(fixtures::current_user()));
        let state = store.snapshot();
        assert!(state.is_authenticated);
        assert_eq!(state.user.as_ref().map(|u| u.name.as_str()), Some("John Doe"));
    }

    #[test]
    fn authenticated_tracks_user_presence() {
        let store = UserStore::default();
        assert!(!store.snapshot().is_authenticated);

        store.set_user(fixtures::current_user());
        assert!(store.snapshot().is_authenticated);

        store.logout();
        let state = store.snapshot();
        assert!(state.user.is_none());
        assert!(!state.is_authenticated);
    }

    #[test]
    fn set_user_replaces_the_signed_in_user() {
        let store = UserStore::new(Some(fixtures::current_user()));
        let mut other = fixtures::current_user();
        other.id = "2".into();
        other.name = "Jane Roe".into();

        store.set_user(other.clone());

        let state = store.snapshot();
        assert!(state.is_authenticated);
        assert_eq!(state.user, Some(other));
    }

    #[test]
    fn logout_is_idempotent() {
        let store = UserStore::new(Some(fixtures::current_user()));
        store.logout();
        store.logout();
        assert_eq!(*store.snapshot(), UserState::default());
    }
}
