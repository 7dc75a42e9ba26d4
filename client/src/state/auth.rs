//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route gate to decide which page mounts. The app root owns the
//! single `RwSignal<AuthState>`; pages only ever receive callbacks.
//!
//! DESIGN
//! ======
//! `authenticated` is a read-through cache of "does storage hold a token".
//! Fields are private so the only ways to change it are `restore`,
//! `sign_in` and `sign_out`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;
use crate::state::session::Session;
use crate::util::session_store::SessionStore;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    loading: bool,
    authenticated: bool,
    user: Option<User>,
}

impl Default for AuthState {
    /// Pre-restore state: loading, nobody signed in.
    fn default() -> Self {
        Self { loading: true, authenticated: false, user: None }
    }
}

impl AuthState {
    /// Derive state from whatever `store` holds right now.
    pub fn restore(store: &impl SessionStore) -> Self {
        match Session::load(store) {
            Some(session) => Self { loading: false, authenticated: true, user: Some(session.user) },
            None => Self { loading: false, authenticated: false, user: None },
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Mark a freshly persisted session as active.
    pub fn sign_in(&mut self, session: &Session) {
        self.loading = false;
        self.authenticated = true;
        self.user = Some(session.user.clone());
    }

    /// Mark the session as ended. Storage must already be cleared.
    pub fn sign_out(&mut self) {
        self.loading = false;
        self.authenticated = false;
        self.user = None;
    }

    /// Replace the cached profile. Ignored while signed out.
    pub fn set_profile(&mut self, user: User) {
        if self.authenticated {
            self.user = Some(user);
        }
    }
}
