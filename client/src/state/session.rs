//! The persisted session: token plus cached profile.
//!
//! DESIGN
//! ======
//! Storage is authoritative. `load` derives the session from the `token` key
//! alone; a missing or corrupt `user` blob degrades to an empty profile
//! instead of signing the user out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::{TOKEN_KEY, USER_KEY};
use crate::net::types::{AuthResponse, User};
use crate::util::session_store::SessionStore;

/// A signed-in identity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl From<AuthResponse> for Session {
    fn from(resp: AuthResponse) -> Self {
        let user = resp.user();
        Self { token: resp.token, user }
    }
}

impl Session {
    /// Read the session from `store`. `None` when no non-empty token exists.
    pub fn load(store: &impl SessionStore) -> Option<Self> {
        let token = store.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
        let user = store
            .get(USER_KEY)
            .and_then(|raw| match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    log::warn!("stored user profile unreadable: {e}");
                    None
                }
            })
            .unwrap_or_default();
        Some(Self { token, user })
    }

    /// Write token and profile to `store`.
    pub fn save(&self, store: &impl SessionStore) {
        store.set(TOKEN_KEY, &self.token);
        save_user(store, &self.user);
    }

    /// Remove both session entries from `store`.
    pub fn clear(store: &impl SessionStore) {
        store.remove(TOKEN_KEY);
        store.remove(USER_KEY);
    }
}

/// Replace only the cached profile.
pub fn save_user(store: &impl SessionStore, user: &User) {
    match serde_json::to_string(user) {
        Ok(raw) => store.set(USER_KEY, &raw),
        Err(e) => log::error!("failed to serialize user profile: {e}"),
    }
}
