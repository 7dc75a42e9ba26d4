use super::*;
use crate::config::{TOKEN_KEY, USER_KEY};
use crate::util::session_store::MemoryStore;

// =============================================================
// Helpers
// =============================================================

fn make_user() -> User {
    User {
        id: 1,
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        first_name: "Alice".to_owned(),
        last_name: String::new(),
    }
}

fn make_session() -> Session {
    Session { token: "tok".to_owned(), user: make_user() }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.is_loading());
}

#[test]
fn auth_state_default_not_authenticated() {
    let state = AuthState::default();
    assert!(!state.is_authenticated());
    assert!(state.user().is_none());
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_with_token_is_authenticated() {
    let store = MemoryStore::new();
    make_session().save(&store);
    let state = AuthState::restore(&store);
    assert!(!state.is_loading());
    assert!(state.is_authenticated());
    assert_eq!(state.user(), Some(&make_user()));
}

#[test]
fn restore_without_token_is_signed_out() {
    let store = MemoryStore::new();
    store.set(USER_KEY, r#"{"id":1,"username":"alice","email":"a@x"}"#);
    let state = AuthState::restore(&store);
    assert!(!state.is_loading());
    assert!(!state.is_authenticated());
}

#[test]
fn restore_token_alone_still_authenticates() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, "tok");
    assert!(AuthState::restore(&store).is_authenticated());
}

// =============================================================
// transitions
// =============================================================

#[test]
fn sign_in_then_sign_out() {
    let mut state = AuthState::default();
    state.sign_in(&make_session());
    assert!(state.is_authenticated());
    assert!(!state.is_loading());
    state.sign_out();
    assert!(!state.is_authenticated());
    assert!(state.user().is_none());
}

#[test]
fn set_profile_ignored_when_signed_out() {
    let mut state = AuthState::restore(&MemoryStore::new());
    state.set_profile(make_user());
    assert!(state.user().is_none());
}

#[test]
fn set_profile_replaces_user() {
    let mut state = AuthState::default();
    state.sign_in(&make_session());
    let renamed = User { first_name: "Ally".to_owned(), ..make_user() };
    state.set_profile(renamed.clone());
    assert_eq!(state.user(), Some(&renamed));
}
