use super::*;
use crate::state::auth::AuthState;
use crate::state::session::Session;
use crate::util::session_store::MemoryStore;

// =============================================================
// AppRoute::from_path
// =============================================================

#[test]
fn from_path_recognizes_known_routes() {
    assert_eq!(AppRoute::from_path("/"), AppRoute::Root);
    assert_eq!(AppRoute::from_path(""), AppRoute::Root);
    assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
    assert_eq!(AppRoute::from_path("/signup/"), AppRoute::Signup);
    assert_eq!(AppRoute::from_path("/dashboard"), AppRoute::Dashboard);
}

#[test]
fn from_path_unknown_routes() {
    assert_eq!(AppRoute::from_path("/settings"), AppRoute::Unknown);
    assert_eq!(AppRoute::from_path("/dashboard/extra"), AppRoute::Unknown);
}

#[test]
fn only_dashboard_is_protected() {
    assert!(AppRoute::Dashboard.is_protected());
    assert!(!AppRoute::Login.is_protected());
    assert!(!AppRoute::Unknown.is_protected());
}

// =============================================================
// resolve_route
// =============================================================

#[test]
fn unauthenticated_protected_redirects_to_login() {
    assert_eq!(resolve_route(AppRoute::Dashboard, false), RouteDecision::Redirect(LOGIN_PATH));
}

#[test]
fn protected_routes_never_render_signed_out() {
    for route in [AppRoute::Root, AppRoute::Login, AppRoute::Signup, AppRoute::Dashboard, AppRoute::Unknown] {
        let decision = resolve_route(route, false);
        if route.is_protected() {
            assert_eq!(decision, RouteDecision::Redirect(LOGIN_PATH));
        } else {
            assert_ne!(decision, RouteDecision::Render(Page::Dashboard));
        }
    }
}

#[test]
fn authenticated_auth_pages_redirect_to_dashboard() {
    assert_eq!(resolve_route(AppRoute::Login, true), RouteDecision::Redirect(DASHBOARD_PATH));
    assert_eq!(resolve_route(AppRoute::Signup, true), RouteDecision::Redirect(DASHBOARD_PATH));
}

#[test]
fn root_and_unknown_follow_flag() {
    for route in [AppRoute::Root, AppRoute::Unknown] {
        assert_eq!(resolve_route(route, true), RouteDecision::Redirect(DASHBOARD_PATH));
        assert_eq!(resolve_route(route, false), RouteDecision::Redirect(LOGIN_PATH));
    }
}

#[test]
fn permitted_routes_render() {
    assert_eq!(resolve_route(AppRoute::Login, false), RouteDecision::Render(Page::Login));
    assert_eq!(resolve_route(AppRoute::Signup, false), RouteDecision::Render(Page::Signup));
    assert_eq!(resolve_route(AppRoute::Dashboard, true), RouteDecision::Render(Page::Dashboard));
}

// =============================================================
// initial load, end to end through storage
// =============================================================

#[test]
fn stored_token_sends_root_to_dashboard() {
    let store = MemoryStore::new();
    Session { token: "tok".to_owned(), ..Session::default() }.save(&store);
    let auth = AuthState::restore(&store);
    assert_eq!(
        resolve_route(AppRoute::from_path("/"), auth.is_authenticated()),
        RouteDecision::Redirect(DASHBOARD_PATH)
    );
}

#[test]
fn empty_storage_sends_dashboard_to_login() {
    let auth = AuthState::restore(&MemoryStore::new());
    assert_eq!(
        resolve_route(AppRoute::from_path("/dashboard"), auth.is_authenticated()),
        RouteDecision::Redirect(LOGIN_PATH)
    );
}
