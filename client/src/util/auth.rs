//! Route gate: which page a path resolves to for a given auth flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route component goes through `resolve_route`, so redirect rules
//! live in exactly one place and are testable without a router.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Navigation targets known to the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Root,
    Login,
    Signup,
    Dashboard,
    /// Anything else.
    Unknown,
}

impl AppRoute {
    /// Classify a location path. Trailing slashes are ignored.
    #[cfg(test)]
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Self::Root,
            LOGIN_PATH => Self::Login,
            SIGNUP_PATH => Self::Signup,
            DASHBOARD_PATH => Self::Dashboard,
            _ => Self::Unknown,
        }
    }

    /// Whether the route requires a signed-in user.
    pub fn is_protected(self) -> bool {
        matches!(self, Self::Dashboard)
    }
}

/// Page to mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Login,
    Signup,
    Dashboard,
}

/// Outcome of gating a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Render(Page),
    /// Replace the current history entry with this path.
    Redirect(&'static str),
}

/// Landing path for the current flag.
pub fn home_path(authenticated: bool) -> &'static str {
    if authenticated { DASHBOARD_PATH } else { LOGIN_PATH }
}

/// Gate `route` on the authentication flag.
pub fn resolve_route(route: AppRoute, authenticated: bool) -> RouteDecision {
    match (route, authenticated) {
        (route, false) if route.is_protected() => RouteDecision::Redirect(LOGIN_PATH),
        (AppRoute::Login, false) => RouteDecision::Render(Page::Login),
        (AppRoute::Signup, false) => RouteDecision::Render(Page::Signup),
        (AppRoute::Login | AppRoute::Signup, true) => RouteDecision::Redirect(DASHBOARD_PATH),
        (AppRoute::Dashboard, _) => RouteDecision::Render(Page::Dashboard),
        (AppRoute::Root | AppRoute::Unknown, flag) => RouteDecision::Redirect(home_path(flag)),
    }
}
