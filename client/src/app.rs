//! Root application component with routing and the session gate.
//!
//! DESIGN
//! ======
//! `App` owns the only `RwSignal<AuthState>`. `AppRoutes` turns it into
//! callbacks for the pages, so the auth flag has exactly two writers:
//! `sign_in` after a persisted login/signup, and `sign_out` after storage has
//! been cleared. Navigation follows from the flag: every route is rendered
//! through `resolve_route`, which redirects as soon as the flag changes.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::loading_screen::LoadingScreen;
use crate::net::types::User;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, signup::SignupPage};
use crate::state::auth::AuthState;
use crate::state::session::Session;
use crate::util::auth::{AppRoute, Page, RouteDecision, resolve_route};
use crate::util::session_store::LocalStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // Effects only run in the browser, so SSR and the first hydrated frame
    // both render the loading state before storage is consulted.
    Effect::new(move || {
        let restored = AuthState::restore(&LocalStorage);
        log::debug!("session restored: authenticated={}", restored.is_authenticated());
        auth.set(restored);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text="Folio"/>

        <Router>
            <AppRoutes/>
        </Router>
    }
}

/// Route table plus the callbacks that are the sole mutators of auth state.
#[component]
fn AppRoutes() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_authenticated = Callback::new(move |session: Session| {
        auth.update(|a| a.sign_in(&session));
    });

    let on_logout = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::auth::log_out(&crate::net::api::HttpApi::default(), &LocalStorage).await;
            auth.update(AuthState::sign_out);
        });
    });

    let on_session_expired = Callback::new(move |()| {
        Session::clear(&LocalStorage);
        auth.update(AuthState::sign_out);
    });

    let on_profile = Callback::new(move |user: User| {
        auth.update(|a| a.set_profile(user));
    });

    let gate = move |route: AppRoute| {
        let decision = Memo::new(move |_| {
            let state = auth.get();
            (!state.is_loading()).then(|| resolve_route(route, state.is_authenticated()))
        });
        let user = Signal::derive(move || auth.get().user().cloned().unwrap_or_default());

        move || match decision.get() {
            None => view! { <LoadingScreen/> }.into_any(),
            Some(RouteDecision::Redirect(path)) => {
                let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
                view! { <Redirect path=path options=options/> }.into_any()
            }
            Some(RouteDecision::Render(Page::Login)) => {
                view! { <LoginPage on_authenticated=on_authenticated/> }.into_any()
            }
            Some(RouteDecision::Render(Page::Signup)) => {
                view! { <SignupPage on_authenticated=on_authenticated/> }.into_any()
            }
            Some(RouteDecision::Render(Page::Dashboard)) => view! {
                <DashboardPage
                    user=user
                    on_logout=on_logout
                    on_session_expired=on_session_expired
                    on_profile=on_profile
                />
            }
            .into_any(),
        }
    };

    view! {
        <Routes fallback=move || gate(AppRoute::Unknown)>
            <Route path=StaticSegment("") view=move || gate(AppRoute::Root)/>
            <Route path=StaticSegment("login") view=move || gate(AppRoute::Login)/>
            <Route path=StaticSegment("signup") view=move || gate(AppRoute::Signup)/>
            <Route path=StaticSegment("dashboard") view=move || gate(AppRoute::Dashboard)/>
        </Routes>
    }
}
