//! Login page: username + password against `POST /api/auth/login/`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::auth_card::AuthCard;
use crate::components::form_field::FormField;
use crate::net::types::LoginRequest;
use crate::state::session::Session;
use crate::util::auth::SIGNUP_PATH;

fn submit_label(busy: bool) -> &'static str {
    if busy { "Signing in..." } else { "Sign In" }
}

/// Login form. Reports a persisted session through `on_authenticated`; the
/// app root owns the auth flag.
#[component]
pub fn LoginPage(on_authenticated: Callback<Session>) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let alive = Arc::new(AtomicBool::new(true));
    let alive_cleanup = alive.clone();
    on_cleanup(move || alive_cleanup.store(false, Ordering::Relaxed));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        let req = LoginRequest { username: username.get_untracked(), password: password.get_untracked() };

        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let api = crate::net::api::HttpApi::default();
                let store = crate::util::session_store::LocalStorage;
                let result = crate::net::auth::log_in(&api, &store, &req).await;
                crate::net::auth::settle_submit(
                    result,
                    alive.load(Ordering::Relaxed),
                    |session| on_authenticated.run(session),
                    |message| {
                        busy.set(false);
                        error.set(message);
                    },
                );
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (req, &alive, on_authenticated);
            busy.set(false);
        }
    };

    view! {
        <AuthCard title="Welcome Back" subtitle="Sign in to your account" error=error>
            <form class="auth-form" on:submit=on_submit>
                <FormField label="Username" name="username" value=username error=error required=true/>
                <FormField
                    label="Password"
                    name="password"
                    input_type="password"
                    value=password
                    error=error
                    required=true
                />
                <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || submit_label(busy.get())}
                </button>
            </form>
            <p class="auth-card__footer">
                "Don't have an account? "
                <A href=SIGNUP_PATH>"Sign up"</A>
            </p>
        </AuthCard>
    }
}
