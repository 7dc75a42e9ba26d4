//! Signup page: account creation against `POST /api/auth/signup/`.
//!
//! Password rules are checked locally first; a failing form never reaches the
//! network.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::auth_card::AuthCard;
use crate::components::form_field::FormField;
use crate::net::auth::SignupForm;
use crate::state::session::Session;
use crate::util::auth::LOGIN_PATH;

fn submit_label(busy: bool) -> &'static str {
    if busy { "Creating account..." } else { "Sign Up" }
}

/// Form field signals, one per input.
#[derive(Clone, Copy)]
struct SignupFields {
    username: RwSignal<String>,
    email: RwSignal<String>,
    password: RwSignal<String>,
    confirm_password: RwSignal<String>,
    first_name: RwSignal<String>,
    last_name: RwSignal<String>,
}

impl SignupFields {
    fn new() -> Self {
        Self {
            username: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            confirm_password: RwSignal::new(String::new()),
            first_name: RwSignal::new(String::new()),
            last_name: RwSignal::new(String::new()),
        }
    }

    fn snapshot(&self) -> SignupForm {
        SignupForm {
            username: self.username.get_untracked(),
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
            confirm_password: self.confirm_password.get_untracked(),
            first_name: self.first_name.get_untracked(),
            last_name: self.last_name.get_untracked(),
        }
    }
}

/// Signup form. Reports a persisted session through `on_authenticated`.
#[component]
pub fn SignupPage(on_authenticated: Callback<Session>) -> impl IntoView {
    let fields = SignupFields::new();
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
        error.set(None);
        let form = fields.snapshot();
        if let Err(e) = form.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let api = crate::net::api::HttpApi::default();
                let store = crate::util::session_store::LocalStorage;
                let result = crate::net::auth::sign_up(&api, &store, &form).await;
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
            let _ = (form, &alive, on_authenticated);
            busy.set(false);
        }
    };

    view! {
        <AuthCard title="Create Account" subtitle="Join us today" error=error>
            <form class="auth-form" on:submit=on_submit>
                <div class="auth-form__row">
                    <FormField label="First Name" name="first_name" value=fields.first_name error=error/>
                    <FormField label="Last Name" name="last_name" value=fields.last_name error=error/>
                </div>
                <FormField label="Username *" name="username" value=fields.username error=error required=true/>
                <FormField
                    label="Email *"
                    name="email"
                    input_type="email"
                    value=fields.email
                    error=error
                    required=true
                />
                <FormField
                    label="Password *"
                    name="password"
                    input_type="password"
                    value=fields.password
                    error=error
                    required=true
                />
                <FormField
                    label="Confirm Password *"
                    name="confirm_password"
                    input_type="password"
                    value=fields.confirm_password
                    error=error
                    required=true
                />
                <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || submit_label(busy.get())}
                </button>
            </form>
            <p class="auth-card__footer">
                "Already have an account? "
                <A href=LOGIN_PATH>"Sign in"</A>
            </p>
        </AuthCard>
    }
}
