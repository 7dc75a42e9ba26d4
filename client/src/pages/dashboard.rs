//! Dashboard page: the signed-in landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted only by the route gate when the auth flag is set. It receives the
//! cached profile and the session callbacks as props; on mount it refreshes
//! the profile and loads saved portfolios, and a 401 from either ends the
//! session through `on_session_expired`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::components::portfolio_list::PortfolioList;
use crate::net::types::User;
use crate::state::portfolios::PortfoliosState;

fn greeting(user: &User) -> String {
    let name = user.display_name();
    if name.is_empty() { "Welcome".to_owned() } else { format!("Welcome, {name}") }
}

fn field_or_dash(value: &str) -> String {
    if value.trim().is_empty() { "\u{2014}".to_owned() } else { value.to_owned() }
}

#[component]
pub fn DashboardPage(
    user: Signal<User>,
    on_logout: Callback<()>,
    on_session_expired: Callback<()>,
    on_profile: Callback<User>,
) -> impl IntoView {
    let portfolios = RwSignal::new(PortfoliosState::default());
    let logging_out = RwSignal::new(false);

    let alive = Arc::new(AtomicBool::new(true));
    let alive_cleanup = alive.clone();
    on_cleanup(move || alive_cleanup.store(false, Ordering::Relaxed));

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let api = crate::net::api::HttpApi::default();
            let store = crate::util::session_store::LocalStorage;

            match crate::net::auth::refresh_profile(&api, &store).await {
                Ok(fresh) => {
                    if alive.load(Ordering::Relaxed) {
                        on_profile.run(fresh);
                    }
                }
                Err(e) if e.ends_session() => {
                    if alive.load(Ordering::Relaxed) {
                        on_session_expired.run(());
                    }
                    return;
                }
                Err(e) => log::warn!("profile refresh failed: {e:?}"),
            }

            let result = crate::net::auth::fetch_portfolios(&api, &store).await;
            if !alive.load(Ordering::Relaxed) {
                return;
            }
            match result {
                Ok(items) => portfolios.update(|s| s.loaded(items)),
                Err(e) if e.ends_session() => on_session_expired.run(()),
                Err(e) => {
                    log::warn!("portfolio fetch failed: {e:?}");
                    portfolios.update(|s| s.failed(e.to_string()));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (alive, on_session_expired, on_profile);
    }

    let on_logout_click = move |_| {
        if logging_out.get_untracked() {
            return;
        }
        logging_out.set(true);
        on_logout.run(());
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1 class="dashboard-page__greeting">{move || greeting(&user.get())}</h1>
                <button
                    class="btn dashboard-page__logout"
                    on:click=on_logout_click
                    disabled=move || logging_out.get()
                    title="Logout"
                >
                    {move || if logging_out.get() { "Signing out..." } else { "Logout" }}
                </button>
            </header>

            <section class="profile-card">
                <h2 class="profile-card__title">"Profile"</h2>
                <dl class="profile-card__fields">
                    <dt>"Username"</dt>
                    <dd>{move || field_or_dash(&user.get().username)}</dd>
                    <dt>"Email"</dt>
                    <dd>{move || field_or_dash(&user.get().email)}</dd>
                    <dt>"First name"</dt>
                    <dd>{move || field_or_dash(&user.get().first_name)}</dd>
                    <dt>"Last name"</dt>
                    <dd>{move || field_or_dash(&user.get().last_name)}</dd>
                </dl>
            </section>

            <PortfolioList state=portfolios/>
        </div>
    }
}
