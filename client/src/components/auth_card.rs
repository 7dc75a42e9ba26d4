//! Centered card framing the login and signup forms.

use leptos::prelude::*;

/// Card with heading, inline error banner, and the form as children.
#[component]
pub fn AuthCard(
    title: &'static str,
    subtitle: &'static str,
    error: RwSignal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">{title}</h1>
                <p class="auth-card__subtitle">{subtitle}</p>
                <Show when=move || error.get().is_some()>
                    <div class="auth-card__error" role="alert">
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>
                {children()}
            </div>
        </div>
    }
}
