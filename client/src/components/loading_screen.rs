use leptos::prelude::*;

/// Full-page placeholder shown until the session has been read from storage.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <p class="loading-screen__text">"Loading..."</p>
        </div>
    }
}
