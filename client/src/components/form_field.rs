//! Labeled text input bound to a string signal.

use leptos::prelude::*;

/// Labeled input. Typing clears `error`, so a stale message never sits next
/// to edited values.
#[component]
pub fn FormField(
    label: &'static str,
    name: &'static str,
    value: RwSignal<String>,
    error: RwSignal<Option<String>>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                type=input_type
                name=name
                required=required
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    error.set(None);
                }
            />
        </label>
    }
}
