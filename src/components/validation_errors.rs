//! Validation Errors Component
//!
//! Inline list of messages under a form control.

use leptos::prelude::*;

#[component]
pub fn ValidationErrors(messages: Signal<Vec<String>>) -> impl IntoView {
    view! {
        <Show when=move || !messages.with(|m| m.is_empty())>
            <div class="validation-errors">
                {move || messages.get().into_iter().map(|message| view! {
                    <div class="error-message">"⚠ " {message}</div>
                }).collect_view()}
            </div>
        </Show>
    }
}
