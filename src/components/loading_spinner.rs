//! Loading Spinner Component

use leptos::prelude::*;

/// Full-screen overlay shown while a search is in flight
#[component]
pub fn LoadingSpinner(
    is_loading: Signal<bool>,
    #[prop(into)] message: String,
) -> impl IntoView {
    view! {
        <Show when=move || is_loading.get()>
            <div class="loading-overlay">
                <div class="spinner-container">
                    <div class="spinner"></div>
                    <p class="loading-message">{message.clone()}</p>
                </div>
            </div>
        </Show>
    }
}
