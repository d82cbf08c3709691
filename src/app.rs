//! Member Search App
//!
//! Main application component: search form (standard or AI), results grid,
//! edit dialog and toast layer.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    AiSearchForm, LoadingSpinner, MemberEditDialog, ModeToggle, SearchForm, SearchResults, ToastContainer,
};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::search::SearchMode;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::new(config.page_size));
    let toast_limit = config.toast_limit;

    // Provide context to all children
    let ctx = AppContext::new(store, config);
    provide_context(ctx);

    let mode = move || store.search().with(|s| s.mode);
    let is_loading = Signal::derive(move || store.search().with(|s| s.is_loading()));
    let error = move || store.search().with(|s| s.error.clone());

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Member Search"</h1>
                <ModeToggle />
            </header>

            <main class="main-content">
                {move || match mode() {
                    SearchMode::Standard => view! { <SearchForm /> }.into_any(),
                    SearchMode::NaturalLanguage => view! { <AiSearchForm /> }.into_any(),
                }}

                {move || error().map(|message| view! {
                    <div class="error-banner" role="alert">{message}</div>
                })}

                <SearchResults />
            </main>

            <MemberEditDialog />
            <LoadingSpinner is_loading=is_loading message="Searching..." />
            <ToastContainer limit=toast_limit />
        </div>
    }
}
