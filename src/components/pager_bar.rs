//! Pager Bar Component
//!
//! First / previous / next / last buttons over the current result page.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::search::{Action, Pager};
use crate::store::AppStateStoreFields;

#[component]
pub fn PagerBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let pager = move || ctx.store.search().with(|s| s.results.pager());

    let go = move |target: Option<u32>| {
        if let Some(page) = target {
            ctx.dispatch(Action::PageChange(page));
        }
    };

    let button = move |label: &'static str, target: fn(&Pager) -> Option<u32>| {
        view! {
            <button
                type="button"
                class="pager-btn"
                disabled=move || target(&pager()).is_none()
                on:click=move |_| go(target(&pager()))
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="pager">
            {button("« First", Pager::first)}
            {button("‹ Previous", Pager::previous)}
            <span class="pager-summary">{move || pager().summary()}</span>
            {button("Next ›", Pager::next)}
            {button("Last »", Pager::last)}
        </div>
    }
}
