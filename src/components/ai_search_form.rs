//! AI Search Form Component
//!
//! Free-text query sent to the natural-language search endpoint.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::search::Action;
use crate::store::AppStateStoreFields;

/// Natural-language search form
#[component]
pub fn AiSearchForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let query = move || ctx.store.search().with(|s| s.ai_query.clone());
    let can_search = move || ctx.store.search().with(|s| s.can_ai_search() && !s.is_loading());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.dispatch(Action::AiSearch);
    };

    view! {
        <form class="ai-search-form" on:submit=on_submit>
            <label class="ai-label">"Describe the members you are looking for"</label>
            <textarea
                class="ai-query"
                rows="3"
                placeholder="e.g. find engineers in USA"
                prop:value=query
                on:input=move |ev| ctx.dispatch(Action::SetAiQuery(event_target_value(&ev)))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" && !ev.shift_key() {
                        ev.prevent_default();
                        ctx.dispatch(Action::AiSearch);
                    }
                }
            ></textarea>
            <div class="form-actions">
                <button type="submit" class="btn-primary" disabled=move || !can_search()>"Search"</button>
                <button type="button" class="btn-secondary" on:click=move |_| ctx.dispatch(Action::Reset)>
                    "Reset"
                </button>
            </div>
        </form>
    }
}
