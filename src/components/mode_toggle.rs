//! Mode Toggle Component
//!
//! Switches between the structured form and the natural-language query.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::search::{Action, SearchMode};
use crate::store::AppStateStoreFields;

/// Search mode options
const SEARCH_MODES: &[(SearchMode, &str)] = &[
    (SearchMode::Standard, "Standard"),
    (SearchMode::NaturalLanguage, "AI Search"),
];

/// Mode selector buttons
#[component]
pub fn ModeToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let current = move || ctx.store.search().with(|s| s.mode);

    view! {
        <div class="mode-toggle">
            {SEARCH_MODES.iter().map(move |(mode, label)| {
                let mode = *mode;
                view! {
                    <button
                        type="button"
                        class=move || if current() == mode { "mode-btn active" } else { "mode-btn" }
                        on:click=move |_| {
                            if current() != mode {
                                ctx.dispatch(Action::SwitchMode(mode));
                            }
                        }
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
