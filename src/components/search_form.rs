//! Search Form Component
//!
//! Structured member search: name fields, business unit facet, country and
//! source member id. Errors appear per field once the field is touched.

use leptos::prelude::*;

use crate::components::ValidationErrors;
use crate::context::AppContext;
use crate::search::{Action, Field, BUSINESS_UNITS};
use crate::store::AppStateStoreFields;

/// Standard search form
#[component]
pub fn SearchForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (show_bu_dropdown, set_show_bu_dropdown) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_show_bu_dropdown.set(false);
        ctx.dispatch(Action::Search { reset_page: true });
    };

    let selected_units = move || ctx.store.search().with(|s| s.filter.business_units.clone());
    let bu_summary = move || {
        let units = selected_units();
        if units.is_empty() {
            "Select business units".to_string()
        } else {
            units.into_iter().collect::<Vec<_>>().join(", ")
        }
    };
    let bu_errors = Signal::derive(move || ctx.store.search().with(|s| s.visible_errors(Field::BusinessUnits)));
    let rule_error = move || ctx.store.search().with(|s| s.search_rule_error());

    view! {
        <form class="search-form" on:submit=on_submit>
            <div class="form-row">
                <TextField field=Field::FirstName />
                <TextField field=Field::MiddleName />
                <TextField field=Field::LastName />
            </div>

            <div class="form-row">
                <div class="form-group bu-group">
                    <label>{Field::BusinessUnits.label()}</label>
                    <button
                        type="button"
                        class="bu-dropdown-toggle"
                        on:click=move |_| set_show_bu_dropdown.update(|open| *open = !*open)
                    >
                        {bu_summary}
                    </button>
                    <Show when=move || show_bu_dropdown.get()>
                        <div class="bu-dropdown">
                            {BUSINESS_UNITS.iter().map(move |(value, label)| {
                                let unit = value.to_string();
                                let unit_check = unit.clone();
                                view! {
                                    <label class="bu-option">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || selected_units().contains(&unit_check)
                                            on:change=move |ev| {
                                                ctx.dispatch(Action::ToggleBusinessUnit(unit.clone(), event_target_checked(&ev)));
                                            }
                                        />
                                        {*label}
                                    </label>
                                }
                            }).collect_view()}
                        </div>
                    </Show>
                    <ValidationErrors messages=bu_errors />
                </div>
                <TextField field=Field::Country />
                <TextField field=Field::SourceMemberId />
            </div>

            {move || rule_error().map(|message| view! {
                <div class="form-error">{message}</div>
            })}

            <div class="form-actions">
                <button type="submit" class="btn-primary">"Search"</button>
                <button type="button" class="btn-secondary" on:click=move |_| ctx.dispatch(Action::Reset)>
                    "Reset"
                </button>
                <button type="button" class="btn-secondary" on:click=move |_| ctx.dispatch(Action::Cancel)>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}

/// Labelled text input bound to one filter field
#[component]
fn TextField(field: Field) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let value = move || {
        ctx.store
            .search()
            .with(|s| s.filter.text(field).unwrap_or_default().to_string())
    };
    let errors = Signal::derive(move || ctx.store.search().with(|s| s.visible_errors(field)));

    view! {
        <div class="form-group">
            <label>{field.label()}</label>
            <input
                type="text"
                class=move || if errors.with(|e| e.is_empty()) { "form-input" } else { "form-input invalid" }
                prop:value=value
                on:input=move |ev| ctx.dispatch(Action::SetField(field, event_target_value(&ev)))
                on:blur=move |_| ctx.dispatch(Action::Touch(field))
            />
            <ValidationErrors messages=errors />
        </div>
    }
}
