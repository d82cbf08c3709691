//! Member Edit Dialog
//!
//! Modal editor over the edit coordinator's working copy. Save stays
//! disabled while a required field is blank or a save is in flight.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::edit::MemberField;
use crate::store::AppStateStoreFields;

#[component]
pub fn MemberEditDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let is_open = move || ctx.store.editing().with(|e| e.is_open());
    let title = move || {
        ctx.store
            .editing()
            .with(|e| e.session().map(|s| s.original().full_name()).unwrap_or_default())
    };
    let entitled = move || {
        ctx.store
            .editing()
            .with(|e| e.session().and_then(|s| s.draft.entitled).unwrap_or(false))
    };
    let can_save = move || ctx.store.editing().with(|e| e.missing_fields().is_empty() && !e.is_saving());
    let close = move |_: web_sys::MouseEvent| ctx.store.editing().write().cancel();

    view! {
        <Show when=is_open>
            <div class="modal-overlay">
                <div class="modal-container">
                    <div class="modal-header">
                        <h2>"Edit Member"</h2>
                        <span class="modal-subtitle">{title}</span>
                        <button class="close-btn" on:click=close>"×"</button>
                    </div>

                    <form
                        class="modal-body"
                        on:submit=move |ev: web_sys::SubmitEvent| {
                            ev.prevent_default();
                            if can_save() {
                                ctx.save_edit();
                            }
                        }
                    >
                        {MemberField::ALL.into_iter().map(|field| view! { <DraftInput field=field /> }).collect_view()}
                        <label class="form-check">
                            <input
                                type="checkbox"
                                prop:checked=entitled
                                on:change=move |ev| ctx.store.editing().write().set_entitled(event_target_checked(&ev))
                            />
                            "Entitled"
                        </label>
                    </form>

                    <div class="modal-footer">
                        <button type="button" class="btn-cancel" on:click=close>"Cancel"</button>
                        <button
                            type="button"
                            class="btn-save"
                            disabled=move || !can_save()
                            on:click=move |_| ctx.save_edit()
                        >
                            {move || if ctx.store.editing().with(|e| e.is_saving()) { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Text input bound to one field of the draft
#[component]
fn DraftInput(field: MemberField) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let value = move || {
        ctx.store
            .editing()
            .with(|e| e.session().map(|s| field.get(&s.draft).to_string()).unwrap_or_default())
    };
    let missing = move || field.required() && value().trim().is_empty();

    view! {
        <div class="form-group">
            <label>{field.label()} {field.required().then_some(" *")}</label>
            <input
                type="text"
                class=move || if missing() { "form-input invalid" } else { "form-input" }
                prop:value=value
                on:input=move |ev| ctx.store.editing().write().set_field(field, event_target_value(&ev))
            />
        </div>
    }
}
