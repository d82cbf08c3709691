//! Search Results Component
//!
//! Results grid with an Edit action per row, followed by the pager.

use leptos::prelude::*;

use crate::components::PagerBar;
use crate::context::AppContext;
use crate::store::AppStateStoreFields;

/// Grid column headers
const COLUMNS: &[&str] = &["ID", "First Name", "Last Name", "Business Unit", "Country", "Source ID", "Entitled", ""];

/// Results grid (hidden until a search has completed)
#[component]
pub fn SearchResults() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let has_searched = move || ctx.store.search().with(|s| s.has_searched);
    let members = move || ctx.store.search().with(|s| s.results.members.clone());

    view! {
        <Show when=has_searched>
            <section class="search-results">
                <Show
                    when=move || !members().is_empty()
                    fallback=|| view! { <p class="no-results">"No members match your search."</p> }
                >
                    <table class="results-grid">
                        <thead>
                            <tr>
                                {COLUMNS.iter().map(|title| view! { <th>{*title}</th> }).collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=members
                                key=|member| member.id
                                children=move |member| {
                                    let row = member.clone();
                                    let entitled = match member.entitled {
                                        Some(true) => "Yes",
                                        Some(false) => "No",
                                        None => "",
                                    };
                                    view! {
                                        <tr>
                                            <td>{member.id}</td>
                                            <td>{member.first_name}</td>
                                            <td>{member.last_name}</td>
                                            <td>{member.business_unit}</td>
                                            <td>{member.country}</td>
                                            <td>{member.source_member_id}</td>
                                            <td>{entitled}</td>
                                            <td class="actions-cell">
                                                <button class="action-btn-edit" on:click=move |_| ctx.edit(&row)>
                                                    "Edit"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
                <PagerBar />
            </section>
        </Show>
    }
}
