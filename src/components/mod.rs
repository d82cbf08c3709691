//! UI Components
//!
//! Leptos components for the member search screen.

mod ai_search_form;
mod loading_spinner;
mod member_edit_dialog;
mod mode_toggle;
mod pager_bar;
mod search_form;
mod search_results;
mod toast_container;
mod validation_errors;

pub use ai_search_form::AiSearchForm;
pub use loading_spinner::LoadingSpinner;
pub use member_edit_dialog::MemberEditDialog;
pub use mode_toggle::ModeToggle;
pub use pager_bar::PagerBar;
pub use search_form::SearchForm;
pub use search_results::SearchResults;
pub use toast_container::ToastContainer;
pub use validation_errors::ValidationErrors;
