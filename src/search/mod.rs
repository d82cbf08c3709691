//! Member Search
//!
//! Form state, validation, request building, pagination and the search
//! state machine. Nothing in here touches the DOM.

mod filter;
mod orchestrator;
mod pager;
mod request;
mod validation;

pub use filter::{Field, SearchMode, BUSINESS_UNITS, DEFAULT_PAGE_SIZE};
pub use orchestrator::{drive, reduce, run_commands, Action, Command, Phase, SearchState, StateCell};
pub use pager::Pager;
pub use request::{AiSearchRequest, SearchCall, SearchRequest};
pub use validation::ValidationReport;
