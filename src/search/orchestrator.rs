//! Search Orchestrator
//!
//! The search screen as a state snapshot plus a pure reducer. User actions
//! and backend responses both arrive as `Action`s; the reducer returns the
//! next snapshot and the side effects to run (`Command`s). `drive` runs those
//! effects against a `MemberApi` and feeds responses back in.
//!
//! Every issued request carries a sequence number. Only the response to the
//! latest request is applied; anything older is dropped. Resets and mode
//! switches abandon the request in flight the same way.

use std::cell::RefCell;
use std::collections::{BTreeSet, VecDeque};

use super::filter::{Field, PageCursor, SearchFilter, SearchMode};
use super::pager::Pager;
use super::request::{AiSearchRequest, SearchCall, SearchRequest};
use super::validation::{validate, InvalidSearch};
use crate::api::MemberApi;
use crate::error::AppError;
use crate::models::{Member, SearchResponse};
use crate::toast::{ToastBus, ToastKind};

/// Shown when a failure carries no usable message
const SEARCH_FAILED: &str = "Search failed";

/// Request lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Requesting,
    Succeeded,
    Failed,
}

/// Last page received from the backend
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultPage {
    pub members: Vec<Member>,
    pub total_count: u64,
    pub page: u32,
    pub size: u32,
}

impl ResultPage {
    fn from_response(response: SearchResponse, cursor: PageCursor) -> Self {
        Self {
            members: response.content,
            total_count: response.total_elements,
            page: response.number,
            size: if response.size == 0 { cursor.size } else { response.size },
        }
    }

    pub fn pager(&self) -> Pager {
        Pager::new(self.page, self.size, self.total_count)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub mode: SearchMode,
    pub filter: SearchFilter,
    pub touched: BTreeSet<Field>,
    pub ai_query: String,
    pub cursor: PageCursor,
    pub results: ResultPage,
    pub phase: Phase,
    pub has_searched: bool,
    pub error: Option<String>,
    /// Mode of the last issued search; page changes and refreshes re-run it
    pub last_mode: Option<SearchMode>,
    in_flight: Option<u64>,
    issued: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::with_page_size(PageCursor::default().size)
    }
}

impl SearchState {
    pub fn with_page_size(size: u32) -> Self {
        Self {
            mode: SearchMode::default(),
            filter: SearchFilter::default(),
            touched: BTreeSet::new(),
            ai_query: String::new(),
            cursor: PageCursor::new(size),
            results: ResultPage::default(),
            phase: Phase::Idle,
            has_searched: false,
            error: None,
            last_mode: None,
            in_flight: None,
            issued: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Requesting
    }

    /// Messages for a field, shown only once the field has been touched
    pub fn visible_errors(&self, field: Field) -> Vec<String> {
        if !self.touched.contains(&field) {
            return Vec::new();
        }
        validate(&self.filter).for_field(field).map(|v| v.message()).collect()
    }

    /// Cross-field message, shown once any field has been touched
    pub fn search_rule_error(&self) -> Option<&'static str> {
        if self.touched.is_empty() || !validate(&self.filter).invalid_search {
            return None;
        }
        Some(InvalidSearch::MESSAGE)
    }

    pub fn can_ai_search(&self) -> bool {
        !self.ai_query.trim().is_empty()
    }

    fn clear_results(&mut self) {
        self.results = ResultPage::default();
        self.cursor.page = 0;
        self.has_searched = false;
        self.in_flight = None;
        self.phase = Phase::Idle;
    }

    fn issue(&mut self, call: SearchCall) -> Vec<Command> {
        self.issued += 1;
        let seq = self.issued;
        self.in_flight = Some(seq);
        self.phase = Phase::Requesting;
        self.error = None;
        self.last_mode = Some(call.mode());
        log::info!("[SEARCH] issuing {:?} request #{} (page {})", call.mode(), seq, self.cursor.page);
        vec![Command::Send { seq, call }]
    }

    fn standard_search(&mut self, reset_page: bool) -> Vec<Command> {
        if let Err(err) = validate(&self.filter).into_result() {
            log::debug!("[SEARCH] rejected: {}", err);
            self.touched.extend(Field::ALL);
            return Vec::new();
        }
        if reset_page {
            self.cursor.page = 0;
        }
        let request = SearchRequest::from_filter(&self.filter, self.cursor);
        self.issue(SearchCall::Standard(request))
    }

    fn ai_search(&mut self, reset_page: bool) -> Vec<Command> {
        let cursor = if reset_page { self.cursor.at(0) } else { self.cursor };
        let Some(request) = AiSearchRequest::new(&self.ai_query, cursor) else {
            return Vec::new();
        };
        self.cursor = cursor;
        self.issue(SearchCall::NaturalLanguage(request))
    }

    /// Re-run the last-used mode at the current page
    fn rerun(&mut self) -> Vec<Command> {
        match self.last_mode.unwrap_or(self.mode) {
            SearchMode::Standard => self.standard_search(false),
            SearchMode::NaturalLanguage => self.ai_search(false),
        }
    }
}

/// Everything that can happen to the search screen
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetField(Field, String),
    ToggleBusinessUnit(String, bool),
    Touch(Field),
    SetAiQuery(String),
    SwitchMode(SearchMode),
    Search { reset_page: bool },
    AiSearch,
    PageChange(u32),
    Refresh,
    Reset,
    Cancel,
    Resolved { seq: u64, outcome: Result<SearchResponse, AppError> },
    Settle,
}

/// Side effects requested by the reducer
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Send { seq: u64, call: SearchCall },
    Notify(ToastKind, String),
    Dispatch(Action),
}

/// "Found 1 member" / "Found N members"
pub fn found_message(count: u64) -> String {
    if count == 1 {
        "Found 1 member".to_string()
    } else {
        format!("Found {} members", count)
    }
}

/// Apply one action to a snapshot.
pub fn reduce(mut state: SearchState, action: Action) -> (SearchState, Vec<Command>) {
    let commands = match action {
        Action::SetField(field, value) => {
            state.filter.set_text(field, value);
            Vec::new()
        }
        Action::ToggleBusinessUnit(unit, selected) => {
            state.filter.toggle_business_unit(&unit, selected);
            state.touched.insert(Field::BusinessUnits);
            Vec::new()
        }
        Action::Touch(field) => {
            state.touched.insert(field);
            Vec::new()
        }
        Action::SetAiQuery(query) => {
            state.ai_query = query;
            Vec::new()
        }
        Action::SwitchMode(mode) => {
            state.mode = mode;
            state.clear_results();
            state.error = None;
            state.last_mode = None;
            Vec::new()
        }
        Action::Search { reset_page } => state.standard_search(reset_page),
        Action::AiSearch => state.ai_search(true),
        Action::PageChange(page) => {
            let current = state.cursor.page;
            state.cursor.page = page;
            let commands = state.rerun();
            if commands.is_empty() {
                state.cursor.page = current;
            }
            commands
        }
        Action::Refresh => state.rerun(),
        Action::Reset => {
            state.filter = SearchFilter::default();
            state.touched.clear();
            state.ai_query.clear();
            state.clear_results();
            state.error = None;
            state.last_mode = None;
            Vec::new()
        }
        Action::Cancel => {
            state.clear_results();
            Vec::new()
        }
        Action::Resolved { seq, outcome } => {
            if state.in_flight != Some(seq) {
                log::debug!("[SEARCH] dropping stale response #{} (current {:?})", seq, state.in_flight);
                return (state, Vec::new());
            }
            state.in_flight = None;
            match outcome {
                Ok(response) => {
                    let found = found_message(response.total_elements);
                    log::info!("[SEARCH] #{}: {}", seq, found);
                    state.results = ResultPage::from_response(response, state.cursor);
                    state.has_searched = true;
                    state.error = None;
                    state.phase = Phase::Succeeded;
                    vec![Command::Notify(ToastKind::Success, found), Command::Dispatch(Action::Settle)]
                }
                Err(err) => {
                    let message = err.user_message(SEARCH_FAILED);
                    log::error!("[SEARCH] #{} failed: {}", seq, err);
                    state.error = Some(message.clone());
                    state.phase = Phase::Failed;
                    vec![Command::Notify(ToastKind::Error, message), Command::Dispatch(Action::Settle)]
                }
            }
        }
        Action::Settle => {
            if matches!(state.phase, Phase::Succeeded | Phase::Failed) {
                state.phase = Phase::Idle;
            }
            Vec::new()
        }
    };
    (state, commands)
}

/// Somewhere a `SearchState` lives and can be advanced by the reducer
pub trait StateCell {
    fn apply(&self, action: Action) -> Vec<Command>;
}

impl StateCell for RefCell<SearchState> {
    fn apply(&self, action: Action) -> Vec<Command> {
        let mut state = self.borrow_mut();
        let (next, commands) = reduce(std::mem::take(&mut *state), action);
        *state = next;
        commands
    }
}

/// Apply `action` and run every effect it causes until none are left.
pub async fn drive<A, S>(api: &A, state: &S, toasts: &ToastBus, action: Action)
where
    A: MemberApi + ?Sized,
    S: StateCell + ?Sized,
{
    let commands = state.apply(action);
    run_commands(api, state, toasts, commands).await;
}

/// Run effects already returned by the reducer, feeding responses back in.
pub async fn run_commands<A, S>(api: &A, state: &S, toasts: &ToastBus, commands: Vec<Command>)
where
    A: MemberApi + ?Sized,
    S: StateCell + ?Sized,
{
    let mut queue = VecDeque::from(commands);
    while let Some(command) = queue.pop_front() {
        match command {
            Command::Send { seq, call } => {
                let outcome = api.run(&call).await;
                queue.extend(state.apply(Action::Resolved { seq, outcome }));
            }
            Command::Notify(kind, message) => {
                toasts.publish(kind, message, None);
            }
            Command::Dispatch(next) => queue.extend(state.apply(next)),
        }
    }
}
