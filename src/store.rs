//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The search and
//! edit state are each a single field, written only through their reducers.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::edit::{EditCell, EditCoordinator};
use crate::search::{self, Action, Command, SearchState, StateCell};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Search form, results and request lifecycle
    pub search: SearchState,
    /// Member edit dialog
    pub editing: EditCoordinator,
}

impl AppState {
    pub fn new(page_size: u32) -> Self {
        Self {
            search: SearchState::with_page_size(page_size),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

impl StateCell for AppStore {
    fn apply(&self, action: Action) -> Vec<Command> {
        let search = self.search();
        let mut state = search.write();
        let (next, commands) = search::reduce(std::mem::take(&mut *state), action);
        *state = next;
        commands
    }
}

impl EditCell for AppStore {
    fn update_editor<R>(&self, f: impl FnOnce(&mut EditCoordinator) -> R) -> R {
        let editing = self.editing();
        let mut editor = editing.write();
        f(&mut *editor)
    }
}
