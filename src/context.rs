//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpMemberApi;
use crate::config::AppConfig;
use crate::edit;
use crate::models::Member;
use crate::search::{self, Action, StateCell};
use crate::store::{AppStateStoreFields, AppStore};
use crate::toast::ToastBus;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Reactive application state
    pub store: AppStore,
    /// Build-time configuration
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(store: AppStore, config: AppConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    fn api(&self) -> HttpMemberApi {
        self.config.with_value(|config| HttpMemberApi::new(&config.api_base_url))
    }

    /// Feed an action to the search orchestrator.
    ///
    /// The state changes before this returns; requests it triggers run in the
    /// background.
    pub fn dispatch(&self, action: Action) {
        let store = self.store;
        let commands = store.apply(action);
        if commands.is_empty() {
            return;
        }
        let api = self.api();
        spawn_local(async move {
            search::run_commands(&api, &store, ToastBus::global(), commands).await;
        });
    }

    /// Open the edit dialog on a copy of `member`
    pub fn edit(&self, member: &Member) {
        self.store.editing().write().open(member);
    }

    /// Save the open edit; refresh the current page once the backend accepts it
    pub fn save_edit(&self) {
        let store = self.store;
        let api = self.api();
        spawn_local(async move {
            let toasts = ToastBus::global();
            if edit::save(&api, &store, toasts).await.is_ok() {
                search::drive(&api, &store, toasts, Action::Refresh).await;
            }
        });
    }
}
