//! Toast Container Component
//!
//! Subscribes to the global toast bus and shows each toast until its
//! duration elapses.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::toast::{Toast, ToastBus, ToastList};

#[component]
pub fn ToastContainer(limit: Option<usize>) -> impl IntoView {
    let toasts = RwSignal::new(ToastList::with_limit(limit));

    let subscription = ToastBus::global().subscribe(move |toast: &Toast| {
        let id = toast.id;
        let millis = u32::try_from(toast.duration.as_millis()).unwrap_or(u32::MAX);
        toasts.update(|list| list.push(toast.clone()));
        spawn_local(async move {
            TimeoutFuture::new(millis).await;
            toasts.try_update(|list| list.remove(id));
        });
    });
    log::debug!("[TOAST] container attached ({} listeners)", ToastBus::global().subscriber_count());
    on_cleanup(move || drop(subscription));

    view! {
        <div class="toast-container">
            <For
                each=move || toasts.with(|list| list.entries().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    view! {
                        <div class=toast.kind.class()>
                            <div class="toast-content">
                                <span class="toast-icon">{toast.kind.icon()}</span>
                                <span class="toast-message">{toast.message}</span>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
