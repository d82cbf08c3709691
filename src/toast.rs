//! Toast Notifier
//!
//! Process-wide publish/subscribe channel for transient status messages.
//! Publishers fire and forget; each subscriber keeps its own display list and
//! expires entries on its own schedule.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError, Weak};
use std::time::Duration;

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

impl ToastKind {
    pub fn default_duration(self) -> Duration {
        let ms = match self {
            ToastKind::Success => 3000,
            ToastKind::Error => 5000,
            ToastKind::Info => 3000,
            ToastKind::Warning => 4000,
        };
        Duration::from_millis(ms)
    }

    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
            ToastKind::Info => "ℹ",
            ToastKind::Warning => "⚠",
        }
    }

    /// CSS modifier class
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
            ToastKind::Warning => "toast toast-warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub duration: Duration,
}

type Listener = Arc<dyn Fn(&Toast) + Send + Sync>;

#[derive(Default)]
struct BusInner {
    next_toast_id: AtomicU64,
    next_listener_id: AtomicU64,
    listeners: Mutex<Vec<(u64, Listener)>>,
}

impl BusInner {
    fn listeners(&self) -> MutexGuard<'_, Vec<(u64, Listener)>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Typed toast channel. Cloning yields another handle to the same channel.
#[derive(Clone, Default)]
pub struct ToastBus {
    inner: Arc<BusInner>,
}

static GLOBAL_BUS: OnceLock<ToastBus> = OnceLock::new();

impl ToastBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// The application-wide bus, created on first use
    pub fn global() -> &'static ToastBus {
        GLOBAL_BUS.get_or_init(ToastBus::new)
    }

    /// Register a listener. It receives toasts until the returned guard drops.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl Fn(&Toast) + Send + Sync + 'static) -> Subscription {
        let id = self.inner.next_listener_id.fetch_add(1, Ordering::Relaxed);
        self.inner.listeners().push((id, Arc::new(listener)));
        Subscription {
            bus: Arc::downgrade(&self.inner),
            id,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners().len()
    }

    /// Publish a toast; `None` uses the kind's default duration
    pub fn publish(&self, kind: ToastKind, message: impl Into<String>, duration: Option<Duration>) -> Toast {
        let toast = Toast {
            id: self.inner.next_toast_id.fetch_add(1, Ordering::Relaxed),
            message: message.into(),
            kind,
            duration: duration.unwrap_or_else(|| kind.default_duration()),
        };
        log::debug!("toast {:?}: {}", toast.kind, toast.message);

        // Snapshot so listeners may publish or unsubscribe re-entrantly
        let listeners: Vec<Listener> = self.inner.listeners().iter().map(|(_, l)| l.clone()).collect();
        for listener in listeners {
            listener(&toast);
        }
        toast
    }

    pub fn success(&self, message: impl Into<String>, duration: Option<Duration>) -> Toast {
        self.publish(ToastKind::Success, message, duration)
    }

    pub fn error(&self, message: impl Into<String>, duration: Option<Duration>) -> Toast {
        self.publish(ToastKind::Error, message, duration)
    }

    pub fn info(&self, message: impl Into<String>, duration: Option<Duration>) -> Toast {
        self.publish(ToastKind::Info, message, duration)
    }

    pub fn warning(&self, message: impl Into<String>, duration: Option<Duration>) -> Toast {
        self.publish(ToastKind::Warning, message, duration)
    }
}

/// Listener registration guard
pub struct Subscription {
    bus: Weak<BusInner>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.listeners().retain(|(id, _)| *id != self.id);
        }
    }
}

/// One subscriber's visible toasts, in arrival order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastList {
    entries: Vec<Toast>,
    limit: Option<usize>,
}

impl ToastList {
    /// `None` keeps every toast until it expires
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self { entries: Vec::new(), limit }
    }

    pub fn push(&mut self, toast: Toast) {
        self.entries.push(toast);
        if let Some(limit) = self.limit {
            let overflow = self.entries.len().saturating_sub(limit);
            self.entries.drain(..overflow);
        }
    }

    /// Expire a toast by id; unknown ids are ignored
    pub fn remove(&mut self, id: u64) {
        self.entries.retain(|t| t.id != id);
    }

    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }
}
