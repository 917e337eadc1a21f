//! Unsaved-changes tracking

use crate::form::registry::{Registry, Subscription};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// A single field-change event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    /// Field that changed
    pub field: &'static str,
    /// New value
    pub value: String,
}

type FieldObserver = dyn Fn(&FieldChange) + Send + Sync;

/// Field-change event hub for one form
#[derive(Clone, Default)]
pub struct FormEvents {
    observers: Registry<FieldObserver>,
}

impl FormEvents {
    /// Create an event hub with no observers
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe every field change until the returned handle is dropped
    pub fn watch<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&FieldChange) + Send + Sync + 'static,
    {
        self.observers.register(Arc::new(observer))
    }

    /// Deliver a change to all current observers
    pub fn emit(&self, change: &FieldChange) {
        for observer in self.observers.snapshot() {
            observer(change);
        }
    }

    /// Number of registered observers
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl std::fmt::Debug for FormEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormEvents")
            .field("observers", &self.observer_count())
            .finish()
    }
}

/// Whether the form holds unsaved changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirtyState {
    /// Nothing to lose
    Clean,
    /// Unsaved changes present
    Dirty,
}

/// Shared "unsaved changes" flag
///
/// Clones share the same flag, so the navigation guard and the form see
/// one value.
#[derive(Debug, Clone, Default)]
pub struct DirtyTracker {
    dirty: Arc<AtomicBool>,
}

impl DirtyTracker {
    /// A clean tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> DirtyState {
        if self.is_dirty() {
            DirtyState::Dirty
        } else {
            DirtyState::Clean
        }
    }

    /// Whether unsaved changes are present
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// clean -> dirty
    pub fn mark_dirty(&self) {
        if !self.dirty.swap(true, Ordering::SeqCst) {
            debug!("form state: clean -> dirty");
        }
    }

    /// dirty -> clean
    pub fn mark_clean(&self) {
        if self.dirty.swap(false, Ordering::SeqCst) {
            debug!("form state: dirty -> clean");
        }
    }

    /// Mark dirty on every change emitted by `events`
    pub fn attach(&self, events: &FormEvents) -> Subscription {
        let tracker = self.clone();
        events.watch(move |_| tracker.mark_dirty())
    }
}
