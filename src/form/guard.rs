//! Navigation interception while changes are unsaved

use crate::form::dirty::DirtyTracker;
use crate::form::registry::{Registry, Subscription};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// Prompt shown when leaving a view with unsaved changes
pub const LEAVE_MESSAGE: &str = "You have unsaved changes. Are you sure you want to leave?";

/// Asks the user to confirm leaving
pub trait ConfirmPrompt: Send + Sync {
    /// Return true to leave anyway
    fn confirm(&self, message: &str) -> bool;
}

impl<F> ConfirmPrompt for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Outcome of a navigation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Moved to the path
    Completed(String),
    /// An interceptor kept the current view
    Blocked,
}

/// Interceptor: receives the destination, returns false to block
type Interceptor = dyn Fn(&str) -> bool + Send + Sync;

/// Programmatic navigation surface
///
/// Tracks the current path and consults registered interceptors before
/// every move.
pub struct Router {
    current: Mutex<String>,
    interceptors: Registry<Interceptor>,
}

impl Router {
    /// Router positioned at `initial`
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            current: Mutex::new(initial.into()),
            interceptors: Registry::default(),
        }
    }

    /// Current path
    pub fn current(&self) -> String {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Register an interceptor until the returned handle is dropped
    pub fn intercept<F>(&self, interceptor: F) -> Subscription
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.interceptors.register(Arc::new(interceptor))
    }

    /// Number of registered interceptors
    pub fn interceptor_count(&self) -> usize {
        self.interceptors.len()
    }

    /// Try to move to `path`
    pub fn navigate(&self, path: &str) -> Navigation {
        for interceptor in self.interceptors.snapshot() {
            if !interceptor(path) {
                debug!("navigation to {path} blocked");
                return Navigation::Blocked;
            }
        }

        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = path.to_string();
        debug!("navigated to {path}");
        Navigation::Completed(path.to_string())
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("current", &self.current())
            .field("interceptors", &self.interceptor_count())
            .finish()
    }
}

/// Asks for confirmation before leaving a dirty view
///
/// Lives as long as the owning view; dropping it removes the interceptor.
#[derive(Debug)]
pub struct NavigationGuard {
    _interception: Subscription,
}

impl NavigationGuard {
    /// Install on `router`, consulting `dirty` on each navigation attempt
    pub fn install(router: &Router, dirty: DirtyTracker, prompt: Arc<dyn ConfirmPrompt>) -> Self {
        let interception = router.intercept(move |_| {
            if dirty.is_dirty() {
                prompt.confirm(LEAVE_MESSAGE)
            } else {
                true
            }
        });
        Self {
            _interception: interception,
        }
    }
}
