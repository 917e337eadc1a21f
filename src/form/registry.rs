//! Observer registry with drop-to-deregister handles

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

struct Slots<T: ?Sized> {
    next_id: u64,
    entries: Vec<(u64, Arc<T>)>,
}

fn lock<T: ?Sized>(slots: &Mutex<Slots<T>>) -> MutexGuard<'_, Slots<T>> {
    slots.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Ordered set of observers of type `T` (usually a `dyn Fn`)
pub(crate) struct Registry<T: ?Sized> {
    slots: Arc<Mutex<Slots<T>>>,
}

impl<T: ?Sized> Clone for Registry<T> {
    fn clone(&self) -> Self {
        Self {
            slots: Arc::clone(&self.slots),
        }
    }
}

impl<T: ?Sized> Default for Registry<T> {
    fn default() -> Self {
        Self {
            slots: Arc::new(Mutex::new(Slots {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }
}

impl<T: ?Sized + Send + Sync + 'static> Registry<T> {
    pub(crate) fn register(&self, observer: Arc<T>) -> Subscription {
        let id = {
            let mut slots = lock(&self.slots);
            let id = slots.next_id;
            slots.next_id += 1;
            slots.entries.push((id, observer));
            id
        };

        let weak: Weak<Mutex<Slots<T>>> = Arc::downgrade(&self.slots);
        Subscription {
            release: Some(Box::new(move || {
                if let Some(slots) = weak.upgrade() {
                    lock(&slots).entries.retain(|(entry, _)| *entry != id);
                }
            })),
        }
    }

    /// Observers in registration order, copied so callbacks run unlocked
    pub(crate) fn snapshot(&self) -> Vec<Arc<T>> {
        lock(&self.slots)
            .entries
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        lock(&self.slots).entries.len()
    }
}

/// Handle for a registered observer
///
/// The observer stays registered until this handle is dropped or
/// [`Subscription::unsubscribe`] is called.
#[must_use = "dropping a Subscription deregisters the observer immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Deregister the observer now
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}
