//! Form state for the content-type view
//!
//! - [`dirty`]: field-change events and the "unsaved changes" flag
//! - [`guard`]: navigation interception while changes are unsaved
//!
//! Every observer registration returns a [`Subscription`]; dropping it
//! deregisters the observer, so a torn-down view leaves nothing behind.

pub mod dirty;
pub mod guard;
mod registry;

pub use dirty::{DirtyState, DirtyTracker, FieldChange, FormEvents};
pub use guard::{ConfirmPrompt, Navigation, NavigationGuard, Router, LEAVE_MESSAGE};
pub use registry::Subscription;
