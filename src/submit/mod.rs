//! Content-type submission
//!
//! The form view model and the state machine that turns a validated name
//! into a commit:
//! `idle -> validating -> fetching base -> committing -> succeeded | failed`

mod form;
mod plan;
mod progress;
mod state;

pub use form::{ContentTypeForm, LoadingFlag, SubmissionOutcome};
pub use plan::plan_submission;
pub use progress::{NoopProgress, ProgressCallback};
pub use state::SubmissionState;
