//! Progress callback trait for interface-agnostic updates
//!
//! Lets the CLI (or any other front end) render spinners and messages while
//! a submission runs.

use crate::error::Error;
use crate::submit::SubmissionState;
use crate::types::CommitReceipt;
use async_trait::async_trait;

/// Progress callback trait
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called on every state transition
    async fn on_state(&self, state: SubmissionState);

    /// Called once the remote accepted the commit
    async fn on_committed(&self, content_type: &str, receipt: &CommitReceipt);

    /// Called when the submission fails
    async fn on_error(&self, error: &Error);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_state(&self, _state: SubmissionState) {}
    async fn on_committed(&self, _content_type: &str, _receipt: &CommitReceipt) {}
    async fn on_error(&self, _error: &Error) {}
    async fn on_message(&self, _message: &str) {}
}
