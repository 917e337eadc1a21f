//! Remote content store
//!
//! The repository that holds the content is reached through the
//! [`ContentStore`] trait so the submission flow can run against GitHub or
//! an in-memory double.

mod detection;
mod github;

pub use detection::{is_github_url, parse_repo_info, parse_repo_spec};
pub use github::{api_base_uri, GitHubStore};

use crate::error::Result;
use crate::types::{CommitInput, CommitReceipt};
use async_trait::async_trait;

/// Remote operations the content-type flow needs
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Oid of the current head of the content branch
    async fn fetch_base_revision(&self) -> Result<String>;

    /// Commit the keep file for a new content type
    ///
    /// Fails with `RemoteRejection` when the base revision is stale.
    async fn create_commit(&self, input: &CommitInput) -> Result<CommitReceipt>;

    /// Names of the content-type directories under the content path
    async fn list_content_types(&self) -> Result<Vec<String>>;
}
