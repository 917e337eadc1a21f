//! Authentication for GitHub
//!
//! Supports the gh CLI and environment variables.

mod github;

pub use github::{fetch_session, fetch_session_at, get_github_auth, GitHubAuthConfig};

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token from the gh CLI
    Cli,
    /// Token from environment variable
    EnvVar,
}
