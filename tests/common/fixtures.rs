//! Test data factories for ost-admin types
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use ost_admin::config::{AdminContext, FailurePolicy};
use ost_admin::types::{CommitReceipt, PagesList, RepoConfig, Session};

/// Route the create view starts on
pub const CREATE_VIEW: &str = "/admin/content-types";

/// Repository used across tests
pub fn repo_config() -> RepoConfig {
    RepoConfig {
        owner: "testowner".to_string(),
        repo: "testrepo".to_string(),
        host: None,
    }
}

/// Session for the test user
pub fn session() -> Session {
    Session::from_login("testuser")
}

/// Context with the given existing pages
pub fn context_with_pages(pages: &[&str]) -> AdminContext {
    AdminContext::new(&repo_config(), session()).with_pages(PagesList::new(pages.iter().copied()))
}

/// Context that keeps the dirty flag after a failed submission
pub fn context_preserving_dirty(pages: &[&str]) -> AdminContext {
    AdminContext {
        failure_policy: FailurePolicy::PreserveDirty,
        ..context_with_pages(pages)
    }
}

/// Commit receipt for an oid
pub fn receipt(oid: &str) -> CommitReceipt {
    CommitReceipt {
        oid: oid.to_string(),
        url: Some(format!("https://github.com/testowner/testrepo/commit/{oid}")),
    }
}
