//! Mock content store for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use ost_admin::error::{Error, Result};
use ost_admin::store::ContentStore;
use ost_admin::types::{CommitInput, CommitReceipt};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Which error to inject
#[derive(Debug, Clone)]
pub enum Failure {
    /// Network-level failure
    Transport(String),
    /// Remote refused the operation
    Rejected(String),
}

impl Failure {
    fn to_error(&self) -> Error {
        match self {
            Self::Transport(msg) => Error::Transport(msg.clone()),
            Self::Rejected(msg) => Error::RemoteRejection(msg.clone()),
        }
    }
}

/// Hand-written mock store
///
/// Features:
/// - Configurable head oid and existing content types
/// - Call tracking for verification
/// - Error injection per operation
pub struct MockContentStore {
    head: Mutex<String>,
    content_types: Mutex<Vec<String>>,
    fetch_calls: AtomicUsize,
    commit_calls: Mutex<Vec<CommitInput>>,
    error_on_fetch: Mutex<Option<Failure>>,
    error_on_commit: Mutex<Option<Failure>>,
}

impl MockContentStore {
    /// Store whose branch head is `head`
    pub fn with_head(head: &str) -> Self {
        Self {
            head: Mutex::new(head.to_string()),
            content_types: Mutex::new(Vec::new()),
            fetch_calls: AtomicUsize::new(0),
            commit_calls: Mutex::new(Vec::new()),
            error_on_fetch: Mutex::new(None),
            error_on_commit: Mutex::new(None),
        }
    }

    /// Seed existing content types
    pub fn set_content_types(&self, names: &[&str]) {
        *self.content_types.lock().unwrap() = names.iter().map(ToString::to_string).collect();
    }

    // === Error injection methods ===

    /// Make `fetch_base_revision` fail
    pub fn fail_fetch(&self, failure: Failure) {
        *self.error_on_fetch.lock().unwrap() = Some(failure);
    }

    /// Make `create_commit` fail
    pub fn fail_commit(&self, failure: Failure) {
        *self.error_on_commit.lock().unwrap() = Some(failure);
    }

    /// Stop injecting errors
    pub fn heal(&self) {
        *self.error_on_fetch.lock().unwrap() = None;
        *self.error_on_commit.lock().unwrap() = None;
    }

    // === Call verification methods ===

    /// Number of `fetch_base_revision` calls
    pub fn fetch_count(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    /// All `create_commit` inputs
    pub fn commit_calls(&self) -> Vec<CommitInput> {
        self.commit_calls.lock().unwrap().clone()
    }

    /// Assert no remote call was made
    pub fn assert_untouched(&self) {
        assert_eq!(self.fetch_count(), 0, "unexpected fetch_base_revision call");
        assert!(
            self.commit_calls().is_empty(),
            "unexpected create_commit calls: {:?}",
            self.commit_calls()
        );
    }
}

#[async_trait]
impl ContentStore for MockContentStore {
    async fn fetch_base_revision(&self) -> Result<String> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(failure) = self.error_on_fetch.lock().unwrap().as_ref() {
            return Err(failure.to_error());
        }
        Ok(self.head.lock().unwrap().clone())
    }

    async fn create_commit(&self, input: &CommitInput) -> Result<CommitReceipt> {
        self.commit_calls.lock().unwrap().push(input.clone());
        if let Some(failure) = self.error_on_commit.lock().unwrap().as_ref() {
            return Err(failure.to_error());
        }

        let mut head = self.head.lock().unwrap();
        if *head != input.base_revision_id {
            return Err(Error::RemoteRejection(format!(
                "expected head {} but branch is at {head}",
                input.base_revision_id
            )));
        }
        let oid = format!("{head}-next");
        head.clone_from(&oid);
        self.content_types
            .lock()
            .unwrap()
            .push(input.content_type.clone());

        Ok(CommitReceipt {
            url: Some(format!(
                "https://github.com/{}/{}/commit/{oid}",
                input.owner, input.repository_slug
            )),
            oid,
        })
    }

    async fn list_content_types(&self) -> Result<Vec<String>> {
        Ok(self.content_types.lock().unwrap().clone())
    }
}
