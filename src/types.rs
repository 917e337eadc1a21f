//! Core types for ost-admin

use serde::{Deserialize, Serialize};

/// A named category of content items (e.g. "Posts")
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentType {
    /// Display name as typed into the form
    pub name: String,
}

/// Everything needed to commit a new content type, built fresh per attempt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommitInput {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Commit oid the new commit must be built on
    pub base_revision_id: String,
    /// Repository name
    pub repository_slug: String,
    /// Directory holding all content types
    pub content_path: String,
    /// Slug of the content type being created
    pub content_type: String,
}

/// Result of a successful remote commit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommitReceipt {
    /// Oid of the new commit
    pub oid: String,
    /// Web URL of the commit, when the remote reports one
    pub url: Option<String>,
}

/// The authenticated user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Account login
    pub login: String,
    /// Display name (falls back to login)
    pub name: String,
}

impl Session {
    /// Session for a login and its profile name; a blank name falls back to the login
    pub fn new(login: impl Into<String>, name: Option<String>) -> Self {
        let login = login.into();
        Self {
            name: name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| login.clone()),
            login,
        }
    }

    /// Session for a login with no separate display name
    pub fn from_login(login: impl Into<String>) -> Self {
        let login = login.into();
        Self {
            name: login.clone(),
            login,
        }
    }
}

/// Ordered set of known content-type slugs
///
/// Append-only: entries are added after a successful commit and never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagesList(Vec<String>);

impl PagesList {
    /// Build from existing names, dropping case-insensitive duplicates
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::default();
        for name in names {
            list.add(name);
        }
        list
    }

    /// Append a name; returns false if it was already known
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.0.push(name);
        true
    }

    /// Case-insensitive membership
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|p| p.eq_ignore_ascii_case(name))
    }

    /// Names in insertion order
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Number of known pages
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no pages are known
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Repository coordinates on GitHub
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Custom host (None for github.com)
    pub host: Option<String>,
}

impl RepoConfig {
    /// `owner/repo`
    pub fn name_with_owner(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}
