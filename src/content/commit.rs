//! Commit payload for creating a content type
//!
//! A content type is a directory under the content base path. Git cannot hold
//! an empty directory, so the commit adds a single empty keep file.

use crate::types::CommitInput;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::Serialize;

/// File committed to materialize a content-type directory
pub const KEEP_FILE: &str = ".gitkeep";

/// Assemble the commit request for a new content type
///
/// Performs no validation: callers validate the name first.
pub fn build_commit_input(
    owner: &str,
    base_revision_id: &str,
    repository_slug: &str,
    content_base_path: &str,
    content_type: &str,
) -> CommitInput {
    CommitInput {
        owner: owner.to_string(),
        base_revision_id: base_revision_id.to_string(),
        repository_slug: repository_slug.to_string(),
        content_path: content_base_path.trim_end_matches('/').to_string(),
        content_type: content_type.to_string(),
    }
}

impl CommitInput {
    /// Repository path of the file this commit adds
    pub fn file_path(&self) -> String {
        if self.content_path.is_empty() {
            format!("{}/{KEEP_FILE}", self.content_type)
        } else {
            format!("{}/{}/{KEEP_FILE}", self.content_path, self.content_type)
        }
    }

    /// Commit message headline
    pub fn headline(&self) -> String {
        format!("feat(content): create {}", self.content_type)
    }

    /// Variables for the `createCommitOnBranch` mutation
    pub fn to_variables(&self, branch: &str) -> CreateCommitVariables {
        CreateCommitVariables {
            input: CreateCommitOnBranchInput {
                branch: CommittableBranch {
                    repository_name_with_owner: format!("{}/{}", self.owner, self.repository_slug),
                    branch_name: branch.to_string(),
                },
                message: CommitMessage {
                    headline: self.headline(),
                },
                file_changes: FileChanges {
                    additions: vec![FileAddition {
                        path: self.file_path(),
                        contents: BASE64.encode(b""),
                    }],
                },
                expected_head_oid: self.base_revision_id.clone(),
            },
        }
    }
}

/// Top-level mutation variables
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CreateCommitVariables {
    /// Mutation input
    pub input: CreateCommitOnBranchInput,
}

/// `CreateCommitOnBranchInput`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommitOnBranchInput {
    /// Target branch
    pub branch: CommittableBranch,
    /// Commit message
    pub message: CommitMessage,
    /// Files to add
    pub file_changes: FileChanges,
    /// Head the commit must build on; the remote rejects a stale value
    pub expected_head_oid: String,
}

/// `CommittableBranch`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommittableBranch {
    /// `owner/repo`
    pub repository_name_with_owner: String,
    /// Branch name
    pub branch_name: String,
}

/// `CommitMessage`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CommitMessage {
    /// First line
    pub headline: String,
}

/// `FileChanges`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FileChanges {
    /// Added or replaced files
    pub additions: Vec<FileAddition>,
}

/// `FileAddition`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FileAddition {
    /// Repository path
    pub path: String,
    /// Base64 file contents
    pub contents: String,
}
