//! GitHub content store over the GraphQL API

use crate::error::{Error, Result};
use crate::store::ContentStore;
use crate::types::{CommitInput, CommitReceipt, RepoConfig};
use async_trait::async_trait;
use octocrab::Octocrab;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::debug;

const BASE_REVISION_QUERY: &str = r"
query BaseRevision($owner: String!, $name: String!, $expression: String!) {
  repository(owner: $owner, name: $name) {
    object(expression: $expression) {
      ... on Commit { oid }
    }
  }
}";

const CREATE_COMMIT_MUTATION: &str = r"
mutation CreateCommit($input: CreateCommitOnBranchInput!) {
  createCommitOnBranch(input: $input) {
    commit { oid url }
  }
}";

const CONTENT_TYPES_QUERY: &str = r"
query ContentTypes($owner: String!, $name: String!, $expression: String!) {
  repository(owner: $owner, name: $name) {
    object(expression: $expression) {
      ... on Tree { entries { name type } }
    }
  }
}";

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
struct RepositoryData<T> {
    repository: Option<ObjectData<T>>,
}

#[derive(Deserialize)]
struct ObjectData<T> {
    object: Option<T>,
}

#[derive(Deserialize)]
struct CommitObject {
    oid: String,
}

#[derive(Deserialize)]
struct TreeObject {
    #[serde(default)]
    entries: Vec<TreeEntry>,
}

#[derive(Deserialize)]
struct TreeEntry {
    name: String,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateCommitData {
    create_commit_on_branch: Option<CreateCommitPayload>,
}

#[derive(Deserialize)]
struct CreateCommitPayload {
    commit: Option<CommitNode>,
}

#[derive(Deserialize)]
struct CommitNode {
    oid: String,
    url: Option<String>,
}

/// REST/GraphQL API root for a GitHub Enterprise host; `None` means github.com
pub fn api_base_uri(host: Option<&str>) -> Option<String> {
    host.map(|h| format!("https://{h}/api/v3"))
}

/// GitHub store using octocrab's GraphQL endpoint
pub struct GitHubStore {
    client: Octocrab,
    repo: RepoConfig,
    branch: String,
    content_path: String,
}

impl GitHubStore {
    /// Create a store for `repo`, committing to `branch`
    pub fn new(
        token: &str,
        repo: RepoConfig,
        branch: impl Into<String>,
        content_path: impl Into<String>,
    ) -> Result<Self> {
        let base_uri = api_base_uri(repo.host.as_deref());
        Self::build(token, base_uri.as_deref(), repo, branch.into(), content_path.into())
    }

    /// Create a store against an explicit API root (GitHub Enterprise, test servers)
    pub fn with_base_uri(
        token: &str,
        base_uri: &str,
        repo: RepoConfig,
        branch: impl Into<String>,
        content_path: impl Into<String>,
    ) -> Result<Self> {
        Self::build(token, Some(base_uri), repo, branch.into(), content_path.into())
    }

    fn build(
        token: &str,
        base_uri: Option<&str>,
        repo: RepoConfig,
        branch: String,
        content_path: String,
    ) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        if let Some(uri) = base_uri {
            builder = builder
                .base_uri(uri)
                .map_err(|e| Error::Config(format!("invalid API base URI {uri}: {e}")))?;
        }

        let client = builder.build().map_err(|e| Error::Transport(e.to_string()))?;

        Ok(Self {
            client,
            repo,
            branch,
            content_path: content_path.trim_end_matches('/').to_string(),
        })
    }

    async fn graphql<T: DeserializeOwned>(&self, query: &str, variables: Value) -> Result<T> {
        let response: GraphQlResponse<T> = self
            .client
            .graphql(&json!({ "query": query, "variables": variables }))
            .await?;

        if !response.errors.is_empty() {
            let messages: Vec<String> = response.errors.into_iter().map(|e| e.message).collect();
            return Err(Error::RemoteRejection(messages.join("; ")));
        }

        response
            .data
            .ok_or_else(|| Error::Transport("GraphQL response carried no data".to_string()))
    }

    fn tree_expression(&self) -> String {
        if self.content_path.is_empty() {
            format!("{}:", self.branch)
        } else {
            format!("{}:{}", self.branch, self.content_path)
        }
    }
}

#[async_trait]
impl ContentStore for GitHubStore {
    async fn fetch_base_revision(&self) -> Result<String> {
        debug!(
            "fetching head of {} on {}",
            self.branch,
            self.repo.name_with_owner()
        );

        let data: RepositoryData<CommitObject> = self
            .graphql(
                BASE_REVISION_QUERY,
                json!({
                    "owner": self.repo.owner,
                    "name": self.repo.repo,
                    "expression": self.branch,
                }),
            )
            .await?;

        data.repository
            .ok_or_else(|| {
                Error::RemoteRejection(format!(
                    "repository {} not found",
                    self.repo.name_with_owner()
                ))
            })?
            .object
            .map(|commit| commit.oid)
            .ok_or_else(|| Error::RemoteRejection(format!("branch {} not found", self.branch)))
    }

    async fn create_commit(&self, input: &CommitInput) -> Result<CommitReceipt> {
        debug!("committing {} on {}", input.file_path(), self.branch);

        let variables = serde_json::to_value(input.to_variables(&self.branch))?;
        let data: CreateCommitData = self.graphql(CREATE_COMMIT_MUTATION, variables).await?;

        let commit = data
            .create_commit_on_branch
            .and_then(|payload| payload.commit)
            .ok_or_else(|| Error::RemoteRejection("no commit was created".to_string()))?;

        Ok(CommitReceipt {
            oid: commit.oid,
            url: commit.url,
        })
    }

    async fn list_content_types(&self) -> Result<Vec<String>> {
        let data: RepositoryData<TreeObject> = self
            .graphql(
                CONTENT_TYPES_QUERY,
                json!({
                    "owner": self.repo.owner,
                    "name": self.repo.repo,
                    "expression": self.tree_expression(),
                }),
            )
            .await?;

        // A missing content directory just means nothing was created yet
        let entries = data
            .repository
            .and_then(|r| r.object)
            .map(|tree| tree.entries)
            .unwrap_or_default();

        Ok(entries
            .into_iter()
            .filter(|e| e.kind == "tree")
            .map(|e| e.name)
            .collect())
    }
}
