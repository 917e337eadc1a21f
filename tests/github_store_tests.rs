//! GitHub store tests against a local GraphQL server

use mockito::{Matcher, Server, ServerGuard};
use ost_admin::content::build_commit_input;
use ost_admin::error::Error;
use ost_admin::store::{ContentStore, GitHubStore};
use ost_admin::types::RepoConfig;
use serde_json::json;

fn repo() -> RepoConfig {
    RepoConfig {
        owner: "testowner".to_string(),
        repo: "testrepo".to_string(),
        host: None,
    }
}

fn store(server: &ServerGuard) -> GitHubStore {
    GitHubStore::with_base_uri("test-token", &server.url(), repo(), "main", "content").unwrap()
}

async fn respond(server: &mut ServerGuard, request: Matcher, status: usize, body: serde_json::Value) -> mockito::Mock {
    server
        .mock("POST", "/graphql")
        .match_body(request)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

#[tokio::test]
async fn test_fetch_base_revision_returns_head_oid() {
    let mut server = Server::new_async().await;
    let mock = respond(
        &mut server,
        Matcher::PartialJson(json!({
            "variables": { "owner": "testowner", "name": "testrepo", "expression": "main" }
        })),
        200,
        json!({ "data": { "repository": { "object": { "oid": "abc123" } } } }),
    )
    .await;

    let oid = store(&server).fetch_base_revision().await.unwrap();

    assert_eq!(oid, "abc123");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_branch_is_rejection() {
    let mut server = Server::new_async().await;
    let _mock = respond(
        &mut server,
        Matcher::Any,
        200,
        json!({ "data": { "repository": { "object": null } } }),
    )
    .await;

    let err = store(&server).fetch_base_revision().await.unwrap_err();
    assert!(matches!(err, Error::RemoteRejection(msg) if msg.contains("main")));
}

#[tokio::test]
async fn test_graphql_errors_are_rejection() {
    let mut server = Server::new_async().await;
    let _mock = respond(
        &mut server,
        Matcher::Any,
        200,
        json!({
            "data": null,
            "errors": [{ "message": "Expected branch to point to \"abc\" but it did not" }]
        }),
    )
    .await;

    let input = build_commit_input("testowner", "abc", "testrepo", "content", "posts");
    let err = store(&server).create_commit(&input).await.unwrap_err();

    assert!(matches!(err, Error::RemoteRejection(msg) if msg.contains("Expected branch")));
}

#[tokio::test]
async fn test_server_error_is_transport() {
    let mut server = Server::new_async().await;
    let _mock = respond(
        &mut server,
        Matcher::Any,
        500,
        json!({ "message": "Server Error" }),
    )
    .await;

    let err = store(&server).fetch_base_revision().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn test_create_commit_sends_file_addition() {
    let mut server = Server::new_async().await;
    let mock = respond(
        &mut server,
        Matcher::PartialJson(json!({
            "variables": {
                "input": {
                    "branch": {
                        "repositoryNameWithOwner": "testowner/testrepo",
                        "branchName": "main"
                    },
                    "expectedHeadOid": "abc",
                    "fileChanges": {
                        "additions": [{ "path": "content/posts/.gitkeep", "contents": "" }]
                    }
                }
            }
        })),
        200,
        json!({
            "data": {
                "createCommitOnBranch": {
                    "commit": {
                        "oid": "def456",
                        "url": "https://github.com/testowner/testrepo/commit/def456"
                    }
                }
            }
        }),
    )
    .await;

    let input = build_commit_input("testowner", "abc", "testrepo", "content", "posts");
    let receipt = store(&server).create_commit(&input).await.unwrap();

    assert_eq!(receipt.oid, "def456");
    assert_eq!(
        receipt.url.as_deref(),
        Some("https://github.com/testowner/testrepo/commit/def456")
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_content_types_keeps_directories() {
    let mut server = Server::new_async().await;
    let _mock = respond(
        &mut server,
        Matcher::PartialJson(json!({ "variables": { "expression": "main:content" } })),
        200,
        json!({
            "data": {
                "repository": {
                    "object": {
                        "entries": [
                            { "name": "posts", "type": "tree" },
                            { "name": "README.md", "type": "blob" },
                            { "name": "recipes", "type": "tree" }
                        ]
                    }
                }
            }
        }),
    )
    .await;

    let types = store(&server).list_content_types().await.unwrap();
    assert_eq!(types, ["posts", "recipes"]);
}

#[tokio::test]
async fn test_missing_content_directory_lists_nothing() {
    let mut server = Server::new_async().await;
    let _mock = respond(
        &mut server,
        Matcher::Any,
        200,
        json!({ "data": { "repository": { "object": null } } }),
    )
    .await;

    let types = store(&server).list_content_types().await.unwrap();
    assert!(types.is_empty());
}
