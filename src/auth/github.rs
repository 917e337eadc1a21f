//! GitHub authentication

use crate::auth::AuthSource;
use crate::error::{Error, Result};
use crate::store::api_base_uri;
use crate::types::Session;
use octocrab::Octocrab;
use serde::Deserialize;
use std::env;
use tokio::process::Command;
use tracing::debug;

/// GitHub authentication configuration
#[derive(Debug, Clone)]
pub struct GitHubAuthConfig {
    /// Authentication token
    pub token: String,
    /// Where the token was obtained from
    pub source: AuthSource,
}

/// Environment variables checked after the gh CLI, in order
const TOKEN_VARS: &[&str] = &["GITHUB_TOKEN", "GH_TOKEN"];

/// Resolve a GitHub token
///
/// Priority: `gh auth token`, then `GITHUB_TOKEN`, then `GH_TOKEN`.
pub async fn get_github_auth() -> Result<GitHubAuthConfig> {
    if let Some(token) = gh_cli_token().await {
        debug!("using GitHub token from gh CLI");
        return Ok(GitHubAuthConfig {
            token,
            source: AuthSource::Cli,
        });
    }

    token_from_env(|var| env::var(var).ok()).map_or_else(
        || {
            Err(Error::Auth(
                "No GitHub authentication found. Run `gh auth login` or set GITHUB_TOKEN"
                    .to_string(),
            ))
        },
        |token| {
            Ok(GitHubAuthConfig {
                token,
                source: AuthSource::EnvVar,
            })
        },
    )
}

fn token_from_env(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    TOKEN_VARS.iter().find_map(|var| {
        lookup(var)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    })
}

async fn gh_cli_token() -> Option<String> {
    let status = Command::new("gh")
        .args(["auth", "status"])
        .output()
        .await
        .ok()?;
    if !status.status.success() {
        return None;
    }

    let output = Command::new("gh")
        .args(["auth", "token"])
        .output()
        .await
        .ok()?;
    if !output.status.success() {
        return None;
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!token.is_empty()).then_some(token)
}

/// Profile fields read from `GET /user`
#[derive(Deserialize)]
struct UserProfile {
    login: String,
    name: Option<String>,
}

/// Resolve the session for a token
///
/// `host` is the GitHub Enterprise host, `None` for github.com. The session
/// supplies the login and display name shown to the user.
pub async fn fetch_session(config: &GitHubAuthConfig, host: Option<&str>) -> Result<Session> {
    fetch_session_at(config, api_base_uri(host).as_deref()).await
}

/// Resolve the session against an explicit API root
pub async fn fetch_session_at(
    config: &GitHubAuthConfig,
    base_uri: Option<&str>,
) -> Result<Session> {
    let octocrab = session_client(&config.token, base_uri)?;

    let profile: UserProfile = octocrab
        .get("/user", None::<&()>)
        .await
        .map_err(|e| Error::Auth(format!("Invalid token: {e}")))?;

    debug!("authenticated as {}", profile.login);
    Ok(Session::new(profile.login, profile.name))
}

fn session_client(token: &str, base_uri: Option<&str>) -> Result<Octocrab> {
    let mut builder = Octocrab::builder().personal_token(token.to_string());
    if let Some(uri) = base_uri {
        builder = builder
            .base_uri(uri)
            .map_err(|e| Error::Config(format!("invalid API base URI {uri}: {e}")))?;
    }
    builder.build().map_err(|e| Error::Transport(e.to_string()))
}
