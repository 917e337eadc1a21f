//! Repository detection from remote URLs and `owner/name` specs

use crate::error::{Error, Result};
use crate::types::RepoConfig;
use regex::Regex;
use std::env;
use std::sync::LazyLock;

// SSH format: git@host:owner/repo.git
static RE_SSH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"git@[^:]+:(.+?)(?:\.git)?$").expect("hardcoded regex is valid"));
// HTTPS format: https://host/owner/repo.git
static RE_HTTPS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://[^/]+/(.+?)(?:\.git)?/?$").expect("hardcoded regex is valid")
});

/// Whether a remote URL points at GitHub (or the `GH_HOST` enterprise host)
pub fn is_github_url(url: &str) -> bool {
    let gh_host = env::var("GH_HOST").ok();

    extract_hostname(url).is_some_and(|hostname| {
        hostname == "github.com"
            || hostname.ends_with(".github.com")
            || gh_host.as_ref().is_some_and(|h| hostname == *h)
    })
}

/// Parse repository info (owner/repo) from a GitHub remote URL
pub fn parse_repo_info(url: &str) -> Result<RepoConfig> {
    if !is_github_url(url) {
        return Err(Error::Config(format!("not a GitHub remote: {url}")));
    }

    let path = RE_SSH
        .captures(url)
        .or_else(|| RE_HTTPS.captures(url))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| Error::Parse(format!("cannot parse remote URL: {url}")))?;

    let mut config = parse_repo_spec(path)?;
    config.host = extract_hostname(url).filter(|h| h != "github.com");
    Ok(config)
}

/// Parse an `owner/name` repository spec
pub fn parse_repo_spec(spec: &str) -> Result<RepoConfig> {
    match spec.trim().split('/').collect::<Vec<_>>().as_slice() {
        [owner, repo] if !owner.is_empty() && !repo.is_empty() => Ok(RepoConfig {
            owner: (*owner).to_string(),
            repo: (*repo).to_string(),
            host: None,
        }),
        _ => Err(Error::Parse(format!(
            "invalid repository '{spec}', expected owner/name"
        ))),
    }
}

fn extract_hostname(url: &str) -> Option<String> {
    // SSH format
    if url.starts_with("git@") {
        return url
            .strip_prefix("git@")
            .and_then(|s| s.split(':').next())
            .map(ToString::to_string);
    }

    // HTTPS format
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(ToString::to_string))
}
