//! Configuration and the admin context
//!
//! Settings come from, in increasing precedence: built-in defaults, the
//! config file, `OST_*` environment variables, command-line flags. The
//! resolved values plus the session and known pages form the
//! [`AdminContext`] handed to the submission flow.

use crate::error::{Error, Result};
use crate::store::{parse_repo_info, parse_repo_spec};
use crate::types::{PagesList, RepoConfig, Session};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::debug;

/// Branch commits go to when nothing else is configured
pub const DEFAULT_BRANCH: &str = "main";
/// Directory holding content types when nothing else is configured
pub const DEFAULT_CONTENT_PATH: &str = "content";
/// Route prefix of the admin views
pub const DEFAULT_ROUTE_PREFIX: &str = "/admin";

/// What a failed submission does to the unsaved-changes flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Clear it, so a retry doesn't trigger a leave warning
    #[default]
    ClearDirty,
    /// Keep it, so the navigation guard still warns
    PreserveDirty,
}

/// User configuration file contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Repository as `owner/name`
    pub repo: Option<String>,
    /// GitHub Enterprise host
    pub host: Option<String>,
    /// Branch to commit to
    pub branch: Option<String>,
    /// Directory holding content types
    pub content_path: Option<String>,
    /// Route prefix of the admin views
    pub route_prefix: Option<String>,
    /// Keep the unsaved-changes flag after a failed submission
    pub preserve_dirty_on_failure: bool,
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `--repo`
    pub repo: Option<String>,
    /// `--branch`
    pub branch: Option<String>,
    /// `--content-path`
    pub content_path: Option<String>,
}

impl Config {
    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ost").join("config.json"))
    }

    /// Load from the default location; a missing file yields defaults
    pub fn load() -> Result<Self> {
        Self::default_path().map_or_else(|| Ok(Self::default()), |path| Self::load_from(&path))
    }

    /// Load from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("no config file at {}", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("invalid config file {}: {e}", path.display())))
    }

    /// Write to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Apply `OST_REPO`, `OST_BRANCH` and `OST_CONTENT_PATH`
    #[must_use]
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        if let Some(repo) = non_empty("OST_REPO") {
            self.repo = Some(repo);
        }
        if let Some(branch) = non_empty("OST_BRANCH") {
            self.branch = Some(branch);
        }
        if let Some(path) = non_empty("OST_CONTENT_PATH") {
            self.content_path = Some(path);
        }
        self
    }

    /// Apply command-line flags
    #[must_use]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if overrides.repo.is_some() {
            self.repo = overrides.repo;
        }
        if overrides.branch.is_some() {
            self.branch = overrides.branch;
        }
        if overrides.content_path.is_some() {
            self.content_path = overrides.content_path;
        }
        self
    }

    /// Configured repository, if any
    pub fn repo_config(&self) -> Result<Option<RepoConfig>> {
        self.repo
            .as_deref()
            .map(|spec| {
                let mut repo = parse_repo_spec(spec)?;
                repo.host.clone_from(&self.host);
                Ok(repo)
            })
            .transpose()
    }

    /// Branch to commit to
    pub fn branch(&self) -> &str {
        self.branch.as_deref().unwrap_or(DEFAULT_BRANCH)
    }

    /// Directory holding content types, without a trailing slash
    pub fn content_path(&self) -> &str {
        self.content_path
            .as_deref()
            .unwrap_or(DEFAULT_CONTENT_PATH)
            .trim_end_matches('/')
    }

    /// Route prefix of the admin views
    pub fn route_prefix(&self) -> &str {
        self.route_prefix
            .as_deref()
            .unwrap_or(DEFAULT_ROUTE_PREFIX)
            .trim_end_matches('/')
    }

    /// Failure policy for the unsaved-changes flag
    pub const fn failure_policy(&self) -> FailurePolicy {
        if self.preserve_dirty_on_failure {
            FailurePolicy::PreserveDirty
        } else {
            FailurePolicy::ClearDirty
        }
    }
}

/// Read the `origin` remote of the git checkout at `dir`
pub async fn detect_repo_from_git(dir: &Path) -> Result<RepoConfig> {
    let output = Command::new("git")
        .args(["remote", "get-url", "origin"])
        .current_dir(dir)
        .output()
        .await?;

    if !output.status.success() {
        return Err(Error::Config(
            "no repository configured and no git remote 'origin' found; pass --repo owner/name"
                .to_string(),
        ));
    }

    let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
    debug!("detected remote {url}");
    parse_repo_info(&url)
}

/// Everything the content-type view reads from its surroundings
///
/// Passed explicitly into the submission flow instead of living in
/// global state.
#[derive(Debug, Clone)]
pub struct AdminContext {
    /// Known content types
    pub pages: PagesList,
    /// Repository owner commits are addressed to
    pub owner: String,
    /// Repository name
    pub repository_slug: String,
    /// Branch to commit to
    pub branch: String,
    /// Directory holding content types
    pub content_path: String,
    /// Route prefix of the admin views
    pub route_prefix: String,
    /// Authenticated user
    pub session: Session,
    /// What a failed submission does to the unsaved-changes flag
    pub failure_policy: FailurePolicy,
}

impl AdminContext {
    /// Context for `repo` with default branch, paths and policy
    pub fn new(repo: &RepoConfig, session: Session) -> Self {
        Self {
            pages: PagesList::default(),
            owner: repo.owner.clone(),
            repository_slug: repo.repo.clone(),
            branch: DEFAULT_BRANCH.to_string(),
            content_path: DEFAULT_CONTENT_PATH.to_string(),
            route_prefix: DEFAULT_ROUTE_PREFIX.to_string(),
            session,
            failure_policy: FailurePolicy::default(),
        }
    }

    /// Context for `repo` with settings from `config`
    pub fn from_config(config: &Config, repo: &RepoConfig, session: Session) -> Self {
        Self {
            branch: config.branch().to_string(),
            content_path: config.content_path().to_string(),
            route_prefix: config.route_prefix().to_string(),
            failure_policy: config.failure_policy(),
            ..Self::new(repo, session)
        }
    }

    /// Replace the known pages
    #[must_use]
    pub fn with_pages(mut self, pages: PagesList) -> Self {
        self.pages = pages;
        self
    }

    /// Repository owner for commits
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Record a newly created content type
    pub fn add_page(&mut self, name: &str) -> bool {
        self.pages.add(name)
    }

    /// Admin route of a content type
    pub fn content_type_route(&self, slug: &str) -> String {
        format!("{}/{slug}", self.route_prefix.trim_end_matches('/'))
    }
}
