//! Shared setup: config, repository, session, store and known pages

use ost_admin::auth::{fetch_session, get_github_auth};
use ost_admin::config::{detect_repo_from_git, AdminContext, Config, Overrides};
use ost_admin::error::Result;
use ost_admin::store::{ContentStore, GitHubStore};
use ost_admin::types::PagesList;
use std::env;
use std::path::Path;
use tracing::info;

/// A connected admin session
pub struct Workspace {
    /// Context handed to the form
    pub ctx: AdminContext,
    /// Remote store
    pub store: Box<dyn ContentStore>,
}

/// Load config from `path` (or the default location) and apply env + flags
pub fn load_config(path: Option<&Path>, overrides: Overrides) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config
        .with_env(|var| env::var(var).ok())
        .with_overrides(overrides))
}

/// Resolve everything needed to talk to the content repository
pub async fn open_workspace(config_path: Option<&Path>, overrides: Overrides) -> Result<Workspace> {
    let config = load_config(config_path, overrides)?;
    let repo = match config.repo_config()? {
        Some(repo) => repo,
        None => detect_repo_from_git(Path::new(".")).await?,
    };

    let auth = get_github_auth().await?;
    let session = fetch_session(&auth, repo.host.as_deref()).await?;
    let store = GitHubStore::new(&auth.token, repo.clone(), config.branch(), config.content_path())?;

    let pages = store.list_content_types().await?;
    info!(
        "{} has {} content type(s) under {}",
        repo.name_with_owner(),
        pages.len(),
        config.content_path()
    );

    let ctx = AdminContext::from_config(&config, &repo, session).with_pages(PagesList::new(pages));
    Ok(Workspace {
        ctx,
        store: Box::new(store),
    })
}
