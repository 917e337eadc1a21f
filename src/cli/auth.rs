//! Auth commands - test and explain authentication

use crate::cli::style::{check, Stylize};
use crate::cli::workspace::load_config;
use anstream::println;
use ost_admin::auth::{fetch_session, get_github_auth};
use ost_admin::config::{Config, Overrides};
use ost_admin::error::{Error, Result};
use std::path::Path;

/// Resolve a token and show who it belongs to
pub async fn run_auth_test(config: Option<&Path>) -> Result<()> {
    let config = load_config(config, Overrides::default())?;
    println!("{}", "Testing GitHub authentication...".muted());
    let auth = get_github_auth().await?;
    let session = fetch_session(&auth, config.host.as_deref()).await?;
    println!(
        "{} Authenticated as {} ({})",
        check(),
        session.login.accent(),
        session.name
    );
    println!("  Token source: {:?}", auth.source);
    Ok(())
}

/// Print setup instructions; with `host`, record it in the config file
pub fn run_auth_setup(config: Option<&Path>, host: Option<&str>) -> Result<()> {
    println!("{}", "GitHub Authentication Setup".emphasis());
    println!();
    println!("Option 1: GitHub CLI (recommended)");
    println!("  Install: https://cli.github.com/");
    println!("  Run: {}", "gh auth login".accent());
    println!();
    println!("Option 2: Environment variable");
    println!("  Set GITHUB_TOKEN or GH_TOKEN (needs the repo scope)");
    println!();
    println!("For GitHub Enterprise:");
    println!("  Run: {}", "ost auth setup --host <HOST>".accent());

    let Some(host) = host else {
        return Ok(());
    };
    let path = config
        .map(Path::to_path_buf)
        .or_else(Config::default_path)
        .ok_or_else(|| Error::Config("no config directory available".to_string()))?;

    let mut file = Config::load_from(&path)?;
    file.host = Some(host.trim().to_string());
    file.save_to(&path)?;

    println!();
    println!(
        "{} Saved host {} to {}",
        check(),
        host.trim().accent(),
        path.display().muted()
    );
    Ok(())
}
