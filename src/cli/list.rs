//! List command - show existing content types

use crate::cli::style::{bullet, Stylize};
use crate::cli::workspace::{open_workspace, Workspace};
use anstream::println;
use ost_admin::config::Overrides;
use ost_admin::error::Result;
use std::path::Path;

/// Run the list command
pub async fn run_list(config: Option<&Path>, overrides: Overrides) -> Result<()> {
    let Workspace { ctx, .. } = open_workspace(config, overrides).await?;

    if ctx.pages.is_empty() {
        println!("{}", "No content types yet".muted());
        println!("{}", "Create one with: ost create <NAME>".muted());
        return Ok(());
    }

    println!(
        "{} {}",
        "Content types in".emphasis(),
        format!("{}/{}", ctx.owner(), ctx.repository_slug).accent()
    );
    for page in ctx.pages.as_slice() {
        println!(
            "  {} {} {}",
            bullet(),
            page.accent(),
            ctx.content_type_route(page).muted()
        );
    }
    Ok(())
}
