//! Create command - headless run of the content-type form

use crate::cli::progress::CliProgress;
use crate::cli::style::{arrow, Stylize};
use crate::cli::workspace::{open_workspace, Workspace};
use anstream::{eprintln, println};
use ost_admin::config::Overrides;
use ost_admin::error::{Error, Result};
use ost_admin::form::{Navigation, Router};
use ost_admin::submit::{plan_submission, ContentTypeForm, ProgressCallback};
use std::path::Path;

/// Route of the "create content type" view
pub fn create_view_route(route_prefix: &str) -> String {
    format!("{}/content-types", route_prefix.trim_end_matches('/'))
}

/// Run the create command
pub async fn run_create(
    config: Option<&Path>,
    overrides: Overrides,
    name: &str,
    dry_run: bool,
) -> Result<()> {
    let Workspace { mut ctx, store } = open_workspace(config, overrides).await?;
    let progress = CliProgress::new();

    if dry_run {
        progress
            .on_message("Dry run - no changes will be made")
            .await;
        let input = plan_submission(name, &ctx, store.as_ref()).await?;
        println!("Would commit to {}:", format!("{}/{}", input.owner, input.repository_slug).accent());
        println!("  {} {}", arrow(), input.file_path());
        println!("  message:  {}", input.headline());
        println!("  based on: {}", input.base_revision_id.muted());
        return Ok(());
    }

    let router = Router::new(create_view_route(&ctx.route_prefix));
    let mut form = ContentTypeForm::new();
    form.on_change(name);
    if let Some(label) = form.sidebar_label() {
        println!(
            "The content will appear as {} on the sidebar.",
            label.emphasis()
        );
    }
    form.on_blur();

    match form.submit(&mut ctx, store.as_ref(), &router, &progress).await {
        Ok(outcome) => {
            if let Navigation::Completed(route) = outcome.navigation {
                println!("  {} {}", arrow(), route.accent());
            }
            Ok(())
        }
        Err(Error::Validation(invalid)) => {
            eprintln!("{}: {}", invalid.field.warn(), invalid.reason.warn());
            Err(Error::Validation(invalid))
        }
        Err(err) => Err(err),
    }
}
