//! New command - interactive content-type form
//!
//! An empty answer means "leave"; with unsaved input the navigation guard
//! asks first.

use crate::cli::create::create_view_route;
use crate::cli::progress::CliProgress;
use crate::cli::style::{arrow, check, Stylize};
use crate::cli::workspace::{open_workspace, Workspace};
use anstream::{eprintln, println};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};
use ost_admin::config::Overrides;
use ost_admin::error::{Error, Result};
use ost_admin::form::{ConfirmPrompt, Navigation, NavigationGuard, Router};
use ost_admin::submit::ContentTypeForm;
use std::path::Path;
use std::sync::Arc;

/// Leave confirmation backed by a terminal prompt
struct TerminalConfirm;

impl ConfirmPrompt for TerminalConfirm {
    fn confirm(&self, message: &str) -> bool {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

fn prompt_error(err: dialoguer::Error) -> Error {
    Error::Io(std::io::Error::other(err.to_string()))
}

/// Run the interactive new command
pub async fn run_new(config: Option<&Path>, overrides: Overrides) -> Result<()> {
    let Workspace { mut ctx, store } = open_workspace(config, overrides).await?;
    let theme = ColorfulTheme::default();
    let progress = CliProgress::new();

    let router = Router::new(create_view_route(&ctx.route_prefix));
    let mut form = ContentTypeForm::new();
    let _guard = NavigationGuard::install(&router, form.dirty_tracker(), Arc::new(TerminalConfirm));

    println!("{}", "Create Content Type".emphasis());
    println!(
        "{}",
        "Use the plural form of the content type name, ex: Docs. Leave empty to quit.".muted()
    );

    loop {
        let answer: String = Input::with_theme(&theme)
            .with_prompt("Content Type Name")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)?;

        if answer.trim().is_empty() {
            match router.navigate(&ctx.route_prefix) {
                Navigation::Completed(_) => return Ok(()),
                Navigation::Blocked => continue,
            }
        }

        form.on_change(&answer);
        if let Some(label) = form.sidebar_label() {
            println!(
                "The content will appear as {} on the sidebar.",
                label.emphasis()
            );
        }
        form.on_blur();

        if let Err(invalid) = form.validate(&ctx) {
            eprintln!("{}", invalid.reason.warn());
            continue;
        }

        let save = Confirm::with_theme(&theme)
            .with_prompt(format!("Save {}?", form.name()))
            .default(true)
            .interact()
            .map_err(prompt_error)?;
        if !save {
            continue;
        }

        match form.submit(&mut ctx, store.as_ref(), &router, &progress).await {
            Ok(outcome) => {
                if let Navigation::Completed(route) = outcome.navigation {
                    println!("{} {} {}", check(), arrow(), route.accent());
                }
                return Ok(());
            }
            // Already reported through the progress callback or inline
            Err(Error::Validation(_) | Error::Transport(_) | Error::RemoteRejection(_)) => {}
            Err(err) => return Err(err),
        }
    }
}
