//! Preview command - offline naming check

use crate::cli::style::{check, cross, Stylize};
use crate::cli::workspace::load_config;
use anstream::{eprintln, println};
use ost_admin::config::Overrides;
use ost_admin::content::{build_commit_input, slugify, validate_name};
use ost_admin::error::{Error, Result};
use ost_admin::submit::ContentTypeForm;
use ost_admin::types::PagesList;
use std::path::Path;

/// Run the preview command
///
/// Prints the sidebar label, stored name, slug and commit path for `name`
/// and validates it against `existing`.
pub fn run_preview(
    config: Option<&Path>,
    name: &str,
    existing: &[String],
    content_path: Option<&str>,
) -> Result<()> {
    let config = load_config(
        config,
        Overrides {
            content_path: content_path.map(ToString::to_string),
            ..Overrides::default()
        },
    )?;
    let pages = PagesList::new(existing.iter().map(|p| p.trim()).filter(|p| !p.is_empty()));

    let mut form = ContentTypeForm::new();
    form.on_change(name);
    let label = form.sidebar_label().unwrap_or_default();
    form.on_blur();

    let slug = slugify(form.name());
    let path = build_commit_input("", "", "", config.content_path(), &slug).file_path();

    println!("{:<14}{}", "Sidebar label", label.emphasis());
    println!("{:<14}{}", "Stored name", form.name().accent());
    println!("{:<14}{}", "Slug", slug.accent());
    println!("{:<14}{}", "Commit path", path.muted());

    match validate_name(form.name(), &pages) {
        Ok(()) => {
            println!("{} Name is available", check());
            Ok(())
        }
        Err(invalid) => {
            eprintln!("{} {}", cross(), invalid.reason.error());
            Err(Error::Validation(invalid))
        }
    }
}
