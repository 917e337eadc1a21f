//! Dry-run planning
//!
//! Computes the commit a submission would make without making it.

use crate::config::AdminContext;
use crate::content::{build_commit_input, pluralize, slugify, validate_name};
use crate::error::Result;
use crate::store::ContentStore;
use crate::types::CommitInput;

/// Validate `name` and build the commit input against the current head
///
/// Reads the remote head but writes nothing; `ctx` is left untouched.
pub async fn plan_submission(
    name: &str,
    ctx: &AdminContext,
    store: &dyn ContentStore,
) -> Result<CommitInput> {
    let normalized = pluralize(name.trim());
    validate_name(&normalized, &ctx.pages)?;

    let base = store.fetch_base_revision().await?;
    Ok(build_commit_input(
        ctx.owner(),
        &base,
        &ctx.repository_slug,
        &ctx.content_path,
        &slugify(&normalized),
    ))
}
