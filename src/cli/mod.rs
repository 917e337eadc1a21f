//! CLI commands
//!
//! Command implementations for the `ost` binary.

mod auth;
mod create;
mod list;
mod new;
mod preview;
mod progress;
mod style;
mod workspace;

pub use auth::{run_auth_setup, run_auth_test};
pub use create::run_create;
pub use list::run_list;
pub use new::run_new;
pub use preview::run_preview;
