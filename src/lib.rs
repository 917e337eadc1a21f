//! ost-admin - content types for a git-backed CMS
//!
//! Creates content types (named collections like "Posts" or "Docs") in a
//! GitHub repository by committing through the GraphQL API. The crate holds
//! the form logic an admin view needs: pluralization, name validation,
//! dirty-state tracking, a navigation guard and the submission state machine.

pub mod auth;
pub mod config;
pub mod content;
pub mod error;
pub mod form;
pub mod store;
pub mod submit;
pub mod types;
