//! Content-type naming and commit payloads
//!
//! Pure functions with no I/O: turning what was typed into the form into a
//! sidebar label, a repository path segment and a commit request.

mod commit;
mod pluralize;
mod slug;
mod validate;

pub use commit::{
    build_commit_input, CommitMessage, CommittableBranch, CreateCommitOnBranchInput,
    CreateCommitVariables, FileAddition, FileChanges, KEEP_FILE,
};
pub use pluralize::pluralize;
pub use slug::slugify;
pub use validate::{validate_name, NAME_FIELD};
