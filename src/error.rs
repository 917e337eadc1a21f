//! Error types for ost-admin

use std::fmt;
use thiserror::Error;

/// A field-level validation failure, shown inline next to the offending input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Form field the failure belongs to
    pub field: &'static str,
    /// Human-readable reason
    pub reason: String,
}

impl ValidationError {
    /// Create a validation error for a field
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

impl std::error::Error for ValidationError {}

/// Errors that can occur in ost-admin
#[derive(Error, Debug)]
pub enum Error {
    /// Form input failed validation; nothing was sent
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Network failure or remote store unavailable
    #[error("transport error: {0}")]
    Transport(String),

    /// Remote store refused the operation (e.g. stale base revision)
    #[error("remote rejected the commit: {0}")]
    RemoteRejection(String),

    /// Submit was requested while the control is disabled
    #[error("submit is disabled: no unsaved changes or a submission is in flight")]
    SubmitDisabled,

    /// Authentication error
    #[error("authentication error: {0}")]
    Auth(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Parse error
    #[error("parse error: {0}")]
    Parse(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Message shown to the person filling the form
    ///
    /// Transport failures and remote rejections share one generic message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(v) => v.reason.clone(),
            Self::Transport(_) | Self::RemoteRejection(_) => {
                "Something went wrong while saving. Please try again.".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        match &err {
            octocrab::Error::GitHub { source, .. } => {
                let status = source.status_code.as_u16();
                if matches!(status, 409 | 422) {
                    Self::RemoteRejection(source.message.clone())
                } else {
                    Self::Transport(format!("GitHub returned {status}: {}", source.message))
                }
            }
            _ => Self::Transport(err.to_string()),
        }
    }
}

/// Result type alias for ost-admin
pub type Result<T> = std::result::Result<T, Error>;
