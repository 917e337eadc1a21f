//! Submission states

use std::fmt;

/// Where a submission currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    /// Editable, nothing in flight
    Idle,
    /// Checking the name locally
    Validating,
    /// Asking the remote for the current head
    FetchingBase,
    /// Sending the commit
    Committing,
    /// Committed and navigated away
    Succeeded,
    /// Remote step failed; editable again
    Failed,
}

impl SubmissionState {
    /// Whether a remote call is outstanding
    pub const fn is_in_flight(self) -> bool {
        matches!(self, Self::FetchingBase | Self::Committing)
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Validating => write!(f, "Validating"),
            Self::FetchingBase => write!(f, "Fetching latest revision"),
            Self::Committing => write!(f, "Saving"),
            Self::Succeeded => write!(f, "Saved"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}
