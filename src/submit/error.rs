//! Submission errors

use thiserror::Error;

/// Why a lead was not accepted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The receiving side looked at the lead and refused it
    #[error("lead rejected: {0}")]
    Rejected(String),

    /// The receiving side could not be reached
    #[error("submission service unavailable: {0}")]
    Unavailable(String),
}
