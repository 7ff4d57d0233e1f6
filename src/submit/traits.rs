//! Trait abstraction for lead submission to enable mocking in tests

use super::SubmitError;
use crate::state::LeadPayload;
use async_trait::async_trait;

/// Receives validated leads. Called once per accepted submit.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadSubmitter: Send + Sync {
    /// Deliver a lead; `Ok` means it was accepted
    async fn submit_lead(&self, lead: LeadPayload) -> Result<(), SubmitError>;
}
