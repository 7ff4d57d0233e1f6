//! Stand-in submitter that waits and then accepts every lead

use super::{LeadSubmitter, SubmitError};
use crate::config::TuiConfig;
use crate::state::{FormKind, LeadPayload};
use async_trait::async_trait;
use std::time::Duration;

/// Simulated round-trip time per form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitDelays {
    pub dialog: Duration,
    pub contact: Duration,
    pub newsletter: Duration,
}

impl Default for SubmitDelays {
    fn default() -> Self {
        Self {
            dialog: Duration::from_millis(1000),
            contact: Duration::from_millis(2000),
            newsletter: Duration::from_millis(1000),
        }
    }
}

impl SubmitDelays {
    pub fn from_config(config: &TuiConfig) -> Self {
        let defaults = Self::default();
        let ms = |value: Option<u64>, fallback: Duration| {
            value.map(Duration::from_millis).unwrap_or(fallback)
        };
        Self {
            dialog: ms(config.dialog_submit_delay_ms, defaults.dialog),
            contact: ms(config.contact_submit_delay_ms, defaults.contact),
            newsletter: ms(config.newsletter_submit_delay_ms, defaults.newsletter),
        }
    }

    pub fn for_kind(&self, kind: FormKind) -> Duration {
        match kind {
            FormKind::Booking | FormKind::ServiceConsultation | FormKind::Consultation => {
                self.dialog
            }
            FormKind::Contact => self.contact,
            FormKind::Newsletter => self.newsletter,
        }
    }
}

/// Sleeps for the configured delay, logs the lead and reports success
#[derive(Debug, Clone, Default)]
pub struct SimulatedSubmitter {
    delays: SubmitDelays,
}

impl SimulatedSubmitter {
    pub fn new(delays: SubmitDelays) -> Self {
        Self { delays }
    }
}

#[async_trait]
impl LeadSubmitter for SimulatedSubmitter {
    async fn submit_lead(&self, lead: LeadPayload) -> Result<(), SubmitError> {
        let delay = self.delays.for_kind(lead.kind);
        tracing::info!(
            lead_id = %lead.id,
            kind = ?lead.kind,
            context = lead.context.as_deref().unwrap_or(""),
            delay_ms = delay.as_millis() as u64,
            "simulating lead submission"
        );
        tokio::time::sleep(delay).await;
        tracing::debug!(lead_id = %lead.id, "simulated submission accepted");
        Ok(())
    }
}
