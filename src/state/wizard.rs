//! Lead-capture wizard: step gating and submission lifecycle

use super::forms::{AfterSuccess, Form, FormField, FormKind, LeadForm, LeadPayload};
use super::{Bilingual, Locale};
use crate::submit::SubmitError;
use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// How long the confirmation stays up before the form resets
pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(3);

/// Which subset of fields is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    One,
    Two,
}

impl WizardStep {
    pub fn number(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

/// Where a submission is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting {
        lead_id: Uuid,
    },
    Submitted {
        reference: Option<String>,
        since: Instant,
    },
    Failed {
        message: String,
    },
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted { .. })
    }

    /// Fields may be edited and a new submit attempted
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Idle | Self::Failed { .. })
    }
}

/// Buttons shown under the fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardButton {
    Next,
    Previous,
    Submit,
    Cancel,
}

impl WizardButton {
    pub fn label(&self, kind: FormKind) -> Bilingual {
        match (self, kind) {
            (Self::Next, _) => Bilingual::new("Next Step", "التالي"),
            (Self::Previous, _) => Bilingual::new("Previous", "السابق"),
            (Self::Cancel, _) => Bilingual::new("Cancel", "إلغاء"),
            (Self::Submit, FormKind::Booking) => {
                Bilingual::new("Confirm Appointment", "تأكيد حجز الموعد")
            }
            (Self::Submit, FormKind::ServiceConsultation) => {
                Bilingual::new("Submit Request", "إرسال الطلب")
            }
            (Self::Submit, FormKind::Consultation) => {
                Bilingual::new("Schedule Consultation", "جدولة الاستشارة")
            }
            (Self::Submit, FormKind::Contact) => Bilingual::new("Send Message", "إرسال الرسالة"),
            (Self::Submit, FormKind::Newsletter) => Bilingual::new("Subscribe", "اشترك"),
        }
    }
}

/// Emitted by [`Wizard::tick`] when the confirmation window has elapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardEvent {
    /// Fields cleared, form shown again
    Reset,
    /// Fields cleared and the host dialog should close
    ResetAndClose,
}

/// Reference shown on confirmation: the last six digits of the epoch-millisecond clock
pub fn reference_number(timestamp_millis: i64) -> String {
    let digits = timestamp_millis.to_string();
    let start = digits.len().saturating_sub(6);
    digits[start..].to_string()
}

/// A lead form plus its step and submission state
#[derive(Debug, Clone)]
pub struct Wizard {
    form: LeadForm,
    step: WizardStep,
    status: SubmissionStatus,
    active_field_index: usize,
    /// Which button is selected when on the buttons row
    pub selected_button: usize,
    display_window: Duration,
}

impl Wizard {
    pub fn new(form: LeadForm) -> Self {
        Self {
            form,
            step: WizardStep::One,
            status: SubmissionStatus::Idle,
            active_field_index: 0,
            selected_button: 0,
            display_window: SUCCESS_DISPLAY,
        }
    }

    pub fn with_display_window(mut self, window: Duration) -> Self {
        self.display_window = window;
        self
    }

    pub fn form(&self) -> &LeadForm {
        &self.form
    }

    /// Mutable access for programmatic edits; ignored while a submission is in flight
    #[cfg(test)]
    pub fn form_mut(&mut self) -> Option<&mut LeadForm> {
        if self.status.is_editable() {
            Some(&mut self.form)
        } else {
            None
        }
    }

    pub fn kind(&self) -> FormKind {
        self.form.kind()
    }

    /// Relabel what the form is about; values are kept
    pub fn set_context(&mut self, context: impl Into<String>) {
        if self.status.is_editable() {
            self.form.set_context(context);
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    fn is_last_step(&self) -> bool {
        self.step.number() >= self.kind().step_count()
    }

    /// "Next" is enabled: not on the last step and every required field is filled
    pub fn can_advance(&self) -> bool {
        !self.is_last_step() && self.status.is_editable() && self.form.is_step_valid(self.step)
    }

    /// "Submit" is enabled: on the last step, valid, nothing in flight
    pub fn can_submit(&self) -> bool {
        self.is_last_step() && self.status.is_editable() && self.form.is_step_valid(self.step)
    }

    /// Move to step two if the current step is valid
    pub fn next_step(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.step = WizardStep::Two;
        self.active_field_index = 0;
        self.selected_button = 0;
        true
    }

    /// Return to step one; entered values are kept
    pub fn prev_step(&mut self) -> bool {
        if self.step == WizardStep::One || !self.status.is_editable() {
            return false;
        }
        self.step = WizardStep::One;
        self.active_field_index = 0;
        self.selected_button = 0;
        true
    }

    /// Buttons for the current step, primary action first
    pub fn buttons(&self) -> Vec<WizardButton> {
        let kind = self.kind();
        if !kind.is_dialog() {
            return vec![WizardButton::Submit];
        }
        match (kind.step_count(), self.step) {
            (2, WizardStep::One) => vec![WizardButton::Next, WizardButton::Cancel],
            (2, WizardStep::Two) => vec![WizardButton::Submit, WizardButton::Previous],
            _ => vec![WizardButton::Submit, WizardButton::Cancel],
        }
    }

    pub fn is_button_enabled(&self, button: WizardButton) -> bool {
        match button {
            WizardButton::Next => self.can_advance(),
            WizardButton::Submit => self.can_submit(),
            WizardButton::Previous => self.status.is_editable(),
            WizardButton::Cancel => true,
        }
    }

    /// The selected button when the buttons row is active and the button is enabled
    pub fn pressed_button(&self) -> Option<WizardButton> {
        if !self.is_buttons_row_active() {
            return None;
        }
        self.buttons()
            .get(self.selected_button)
            .copied()
            .filter(|b| self.is_button_enabled(*b))
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == self.field_count() - 1
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        let count = self.buttons().len();
        self.selected_button = (self.selected_button + 1) % count;
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        let count = self.buttons().len();
        if self.selected_button == 0 {
            self.selected_button = count - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// Start a submission: Idle/Failed to Submitting, returning the payload to send
    pub fn begin_submit(&mut self, locale: Locale, at: DateTime<Utc>) -> Option<LeadPayload> {
        if !self.can_submit() {
            return None;
        }
        let payload = self.form.to_payload(locale, at);
        self.status = SubmissionStatus::Submitting {
            lead_id: payload.id,
        };
        Some(payload)
    }

    /// Apply the submitter's answer for `lead_id`; answers for other leads are ignored
    pub fn complete_submission(
        &mut self,
        lead_id: Uuid,
        result: Result<(), SubmitError>,
        now: Instant,
        at: DateTime<Utc>,
    ) -> bool {
        match &self.status {
            SubmissionStatus::Submitting { lead_id: pending } if *pending == lead_id => {}
            _ => {
                tracing::debug!(%lead_id, "ignoring stale submission result");
                return false;
            }
        }

        match result {
            Ok(()) => {
                let kind = self.kind();
                let reference = kind
                    .issues_reference()
                    .then(|| reference_number(at.timestamp_millis()));
                if kind.after_success() == AfterSuccess::Acknowledge {
                    self.form.reset();
                }
                self.status = SubmissionStatus::Submitted {
                    reference,
                    since: now,
                };
            }
            Err(err) => {
                tracing::warn!(%lead_id, error = %err, "lead submission failed");
                self.status = SubmissionStatus::Failed {
                    message: err.to_string(),
                };
            }
        }
        true
    }

    /// Advance timed transitions; resets once the confirmation window has passed
    pub fn tick(&mut self, now: Instant) -> Option<WizardEvent> {
        let SubmissionStatus::Submitted { since, .. } = &self.status else {
            return None;
        };
        let event = match self.kind().after_success() {
            AfterSuccess::ResetAndClose => WizardEvent::ResetAndClose,
            AfterSuccess::Reset => WizardEvent::Reset,
            AfterSuccess::Acknowledge => return None,
        };
        if now.saturating_duration_since(*since) < self.display_window {
            return None;
        }
        self.reset();
        Some(event)
    }

    /// Dismiss a confirmation that waits for the user
    pub fn acknowledge(&mut self) {
        if self.status.is_submitted() {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Clear fields, return to step one and idle
    pub fn reset(&mut self) {
        self.form.reset();
        self.step = WizardStep::One;
        self.status = SubmissionStatus::Idle;
        self.active_field_index = 0;
        self.selected_button = 0;
    }
}

impl Form for Wizard {
    fn field_count(&self) -> usize {
        // fields on this step, plus the buttons row
        self.form.fields_on(self.step).count() + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        if !self.status.is_editable() {
            return None;
        }
        self.form.nth_on_mut(self.step, self.active_field_index)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.form.fields_on(self.step).nth(index)
    }
}

/// A wizard hosted in a modal dialog whose visibility the host controls
#[derive(Debug, Clone)]
pub struct LeadDialog {
    pub wizard: Wizard,
    is_open: bool,
}

impl LeadDialog {
    pub fn new(form: LeadForm) -> Self {
        Self {
            wizard: Wizard::new(form),
            is_open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Close without touching entered values or any pending submission
    pub fn cancel(&mut self) {
        self.is_open = false;
    }

    /// Forward timed transitions; closes the dialog after the confirmation window
    pub fn tick(&mut self, now: Instant) -> Option<WizardEvent> {
        let event = self.wizard.tick(now);
        if event == Some(WizardEvent::ResetAndClose) {
            self.is_open = false;
        }
        event
    }
}
