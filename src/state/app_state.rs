//! Application state definitions

use super::content::{SERVICES, TESTIMONIALS};
use super::forms::{FormKind, LeadForm};
use super::rotator::TestimonialRotator;
use super::wizard::{LeadDialog, Wizard, WizardEvent};
use super::{Bilingual, Locale};
use crate::config::TuiConfig;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Splash screen with logo animation
    Splash,
    #[default]
    Home,
    Services,
    Contact,
    Newsletter,
}

impl View {
    /// Views reachable from the sidebar, in display order
    pub const NAVIGABLE: [View; 4] = [View::Home, View::Services, View::Contact, View::Newsletter];

    pub fn label(&self) -> Bilingual {
        match self {
            Self::Splash => Bilingual::new("Welcome", "مرحباً"),
            Self::Home => Bilingual::new("Home", "الرئيسية"),
            Self::Services => Bilingual::new("Services", "خدماتنا"),
            Self::Contact => Bilingual::new("Contact", "اتصل بنا"),
            Self::Newsletter => Bilingual::new("Newsletter", "النشرة"),
        }
    }
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    pub current_view: View,
    pub locale: Locale,
    pub booking: LeadDialog,
    pub consultation: LeadDialog,
    pub service_consultation: LeadDialog,
    pub contact: Wizard,
    pub newsletter: Wizard,
    pub rotator: TestimonialRotator,
    /// Highlighted row on the services view
    pub selected_service: usize,
    /// Errors waiting to be shown, oldest first
    pub error_queue: VecDeque<String>,
    /// Slug of the service the consultation form was built for
    consulted_service: &'static str,
    rotation_interval: Duration,
    success_display: Duration,
}

impl AppState {
    pub fn new(config: &TuiConfig, now: Instant) -> Self {
        let success_display = config.success_display();
        let dialog = |form: LeadForm| {
            let mut dialog = LeadDialog::new(form);
            dialog.wizard = dialog.wizard.with_display_window(success_display);
            dialog
        };
        Self {
            current_view: View::default(),
            locale: config.locale(),
            booking: dialog(LeadForm::booking()),
            consultation: dialog(LeadForm::consultation()),
            service_consultation: dialog(LeadForm::service_consultation(
                SERVICES[0].title.get(config.locale()),
            )),
            contact: Wizard::new(LeadForm::contact()).with_display_window(success_display),
            newsletter: Wizard::new(LeadForm::newsletter()).with_display_window(success_display),
            rotator: TestimonialRotator::new(
                TESTIMONIALS.len(),
                config.rotation_interval(),
                now,
            ),
            selected_service: 0,
            error_queue: VecDeque::new(),
            consulted_service: SERVICES[0].slug,
            rotation_interval: config.rotation_interval(),
            success_display,
        }
    }

    /// Restart the carousel as if the home view had just been mounted
    pub fn restart_rotator(&mut self, now: Instant) {
        self.rotator = TestimonialRotator::new(TESTIMONIALS.len(), self.rotation_interval, now);
    }

    pub fn dialog(&self, kind: FormKind) -> Option<&LeadDialog> {
        match kind {
            FormKind::Booking => Some(&self.booking),
            FormKind::Consultation => Some(&self.consultation),
            FormKind::ServiceConsultation => Some(&self.service_consultation),
            FormKind::Contact | FormKind::Newsletter => None,
        }
    }

    pub fn dialog_mut(&mut self, kind: FormKind) -> Option<&mut LeadDialog> {
        match kind {
            FormKind::Booking => Some(&mut self.booking),
            FormKind::Consultation => Some(&mut self.consultation),
            FormKind::ServiceConsultation => Some(&mut self.service_consultation),
            FormKind::Contact | FormKind::Newsletter => None,
        }
    }

    /// The wizard that owns submissions of `kind`
    pub fn wizard(&self, kind: FormKind) -> &Wizard {
        match kind {
            FormKind::Contact => &self.contact,
            FormKind::Newsletter => &self.newsletter,
            FormKind::Booking => &self.booking.wizard,
            FormKind::Consultation => &self.consultation.wizard,
            FormKind::ServiceConsultation => &self.service_consultation.wizard,
        }
    }

    pub fn wizard_mut(&mut self, kind: FormKind) -> &mut Wizard {
        match kind {
            FormKind::Contact => &mut self.contact,
            FormKind::Newsletter => &mut self.newsletter,
            FormKind::Booking => &mut self.booking.wizard,
            FormKind::Consultation => &mut self.consultation.wizard,
            FormKind::ServiceConsultation => &mut self.service_consultation.wizard,
        }
    }

    /// Kind of the dialog currently on screen, if any
    pub fn open_dialog_kind(&self) -> Option<FormKind> {
        [
            FormKind::Booking,
            FormKind::Consultation,
            FormKind::ServiceConsultation,
        ]
        .into_iter()
        .find(|k| self.dialog(*k).is_some_and(LeadDialog::is_open))
    }

    pub fn open_dialog(&mut self, kind: FormKind) {
        if let Some(dialog) = self.dialog_mut(kind) {
            dialog.open();
        }
    }

    /// Open the consultation dialog for a service from the catalog.
    ///
    /// Switching to another service starts a fresh form unless a submission
    /// for the previous one is still pending.
    pub fn open_service_consultation(&mut self, index: usize) {
        let Some(service) = SERVICES.get(index) else {
            return;
        };
        tracing::debug!(service = service.slug, "opening service consultation");
        let title = service.title.get(self.locale);
        let dialog = &mut self.service_consultation;
        if dialog.wizard.status().is_editable() {
            if self.consulted_service == service.slug {
                dialog.wizard.set_context(title);
            } else {
                *dialog = LeadDialog::new(LeadForm::service_consultation(title));
                dialog.wizard = dialog.wizard.clone().with_display_window(self.success_display);
                self.consulted_service = service.slug;
            }
        }
        dialog.open();
    }

    /// Advance every timed transition
    pub fn tick(&mut self, now: Instant) -> Vec<(FormKind, WizardEvent)> {
        if self.current_view == View::Home {
            self.rotator.tick(now);
        }

        let mut events = Vec::new();
        for kind in [
            FormKind::Booking,
            FormKind::Consultation,
            FormKind::ServiceConsultation,
        ] {
            if let Some(event) = self.dialog_mut(kind).and_then(|d| d.tick(now)) {
                events.push((kind, event));
            }
        }
        for kind in [FormKind::Contact, FormKind::Newsletter] {
            if let Some(event) = self.wizard_mut(kind).tick(now) {
                events.push((kind, event));
            }
        }
        events
    }

    pub fn toggle_locale(&mut self) {
        self.locale = self.locale.toggle();
    }

    pub fn select_next_service(&mut self) {
        if self.selected_service + 1 < SERVICES.len() {
            self.selected_service += 1;
        }
    }

    pub fn select_prev_service(&mut self) {
        self.selected_service = self.selected_service.saturating_sub(1);
    }

    /// Queue an error for the error dialog
    pub fn push_error(&mut self, message: String) {
        tracing::warn!(%message, "error queued for display");
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
