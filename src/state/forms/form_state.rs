//! Lead form definitions and the shared form navigation trait

use super::field::{FormField, Requirement};
use super::payload::LeadPayload;
use crate::state::content::{
    CONSULTATION_TYPES, CONTACT_METHODS, PREFERRED_TIMES, SERVICE_TYPES, URGENCY_LEVELS,
};
use crate::state::{Bilingual, Locale, WizardStep};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Which lead-capture form an instance is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormKind {
    Booking,
    ServiceConsultation,
    Consultation,
    Contact,
    Newsletter,
}

/// What happens once a submission has succeeded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterSuccess {
    /// Show confirmation, then reset fields and close the dialog
    ResetAndClose,
    /// Show confirmation, then reset fields in place
    Reset,
    /// Clear fields immediately; the confirmation stays until dismissed
    Acknowledge,
}

impl FormKind {
    pub fn step_count(&self) -> u8 {
        match self {
            Self::Booking | Self::ServiceConsultation => 2,
            Self::Consultation | Self::Contact | Self::Newsletter => 1,
        }
    }

    /// Hosted in a modal dialog rather than inline on a view
    pub fn is_dialog(&self) -> bool {
        matches!(
            self,
            Self::Booking | Self::ServiceConsultation | Self::Consultation
        )
    }

    /// Confirmation shows a reference number
    pub fn issues_reference(&self) -> bool {
        self.is_dialog()
    }

    pub fn after_success(&self) -> AfterSuccess {
        match self {
            Self::Booking | Self::ServiceConsultation | Self::Consultation => {
                AfterSuccess::ResetAndClose
            }
            Self::Contact => AfterSuccess::Reset,
            Self::Newsletter => AfterSuccess::Acknowledge,
        }
    }

    pub fn title(&self) -> Bilingual {
        match self {
            Self::Booking => Bilingual::new("Book Consultation Appointment", "حجز موعد استشارة"),
            Self::ServiceConsultation => {
                Bilingual::new("Legal Consultation Request", "طلب استشارة قانونية")
            }
            Self::Consultation => Bilingual::new("Free Legal Consultation", "استشارة قانونية مجانية"),
            Self::Contact => Bilingual::new("Send Us a Message", "أرسل لنا رسالة"),
            Self::Newsletter => Bilingual::new("Legal Newsletter", "النشرة القانونية"),
        }
    }

    pub fn success_title(&self) -> Bilingual {
        match self {
            Self::Booking => Bilingual::new("Appointment Booked Successfully!", "تم حجز الموعد بنجاح!"),
            Self::ServiceConsultation | Self::Consultation => {
                Bilingual::new("Request Submitted Successfully!", "تم إرسال طلبكم بنجاح!")
            }
            Self::Contact => Bilingual::new("Message Sent Successfully!", "تم إرسال رسالتكم بنجاح!"),
            Self::Newsletter => Bilingual::new("Subscribed Successfully!", "تم الاشتراك بنجاح!"),
        }
    }

    pub fn success_message(&self) -> Bilingual {
        match self {
            Self::Booking => Bilingual::new(
                "We will contact you soon to confirm the appointment details. Thank you for trusting our services.",
                "سنتواصل معكم قريباً لتأكيد تفاصيل الموعد. شكراً لثقتكم في خدماتنا.",
            ),
            Self::ServiceConsultation | Self::Consultation => Bilingual::new(
                "We will contact you within 24 hours to schedule your consultation. Thank you for trusting our services.",
                "سنتواصل معكم خلال 24 ساعة لتحديد موعد الاستشارة. شكراً لثقتكم في خدماتنا.",
            ),
            Self::Contact => Bilingual::new(
                "Thank you for reaching out. We will get back to you as soon as possible.",
                "شكراً لتواصلكم معنا. سنرد عليكم في أقرب وقت ممكن.",
            ),
            Self::Newsletter => Bilingual::new(
                "Thank you for subscribing to our legal newsletter. You'll receive the latest legal articles and tips directly in your email.",
                "شكراً لاشتراككم في نشرتنا القانونية. ستصلكم أحدث المقالات والنصائح القانونية مباشرة إلى بريدكم.",
            ),
        }
    }

    /// Label for the reference number line
    pub fn reference_label(&self) -> Bilingual {
        match self {
            Self::Booking => Bilingual::new("Booking ID: ", "رقم الحجز: "),
            _ => Bilingual::new("Reference ID: ", "رقم المرجع: "),
        }
    }
}

mod labels {
    use crate::state::Bilingual;

    pub const NAME: Bilingual = Bilingual::new("Full Name", "الاسم الكامل");
    pub const EMAIL: Bilingual = Bilingual::new("Email Address", "البريد الإلكتروني");
    pub const PHONE: Bilingual = Bilingual::new("Phone Number", "رقم الهاتف");
    pub const AGREED: Bilingual = Bilingual::new(
        "I agree to the terms of service and privacy policy",
        "أوافق على شروط الخدمة وسياسة الخصوصية",
    );
}

/// A lead-capture form: an ordered set of fields plus optional display context
#[derive(Debug, Clone)]
pub struct LeadForm {
    kind: FormKind,
    /// e.g. the service a consultation is about; echoed, never validated
    context: Option<String>,
    fields: Vec<FormField>,
}

impl LeadForm {
    fn with_fields(kind: FormKind, fields: Vec<FormField>) -> Self {
        Self {
            kind,
            context: None,
            fields,
        }
    }

    /// Two-step appointment booking
    pub fn booking() -> Self {
        use Requirement::*;
        let two = WizardStep::Two;
        Self::with_fields(
            FormKind::Booking,
            vec![
                FormField::text("name", labels::NAME, Required),
                FormField::text("email", labels::EMAIL, Required),
                FormField::text("phone", labels::PHONE, Required),
                FormField::text(
                    "preferredDate",
                    Bilingual::new("Preferred Date (YYYY-MM-DD)", "التاريخ المفضل"),
                    Required,
                ),
                FormField::choice(
                    "preferredTime",
                    Bilingual::new("Preferred Time", "الوقت المفضل"),
                    PREFERRED_TIMES,
                    Optional,
                ),
                FormField::choice(
                    "serviceType",
                    Bilingual::new("Service Type", "نوع الخدمة"),
                    SERVICE_TYPES,
                    Optional,
                )
                .on_step(two),
                FormField::choice(
                    "consultationType",
                    Bilingual::new("Consultation Type", "نوع الاستشارة"),
                    CONSULTATION_TYPES,
                    Optional,
                )
                .on_step(two),
                FormField::multiline(
                    "message",
                    Bilingual::new("Message or Notes", "رسالة أو ملاحظات"),
                    Optional,
                )
                .on_step(two),
                FormField::flag("agreedToTerms", labels::AGREED, Required).on_step(two),
            ],
        )
    }

    /// Two-step consultation request about a specific service
    pub fn service_consultation(service_name: impl Into<String>) -> Self {
        use Requirement::*;
        let two = WizardStep::Two;
        let mut form = Self::with_fields(
            FormKind::ServiceConsultation,
            vec![
                FormField::text("name", labels::NAME, Required),
                FormField::text("email", labels::EMAIL, Required),
                FormField::text("phone", labels::PHONE, Required),
                FormField::choice(
                    "preferredContact",
                    Bilingual::new("Preferred Contact Method", "طريقة التواصل المفضلة"),
                    CONTACT_METHODS,
                    Optional,
                ),
                FormField::choice(
                    "urgency",
                    Bilingual::new("Urgency Level", "مستوى الأولوية"),
                    URGENCY_LEVELS,
                    Optional,
                ),
                FormField::multiline(
                    "caseDescription",
                    Bilingual::new("Case Description", "وصف القضية"),
                    Required,
                )
                .on_step(two),
                FormField::flag(
                    "hasDocuments",
                    Bilingual::new(
                        "I have documents related to the case",
                        "لدي مستندات متعلقة بالقضية",
                    ),
                    Optional,
                )
                .on_step(two),
                FormField::flag("agreedToTerms", labels::AGREED, Required).on_step(two),
            ],
        );
        form.context = Some(service_name.into());
        form
    }

    /// Single-step quick consultation
    pub fn consultation() -> Self {
        use Requirement::*;
        Self::with_fields(
            FormKind::Consultation,
            vec![
                FormField::text("name", labels::NAME, Required),
                FormField::text("email", labels::EMAIL, Required),
                FormField::text("phone", labels::PHONE, Required),
                FormField::text(
                    "legalIssue",
                    Bilingual::new("Legal Issue Type", "نوع القضية القانونية"),
                    Optional,
                ),
                FormField::multiline(
                    "message",
                    Bilingual::new("Describe Your Legal Matter", "اوصف مسألتك القانونية"),
                    Optional,
                ),
            ],
        )
    }

    /// Inline contact form; every field is required
    pub fn contact() -> Self {
        use Requirement::*;
        Self::with_fields(
            FormKind::Contact,
            vec![
                FormField::text("name", labels::NAME, Required),
                FormField::text("phone", labels::PHONE, Required),
                FormField::text("email", labels::EMAIL, Required),
                FormField::text("subject", Bilingual::new("Subject", "الموضوع"), Required),
                FormField::multiline("message", Bilingual::new("Message", "الرسالة"), Required),
            ],
        )
    }

    /// Newsletter signup: a single pattern-checked email
    pub fn newsletter() -> Self {
        Self::with_fields(
            FormKind::Newsletter,
            vec![FormField::text(
                "email",
                Bilingual::new("Email Address", "البريد الإلكتروني"),
                Requirement::Email,
            )],
        )
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn set_context(&mut self, context: impl Into<String>) {
        self.context = Some(context.into());
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Fields shown on a step, in display order
    pub fn fields_on(&self, step: WizardStep) -> impl Iterator<Item = &FormField> {
        self.fields.iter().filter(move |f| f.step == step)
    }

    pub(crate) fn nth_on_mut(&mut self, step: WizardStep, index: usize) -> Option<&mut FormField> {
        self.fields.iter_mut().filter(|f| f.step == step).nth(index)
    }

    /// Every field on the step satisfies its requirement
    pub fn is_step_valid(&self, step: WizardStep) -> bool {
        self.fields_on(step).all(FormField::is_satisfied)
    }

    /// Clear every value back to empty/false/unselected
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
    }

    /// Snapshot the form for submission
    pub fn to_payload(&self, locale: Locale, created_at: DateTime<Utc>) -> LeadPayload {
        let fields: BTreeMap<String, serde_json::Value> = self
            .fields
            .iter()
            .map(|f| (f.name.to_string(), f.to_json()))
            .collect();
        LeadPayload {
            id: Uuid::new_v4(),
            kind: self.kind,
            context: self.context.clone(),
            locale,
            created_at,
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::FieldValue;
    use chrono::TimeZone;

    fn fill(form: &mut LeadForm, name: &str, value: &str) {
        form.field_mut(name).unwrap().set_text(value);
    }

    mod form_kind {
        use super::*;

        #[test]
        fn test_step_counts() {
            assert_eq!(FormKind::Booking.step_count(), 2);
            assert_eq!(FormKind::ServiceConsultation.step_count(), 2);
            assert_eq!(FormKind::Consultation.step_count(), 1);
            assert_eq!(FormKind::Contact.step_count(), 1);
            assert_eq!(FormKind::Newsletter.step_count(), 1);
        }

        #[test]
        fn test_only_dialogs_issue_references() {
            assert!(FormKind::Booking.issues_reference());
            assert!(FormKind::Consultation.issues_reference());
            assert!(!FormKind::Contact.issues_reference());
            assert!(!FormKind::Newsletter.issues_reference());
        }

        #[test]
        fn test_after_success_behaviour() {
            assert_eq!(
                FormKind::Booking.after_success(),
                AfterSuccess::ResetAndClose
            );
            assert_eq!(FormKind::Contact.after_success(), AfterSuccess::Reset);
            assert_eq!(
                FormKind::Newsletter.after_success(),
                AfterSuccess::Acknowledge
            );
        }

        #[test]
        fn test_serializes_kebab_case() {
            let json = serde_json::to_string(&FormKind::ServiceConsultation).unwrap();
            assert_eq!(json, "\"service-consultation\"");
        }
    }

    mod booking {
        use super::*;

        #[test]
        fn test_step_one_requires_date() {
            let mut form = LeadForm::booking();
            fill(&mut form, "name", "A");
            fill(&mut form, "email", "not-an-email");
            fill(&mut form, "phone", "123");
            assert!(!form.is_step_valid(WizardStep::One));
            fill(&mut form, "preferredDate", "2025-01-05");
            assert!(form.is_step_valid(WizardStep::One));
        }

        #[test]
        fn test_step_two_requires_only_consent() {
            let mut form = LeadForm::booking();
            assert!(!form.is_step_valid(WizardStep::Two));
            form.field_mut("agreedToTerms").unwrap().set_flag(true);
            assert!(form.is_step_valid(WizardStep::Two));
        }

        #[test]
        fn test_fields_split_across_steps() {
            let form = LeadForm::booking();
            let one: Vec<_> = form.fields_on(WizardStep::One).map(|f| f.name).collect();
            let two: Vec<_> = form.fields_on(WizardStep::Two).map(|f| f.name).collect();
            assert_eq!(
                one,
                vec!["name", "email", "phone", "preferredDate", "preferredTime"]
            );
            assert_eq!(
                two,
                vec!["serviceType", "consultationType", "message", "agreedToTerms"]
            );
        }
    }

    mod service_consultation {
        use super::*;

        #[test]
        fn test_context_is_service_name() {
            let form = LeadForm::service_consultation("Family Law");
            assert_eq!(form.context(), Some("Family Law"));
        }

        #[test]
        fn test_step_two_requires_description_and_consent() {
            let mut form = LeadForm::service_consultation("Family Law");
            form.field_mut("agreedToTerms").unwrap().set_flag(true);
            assert!(!form.is_step_valid(WizardStep::Two));
            fill(&mut form, "caseDescription", "Custody question");
            assert!(form.is_step_valid(WizardStep::Two));
        }

        #[test]
        fn test_step_one_is_name_email_phone() {
            let mut form = LeadForm::service_consultation("Real Estate");
            fill(&mut form, "name", "A");
            fill(&mut form, "email", "b");
            assert!(!form.is_step_valid(WizardStep::One));
            fill(&mut form, "phone", "1");
            assert!(form.is_step_valid(WizardStep::One));
        }
    }

    mod single_step {
        use super::*;

        #[test]
        fn test_consultation_optional_fields() {
            let mut form = LeadForm::consultation();
            fill(&mut form, "name", "A");
            fill(&mut form, "email", "b");
            fill(&mut form, "phone", "1");
            assert!(form.is_step_valid(WizardStep::One));
            assert_eq!(form.fields_on(WizardStep::Two).count(), 0);
        }

        #[test]
        fn test_contact_requires_every_field() {
            let mut form = LeadForm::contact();
            for name in ["name", "phone", "email", "subject"] {
                fill(&mut form, name, "x");
            }
            assert!(!form.is_step_valid(WizardStep::One));
            fill(&mut form, "message", "hello");
            assert!(form.is_step_valid(WizardStep::One));
        }

        #[test]
        fn test_newsletter_checks_pattern() {
            let mut form = LeadForm::newsletter();
            fill(&mut form, "email", "user@example");
            assert!(!form.is_step_valid(WizardStep::One));
            fill(&mut form, "email", "user@example.com");
            assert!(form.is_step_valid(WizardStep::One));
        }
    }

    #[test]
    fn test_reset_clears_all_values() {
        let mut form = LeadForm::booking();
        fill(&mut form, "name", "Sara");
        form.field_mut("agreedToTerms").unwrap().set_flag(true);
        form.field_mut("preferredTime").unwrap().select("10:00");
        form.reset();
        for field in form.fields() {
            match &field.value {
                FieldValue::Text(s) => assert!(s.is_empty(), "{}", field.name),
                FieldValue::Flag(b) => assert!(!b, "{}", field.name),
                FieldValue::Choice { selected, .. } => assert!(selected.is_none()),
            }
        }
    }

    #[test]
    fn test_payload_snapshot() {
        let mut form = LeadForm::service_consultation("Business Law");
        fill(&mut form, "name", "Sara");
        form.field_mut("urgency").unwrap().select("high");
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();

        let payload = form.to_payload(Locale::Ar, at);

        pretty_assertions::assert_eq!(payload.kind, FormKind::ServiceConsultation);
        pretty_assertions::assert_eq!(payload.context.as_deref(), Some("Business Law"));
        pretty_assertions::assert_eq!(payload.locale, Locale::Ar);
        pretty_assertions::assert_eq!(payload.created_at, at);
        pretty_assertions::assert_eq!(payload.fields["name"], serde_json::json!("Sara"));
        pretty_assertions::assert_eq!(payload.fields["urgency"], serde_json::json!("high"));
        pretty_assertions::assert_eq!(payload.fields["hasDocuments"], serde_json::json!(false));
        pretty_assertions::assert_eq!(payload.fields.len(), form.fields().len());
    }
}
