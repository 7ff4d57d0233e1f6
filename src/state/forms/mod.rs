//! Form domain layer
//!
//! Type-safe lead-capture forms: field values, per-step requirements,
//! and the payload snapshot handed to the submitter.

mod field;
mod form_state;
mod payload;
mod validation;

pub use field::{ChoiceOption, FieldValue, FormField};
pub use form_state::{AfterSuccess, Form, FormKind, LeadForm};
pub use payload::LeadPayload;
