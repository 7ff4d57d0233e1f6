//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering utilities
//! - `wizard_view`: Steps, fields, status line and buttons of any lead form
//! - `lead_dialog`: Modal host for the booking and consultation wizards
//! - `contact_form` / `newsletter_form`: The inline forms

mod contact_form;
mod field_renderer;
mod lead_dialog;
mod newsletter_form;
mod wizard_view;

pub use contact_form::draw_contact;
pub use lead_dialog::draw_lead_dialog;
pub use newsletter_form::draw_newsletter;
