//! UI module for rendering the TUI

mod components;
mod forms;
mod home;
mod layout;
mod services;
mod splash;

use crate::app::App;
use crate::state::{FormKind, Locale, View};
use components::{render_error_dialog, render_success_dialog};
use ratatui::{layout::Alignment, Frame};

/// Paragraph alignment for the reading direction of `locale`
pub fn text_alignment(locale: Locale) -> Alignment {
    if locale.is_rtl() {
        Alignment::Right
    } else {
        Alignment::Left
    }
}

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if let Some(splash_state) = &app.splash_state {
        splash::draw(frame, area, splash_state);
        return;
    }

    let locale = app.state.locale;
    let (sidebar_area, main_area) = layout::create_layout(area, locale);

    layout::draw_sidebar(frame, sidebar_area, app);

    match app.state.current_view {
        View::Splash | View::Home => home::draw(frame, main_area, app),
        View::Services => services::draw(frame, main_area, app),
        View::Contact => forms::draw_contact(frame, main_area, app),
        View::Newsletter => forms::draw_newsletter(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);

    // Overlays, innermost last
    if let Some(kind) = app.state.open_dialog_kind() {
        if let Some(dialog) = app.state.dialog(kind) {
            forms::draw_lead_dialog(frame, dialog, locale);
        }
    }
    if app.newsletter_modal_open() {
        render_success_dialog(frame, FormKind::Newsletter, locale);
    }
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error, locale);
    }
}
