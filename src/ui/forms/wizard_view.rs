//! Wizard rendering shared by the dialogs and the inline forms

use super::field_renderer::{draw_field, field_height};
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{AfterSuccess, Bilingual, Form, Locale, SubmissionStatus, Wizard, WizardButton};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::text_alignment;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

const STEP: Bilingual = Bilingual::new("Step", "الخطوة");
const OF: Bilingual = Bilingual::new("of", "من");
const SERVICE: Bilingual = Bilingual::new("Service: ", "الخدمة: ");
const SUBMITTING: Bilingual = Bilingual::new("Submitting...", "جاري الإرسال...");
const FAILED: Bilingual = Bilingual::new("Submission failed: ", "تعذر الإرسال: ");
const RETRY: Bilingual = Bilingual::new(" to try again", " للمحاولة مرة أخرى");
const NAV_HINT: Bilingual = Bilingual::new("Tab: next field  ", "Tab: الحقل التالي  ");
const SUBMIT_HINT: Bilingual = Bilingual::new(": submit", ": إرسال");
const COPY_HINT: Bilingual = Bilingual::new("y: copy reference  Esc: close", "y: نسخ الرقم  Esc: إغلاق");

/// Width given to each button on the buttons row
const BUTTON_WIDTH: u16 = 26;

/// Height of the success panel that replaces the fields
const SUCCESS_HEIGHT: u16 = 10;

/// Rows needed to draw `wizard` at its current step
pub fn wizard_height(wizard: &Wizard) -> u16 {
    if shows_success_panel(wizard) {
        return SUCCESS_HEIGHT;
    }
    let fields: u16 = wizard
        .form()
        .fields_on(wizard.step())
        .map(field_height)
        .sum();
    header_height(wizard) + fields + 1 + BUTTON_HEIGHT
}

fn header_height(wizard: &Wizard) -> u16 {
    let kind = wizard.kind();
    if kind.step_count() > 1 || wizard.form().context().is_some() {
        1
    } else {
        0
    }
}

/// The fields give way to a confirmation until the wizard resets
fn shows_success_panel(wizard: &Wizard) -> bool {
    wizard.status().is_submitted() && wizard.kind().after_success() != AfterSuccess::Acknowledge
}

/// Draw a wizard: step header, the current step's fields, status line and buttons
pub fn draw_wizard(frame: &mut Frame, area: Rect, wizard: &Wizard, locale: Locale) {
    if shows_success_panel(wizard) {
        draw_success_panel(frame, area, wizard, locale);
        return;
    }

    let fields: Vec<_> = wizard.form().fields_on(wizard.step()).collect();

    let mut constraints = vec![Constraint::Length(header_height(wizard))];
    constraints.extend(fields.iter().map(|f| Constraint::Length(field_height(f))));
    constraints.push(Constraint::Length(1)); // Status line
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    draw_header(frame, chunks[0], wizard, locale);

    for (idx, field) in fields.iter().enumerate() {
        let is_active = wizard.active_field() == idx;
        draw_field(frame, chunks[idx + 1], field, is_active, locale);
    }

    draw_status_line(frame, chunks[fields.len() + 1], wizard, locale);
    draw_buttons(frame, chunks[fields.len() + 2], wizard, locale);
}

fn draw_header(frame: &mut Frame, area: Rect, wizard: &Wizard, locale: Locale) {
    if area.height == 0 {
        return;
    }
    let mut spans = Vec::new();
    let kind = wizard.kind();
    if kind.step_count() > 1 {
        spans.push(Span::styled(
            format!(
                "{} {} {} {}",
                STEP.get(locale),
                wizard.step().number(),
                OF.get(locale),
                kind.step_count()
            ),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
    }
    if let Some(context) = wizard.form().context() {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            SERVICE.get(locale),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::styled(
            context.to_string(),
            Style::default().fg(Color::Yellow),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(text_alignment(locale)),
        area,
    );
}

fn draw_status_line(frame: &mut Frame, area: Rect, wizard: &Wizard, locale: Locale) {
    let key_style = Style::default().fg(Color::Cyan);
    let line = match wizard.status() {
        SubmissionStatus::Submitting { .. } => Line::from(Span::styled(
            SUBMITTING.get(locale),
            Style::default().fg(Color::Yellow),
        )),
        SubmissionStatus::Failed { message } => Line::from(vec![
            Span::styled(
                format!("{}{message}. ", FAILED.get(locale)),
                Style::default().fg(Color::Red),
            ),
            Span::styled(SUBMIT_SHORTCUT, key_style),
            Span::styled(RETRY.get(locale), Style::default().fg(Color::Red)),
        ]),
        SubmissionStatus::Idle | SubmissionStatus::Submitted { .. } => Line::from(vec![
            Span::styled(NAV_HINT.get(locale), Style::default().fg(Color::DarkGray)),
            Span::styled(SUBMIT_SHORTCUT, key_style),
            Span::styled(SUBMIT_HINT.get(locale), Style::default().fg(Color::DarkGray)),
        ]),
    };
    frame.render_widget(
        Paragraph::new(line).alignment(text_alignment(locale)),
        area,
    );
}

fn draw_buttons(frame: &mut Frame, area: Rect, wizard: &Wizard, locale: Locale) {
    let buttons = wizard.buttons();
    let mut constraints: Vec<Constraint> = buttons
        .iter()
        .map(|_| Constraint::Length(BUTTON_WIDTH))
        .collect();
    // buttons hug the side the text starts from
    if locale.is_rtl() {
        constraints.insert(0, Constraint::Min(0));
    } else {
        constraints.push(Constraint::Min(0));
    }
    let offset = usize::from(locale.is_rtl());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let on_buttons = wizard.is_buttons_row_active();
    for (idx, button) in buttons.iter().enumerate() {
        let label = if *button == WizardButton::Submit && wizard.status().is_submitting() {
            SUBMITTING.get(locale)
        } else {
            button.label(wizard.kind()).get(locale)
        };
        let is_selected = on_buttons && wizard.selected_button == idx;
        render_button(
            frame,
            chunks[idx + offset],
            label,
            is_selected,
            wizard.is_button_enabled(*button),
        );
    }
}

fn draw_success_panel(frame: &mut Frame, area: Rect, wizard: &Wizard, locale: Locale) {
    let kind = wizard.kind();
    let mut lines = vec![
        Line::from(Span::styled(
            format!("✓ {}", kind.success_title().get(locale)),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(kind.success_message().get(locale)),
    ];

    if let SubmissionStatus::Submitted {
        reference: Some(reference),
        ..
    } = wizard.status()
    {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw(kind.reference_label().get(locale)),
            Span::styled(
                reference.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            COPY_HINT.get(locale),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(ratatui::layout::Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
