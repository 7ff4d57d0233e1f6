//! Layout components (sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::platform::LOCALE_SHORTCUT;
use crate::state::{Locale, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Sidebar width in columns
const SIDEBAR_WIDTH: u16 = 20;

/// Create the main layout with sidebar; the sidebar moves right for RTL
pub fn create_layout(area: Rect, locale: Locale) -> (Rect, Rect) {
    let constraints = if locale.is_rtl() {
        [Constraint::Min(0), Constraint::Length(SIDEBAR_WIDTH)]
    } else {
        [Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)]
    };

    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(rows[0]);

    if locale.is_rtl() {
        (chunks[1], chunks[0])
    } else {
        (chunks[0], chunks[1])
    }
}

/// Draw the sidebar with boxed buttons
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let locale = app.state.locale;

    let mut constraints = vec![Constraint::Min(0)]; // Top padding (flex)
    constraints.extend(View::NAVIGABLE.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0)); // Bottom padding (flex)

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, view) in View::NAVIGABLE.iter().enumerate() {
        let is_selected = app.state.current_view == *view;
        let marker = if is_selected { "▸" } else { " " };
        render_sidebar_button(
            frame,
            chunks[idx + 1],
            marker,
            view.label().get(locale),
            is_selected,
        );
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.locale.label()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];
    spans.push(Span::raw(" "));

    let hints = get_view_hints(app);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    // Copy message
    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let quit_hint = format!(" {LOCALE_SHORTCUT}:language  ^C:quit ");

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let hint_width = quit_hint.chars().count() as u16;
    let quit_area = Rect {
        x: area.width.saturating_sub(hint_width),
        y: area.height.saturating_sub(1),
        width: hint_width.min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for what currently has focus
fn get_view_hints(app: &App) -> &'static str {
    if app.state.has_errors() {
        return "Enter/Esc:dismiss";
    }
    if let Some(kind) = app.state.open_dialog_kind() {
        return if app.state.wizard(kind).status().is_submitted() {
            "y:copy reference  Esc:close"
        } else {
            "Tab:next  Space:toggle  ←/→:choose  Enter:press  Esc:cancel"
        };
    }
    if app.newsletter_modal_open() {
        return "Enter:close";
    }
    match app.state.current_view {
        View::Splash => "Press any key to skip",
        View::Home => "Tab:views  b:book  c:consult  h/l:testimonials  1-3:jump  q:quit",
        View::Services => "Tab:views  j/k:nav  Enter:request  b:book  q:quit",
        View::Contact => "Tab:next  Enter:press  Ctrl+B:book  Esc:home",
        View::Newsletter => "Tab:next  Enter:press  Esc:home",
    }
}
