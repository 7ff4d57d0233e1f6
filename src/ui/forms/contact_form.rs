//! Inline contact form with the firm's contact details alongside

use super::wizard_view::draw_wizard;
use crate::app::App;
use crate::state::content::CONTACT_DETAILS;
use crate::state::{Bilingual, FormKind};
use crate::ui::text_alignment;
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const GET_IN_TOUCH: Bilingual = Bilingual::new("Get in Touch", "تواصل معنا");

/// Draw the contact view
pub fn draw_contact(frame: &mut Frame, area: Rect, app: &App) {
    let locale = app.state.locale;

    let block = Block::default()
        .title(format!(" {} ", FormKind::Contact.title().get(locale)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area).inner(Margin {
        horizontal: 1,
        vertical: 0,
    });
    frame.render_widget(block, area);

    let details_width = Constraint::Length(34);
    let form_width = Constraint::Min(40);
    let constraints = if locale.is_rtl() {
        [form_width, details_width]
    } else {
        [details_width, form_width]
    };
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);
    let (details_area, form_area) = if locale.is_rtl() {
        (chunks[1], chunks[0])
    } else {
        (chunks[0], chunks[1])
    };

    let mut lines = vec![
        Line::from(Span::styled(
            GET_IN_TOUCH.get(locale),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (label, value) in CONTACT_DETAILS {
        lines.push(Line::from(Span::styled(
            label.get(locale),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(*value));
        lines.push(Line::from(""));
    }
    frame.render_widget(
        Paragraph::new(lines).alignment(text_alignment(locale)),
        details_area.inner(Margin {
            horizontal: 1,
            vertical: 1,
        }),
    );

    draw_wizard(frame, form_area, &app.state.contact, locale);
}
