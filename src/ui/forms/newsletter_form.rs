//! Newsletter signup view

use super::wizard_view::draw_wizard;
use crate::app::App;
use crate::state::{Bilingual, FormKind};
use crate::ui::text_alignment;
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const INTRO: Bilingual = Bilingual::new(
    "Subscribe to receive the latest legal articles, practical tips and firm news by email.",
    "اشترك لتصلك أحدث المقالات القانونية والنصائح العملية وأخبار المكتب عبر البريد الإلكتروني.",
);

/// Draw the newsletter view
pub fn draw_newsletter(frame: &mut Frame, area: Rect, app: &App) {
    let locale = app.state.locale;

    let block = Block::default()
        .title(format!(" {} ", FormKind::Newsletter.title().get(locale)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area).inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(INTRO.get(locale)))
            .alignment(text_alignment(locale))
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    draw_wizard(frame, chunks[1], &app.state.newsletter, locale);
}
