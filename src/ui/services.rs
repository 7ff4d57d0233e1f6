//! Services view: practice areas, each opening a consultation request

use crate::app::App;
use crate::state::content::SERVICES;
use crate::state::Bilingual;
use crate::ui::text_alignment;
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const TITLE: Bilingual = Bilingual::new(" Our Services ", " خدماتنا ");
const REQUEST: Bilingual = Bilingual::new(
    " Request a consultation",
    " اطلب استشارة",
);

/// Draw the services view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let locale = app.state.locale;
    let block = Block::default()
        .title(TITLE.get(locale))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area).inner(Margin {
        horizontal: 1,
        vertical: 1,
    });
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SERVICES.len() as u16),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(inner);

    let items: Vec<ListItem> = SERVICES
        .iter()
        .map(|service| ListItem::new(Line::from(service.title.get(locale))))
        .collect();
    let list = List::new(items)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");
    let mut list_state = ListState::default().with_selected(Some(app.state.selected_service));
    frame.render_stateful_widget(list, chunks[0], &mut list_state);

    let Some(service) = SERVICES.get(app.state.selected_service) else {
        return;
    };
    let lines = vec![
        Line::from(Span::styled(
            service.title.get(locale),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(service.summary.get(locale)),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(REQUEST.get(locale)),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(text_alignment(locale))
            .wrap(Wrap { trim: true }),
        chunks[2],
    );
}
