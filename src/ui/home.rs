//! Home view: firm introduction and the testimonial carousel

use crate::app::App;
use crate::state::content::TESTIMONIALS;
use crate::state::{Bilingual, Locale, TestimonialRotator};
use crate::ui::text_alignment;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const FIRM: Bilingual = Bilingual::new("Premium Legal Consultancy", "المكتب المميز للاستشارات القانونية");
const TAGLINE: Bilingual = Bilingual::new(
    "Trusted counsel in family, business, real estate and criminal matters.",
    "استشارات موثوقة في قضايا الأسرة والأعمال والعقارات والقضايا الجنائية.",
);
const BOOK: Bilingual = Bilingual::new(" Book an appointment   ", " احجز موعداً   ");
const CONSULT: Bilingual = Bilingual::new(" Free consultation", " استشارة مجانية");
const CLIENTS: Bilingual = Bilingual::new(" What Our Clients Say ", " آراء عملائنا ");

/// Draw the home view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let locale = app.state.locale;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(8)])
        .split(area);

    draw_hero(frame, chunks[0], locale);
    draw_testimonial(frame, chunks[1], &app.state.rotator, locale);
}

fn draw_hero(frame: &mut Frame, area: Rect, locale: Locale) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled(
            FIRM.get(locale),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(TAGLINE.get(locale)),
        Line::from(""),
        Line::from(vec![
            Span::styled("b", key_style),
            Span::raw(BOOK.get(locale)),
            Span::styled("c", key_style),
            Span::raw(CONSULT.get(locale)),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(text_alignment(locale))
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

fn draw_testimonial(frame: &mut Frame, area: Rect, rotator: &TestimonialRotator, locale: Locale) {
    let block = Block::default()
        .title(CLIENTS.get(locale))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area).inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    frame.render_widget(block, area);

    let Some(testimonial) = TESTIMONIALS.get(rotator.current()) else {
        return;
    };

    let lines = vec![
        Line::from(Span::styled(
            testimonial.stars(),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("“{}”", testimonial.content.get(locale)),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(
            testimonial.name.get(locale),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            testimonial.role.get(locale),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        dots_line(rotator),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

/// One dot per testimonial, the current one filled, with the key hints around them
fn dots_line(rotator: &TestimonialRotator) -> Line<'static> {
    let hint = Style::default().fg(Color::DarkGray);
    let mut spans = vec![Span::styled("◂ h  ", hint)];
    for idx in 0..rotator.len() {
        let (dot, style) = if idx == rotator.current() {
            ("●", Style::default().fg(Color::Cyan))
        } else {
            ("○", hint)
        };
        spans.push(Span::styled(format!("{dot} "), style));
    }
    spans.push(Span::styled(" l ▸", hint));
    Line::from(spans)
}
