//! Field rendering utilities for forms

use crate::state::{Bilingual, FieldValue, FormField, Locale};
use crate::ui::text_alignment;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const EMPTY: Bilingual = Bilingual::new("(empty)", "(فارغ)");
const CHOOSE: Bilingual = Bilingual::new("◂ choose ▸", "◂ اختر ▸");
const TOGGLE_HINT: Bilingual = Bilingual::new("  Space to toggle", "  مسافة للتبديل");

/// Rows a field occupies, borders included
pub fn field_height(field: &FormField) -> u16 {
    if field.is_multiline {
        5
    } else {
        3
    }
}

/// Draw a form field using FormField from the domain layer
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    locale: Locale,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value(locale);
    let display_str = match &field.value {
        FieldValue::Choice { .. } if display_value.is_empty() => CHOOSE.get(locale).to_string(),
        _ if display_value.is_empty() && !is_active => EMPTY.get(locale).to_string(),
        _ => display_value,
    };
    let placeholder = Style::default().fg(Color::DarkGray);

    let cursor = if is_active && matches!(field.value, FieldValue::Text(_)) {
        "▌"
    } else {
        ""
    };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_str
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if !cursor.is_empty() {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        let mut spans = vec![
            Span::styled(display_str, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ];
        if is_active && matches!(field.value, FieldValue::Flag(_)) {
            spans.push(Span::styled(TOGGLE_HINT.get(locale), placeholder));
        }
        Paragraph::new(Line::from(spans))
    };

    let title_style = if field.is_satisfied() {
        border_style
    } else {
        Style::default().fg(Color::Yellow)
    };
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", field.display_label(locale)),
            title_style,
        ))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(
        content
            .alignment(text_alignment(locale))
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LeadForm;

    #[test]
    fn test_multiline_fields_are_taller() {
        let form = LeadForm::contact();
        let single = form.field("name").unwrap();
        let multi = form.field("message").unwrap();
        assert_eq!(field_height(single), 3);
        assert_eq!(field_height(multi), 5);
    }
}
