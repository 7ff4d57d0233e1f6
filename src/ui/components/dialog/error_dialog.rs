//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use crate::state::{Bilingual, Locale};
use crate::ui::text_alignment;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

const TITLE: Bilingual = Bilingual::new("Error", "خطأ");

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str, locale: Locale) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: TITLE.get(locale),
            title_color: Color::Red,
            border_color: Color::Red,
            message: error_message,
            hint: Some(hint),
            max_width: 60,
            alignment: text_alignment(locale),
        },
    );
}
