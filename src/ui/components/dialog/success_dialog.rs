//! Confirmation shown after a newsletter signup

use super::base::{render_dialog, DialogConfig};
use crate::state::{Bilingual, FormKind, Locale};
use crate::ui::text_alignment;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

const DISMISS: Bilingual = Bilingual::new(" to close", " للإغلاق");

/// Render a success dialog for `kind` centered on the screen
pub fn render_success_dialog(frame: &mut Frame, kind: FormKind, locale: Locale) {
    let hint = vec![
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(DISMISS.get(locale)),
    ];

    let title = format!("✓ {}", kind.success_title().get(locale));
    render_dialog(
        frame,
        DialogConfig {
            title: &title,
            title_color: Color::Green,
            border_color: Color::Green,
            message: kind.success_message().get(locale),
            hint: Some(hint),
            max_width: 64,
            alignment: text_alignment(locale),
        },
    );
}
