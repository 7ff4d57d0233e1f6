//! Modal host for the booking and consultation wizards

use super::wizard_view::{draw_wizard, wizard_height};
use crate::state::{LeadDialog, Locale};
use crate::ui::components::centered_rect;
use ratatui::{
    layout::Margin,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear},
    Frame,
};

const DIALOG_WIDTH: u16 = 76;

/// Draw an open lead dialog centered over the current view
pub fn draw_lead_dialog(frame: &mut Frame, dialog: &LeadDialog, locale: Locale) {
    if !dialog.is_open() {
        return;
    }
    let wizard = &dialog.wizard;

    // borders + one row of padding top and bottom
    let height = wizard_height(wizard) + 4;
    let area = centered_rect(frame.area(), DIALOG_WIDTH, height);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", wizard.kind().title().get(locale)),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area).inner(Margin {
        horizontal: 1,
        vertical: 1,
    });
    frame.render_widget(block, area);

    draw_wizard(frame, inner, wizard, locale);
}
