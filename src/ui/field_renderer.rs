//! Editor box for the focused form field

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the editor for the active field
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField) {
    let accent = Style::default().fg(Color::Cyan);

    let content = match field.as_choice() {
        Some(choice) => {
            let position = choice
                .selected_index()
                .filter(|index| *index > 0)
                .map(|index| format!("  {index}/{}", choice.options().len() - 1))
                .unwrap_or_default();
            Line::from(vec![
                Span::styled("◀ ", accent),
                Span::styled(
                    field.display_value(),
                    accent.add_modifier(Modifier::BOLD),
                ),
                Span::styled(" ▶", accent),
                Span::styled(position, Style::default().fg(Color::DarkGray)),
            ])
        }
        None => Line::from(vec![
            Span::styled(field.display_value(), accent),
            Span::styled("▌", accent),
        ]),
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(accent);

    frame.render_widget(Paragraph::new(content).block(block), area);
}
