//! Vehicle specification form panel

use super::field_renderer::draw_field;
use super::widgets::render_scrollable_list;
use crate::app::App;
use crate::state::{Form, FormField};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Draw the field list, the active field editor and the analyze button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),                // Field list
            Constraint::Length(3),             // Active field editor
            Constraint::Length(BUTTON_HEIGHT), // Analyze
        ])
        .split(area);

    let form = &app.state.form;
    let active = form.active_field();

    let items: Vec<ListItem> = form
        .fields()
        .iter()
        .enumerate()
        .map(|(i, field)| field_row(field, i == active))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Vehicle Specification ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );
    render_scrollable_list(frame, chunks[0], list, active);

    if let Some(field) = form.get_field(active) {
        draw_field(frame, chunks[1], field);
    }

    let label = if app.state.analyzing {
        "ANALYZING..."
    } else {
        "ANALYZE"
    };
    render_button(frame, chunks[2], label, true, !app.state.analyzing);
}

fn field_row(field: &FormField, is_active: bool) -> ListItem<'static> {
    let marker = if is_active { "▸ " } else { "  " };
    let value_style = if field.is_choice() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };

    ListItem::new(Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::styled(
            format!("{:<20}", field.label),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(field.display_value(), value_style),
    ]))
}
