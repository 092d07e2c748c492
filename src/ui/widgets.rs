//! Reusable UI widget helpers

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Gauge, List, ListState},
    Frame,
};

/// Render a scrollable list that automatically keeps the selected item visible.
///
/// # Example
/// ```ignore
/// let list = List::new(items).block(block);
/// render_scrollable_list(frame, area, list, app.state.form.active_field());
/// ```
pub fn render_scrollable_list(frame: &mut Frame, area: Rect, list: List, selected_index: usize) {
    let mut list_state = ListState::default().with_selected(Some(selected_index));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Greedy word wrap to `max_width` columns.
///
/// Explicit newlines are kept. A word longer than the width gets a line of
/// its own. Always returns at least one line.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if !current.is_empty() && current.len() + word.len() + 1 > max_width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }

    lines
}

/// Convert a percentage readout into a gauge ratio in `0.0..=1.0`
pub fn percent_ratio(percent: Option<f64>) -> f64 {
    match percent {
        Some(p) if p.is_finite() => (p / 100.0).clamp(0.0, 1.0),
        _ => 0.0,
    }
}

/// Render a percentage bar with the readout text as its label
pub fn render_percent_gauge(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    percent: Option<f64>,
    label: &str,
    color: Color,
) {
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio(percent_ratio(percent))
        .label(label.to_string());

    frame.render_widget(gauge, area);
}
