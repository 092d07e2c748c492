//! Prediction result panel

use super::widgets::render_percent_gauge;
use crate::app::App;
use crate::state::{format_price, Readout, ResultPanel};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw either the standby text or the animated price and confidence
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let border_color = if app.state.result.is_active() {
        Color::Green
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(" Estimated Value ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &app.state.result {
        ResultPanel::Standby => {
            let text = if app.state.analyzing {
                "Analyzing vehicle specification..."
            } else {
                "Fill in the specification and press Enter to analyze"
            };
            let standby = Paragraph::new(text)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(standby, inner);
        }
        ResultPanel::Active { price, currency } => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Spacer
                    Constraint::Length(1), // Price
                    Constraint::Length(1), // Spacer
                    Constraint::Length(3), // Confidence
                ])
                .split(inner);

            let readouts = &app.state.readouts;
            let price = readouts
                .text(Readout::Price)
                .map(str::to_string)
                .unwrap_or_else(|| format_price(*price));
            let line = Line::from(vec![
                Span::styled("$ ", Style::default().fg(Color::Gray)),
                Span::styled(
                    price,
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" {currency}"), Style::default().fg(Color::Gray)),
            ]);
            frame.render_widget(
                Paragraph::new(line).alignment(Alignment::Center),
                chunks[1],
            );

            render_percent_gauge(
                frame,
                chunks[3],
                "Confidence",
                readouts.value(Readout::Confidence),
                readouts.text(Readout::Confidence).unwrap_or_default(),
                Color::Cyan,
            );
        }
    }
}
