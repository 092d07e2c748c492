//! Model accuracy panel

use super::widgets::render_percent_gauge;
use crate::app::App;
use crate::state::Readout;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Shown until a readout has been written
const EMPTY_READOUT: &str = "--";

/// Draw the accuracy meter and the train/test scores
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Accuracy meter
            Constraint::Min(3),    // Scores
        ])
        .split(area);

    let readouts = &app.state.readouts;
    render_percent_gauge(
        frame,
        chunks[0],
        "Model Accuracy",
        readouts.value(Readout::AccuracyMeter),
        readouts
            .text(Readout::AccuracyMeter)
            .unwrap_or(EMPTY_READOUT),
        Color::Green,
    );

    let score = |readout: Readout| readouts.text(readout).unwrap_or(EMPTY_READOUT).to_string();
    let value_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![
        Span::styled("Train R²: ", Style::default().fg(Color::Gray)),
        Span::styled(score(Readout::TrainScore), value_style),
        Span::raw("   "),
        Span::styled("Test R²: ", Style::default().fg(Color::Gray)),
        Span::styled(score(Readout::TestScore), value_style),
    ];
    if let Some(stats) = &app.state.stats {
        spans.push(Span::styled(
            format!("   ({:.3} / {:.3})", stats.train_score, stats.test_score),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let block = Block::default()
        .title(" Model Performance ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), chunks[1]);
}
