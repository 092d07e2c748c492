//! Layout components (panels, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Screen regions of the main view
pub struct MainLayout {
    pub form: Rect,
    pub stats: Rect,
    pub result: Rect,
    pub findings: Rect,
}

/// Split the screen into the form column and the display column
pub fn create_layout(area: Rect) -> MainLayout {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Form
            Constraint::Percentage(55), // Display
        ])
        .split(rows[0]);

    let display = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),  // Model stats
            Constraint::Length(10), // Result
            Constraint::Min(0),     // Findings
        ])
        .split(columns[1]);

    MainLayout {
        form: columns[0],
        stats: display[0],
        result: display[1],
        findings: display[2],
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Connection status
    let conn_status = if app.state.api_connected {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };
    spans.push(conn_status);

    spans.push(Span::styled(
        get_hints(app.state.has_error()),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);
}

/// Get keyboard hints for the current mode
fn get_hints(dialog_open: bool) -> String {
    if dialog_open {
        "Enter/Esc:dismiss".to_string()
    } else {
        format!(
            "Tab/↑↓:field  ←→:choice  Enter/{}:analyze  r:reset  PgUp/PgDn:findings  q:quit",
            crate::platform::SUBMIT_SHORTCUT
        )
    }
}
