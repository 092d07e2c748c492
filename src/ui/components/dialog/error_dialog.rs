//! Blocking dialog for a failed analysis

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

const TITLE: &str = "Analysis Failed";
const MAX_WIDTH: u16 = 60;

fn key(label: &'static str) -> Span<'static> {
    Span::styled(
        label,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

/// Show `ERROR: <message>` until Enter or Esc is pressed
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    let message = format!("ERROR: {error_message}");
    let hint = vec![
        Span::raw("Press "),
        key("Enter"),
        Span::raw(" or "),
        key("Esc"),
        Span::raw(" to dismiss"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: TITLE,
            title_color: Color::Red,
            border_color: Color::Red,
            message: &message,
            hint: Some(hint),
            max_width: MAX_WIDTH,
        },
    );
}
