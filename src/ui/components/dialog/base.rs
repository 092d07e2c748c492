//! Centered modal overlay shared by the dialogs

use crate::ui::widgets::wrap_text;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Columns between the border and the text, both sides together
const PADDING: u16 = 4;
/// Top and bottom border rows, or left and right border columns
const BORDERS: u16 = 2;
const MIN_HEIGHT: u16 = 5;

/// What a dialog shows
pub struct DialogConfig<'a> {
    pub title: &'a str,
    pub title_color: Color,
    pub border_color: Color,
    /// Body text; wrapped on word boundaries, `\n` forces a break
    pub message: &'a str,
    /// Key hint rendered under the body
    pub hint: Option<Vec<Span<'a>>>,
    pub max_width: u16,
}

/// Size a dialog around its content and center it in `screen`.
///
/// The result never extends past `screen`.
fn dialog_area(screen: Rect, content_width: u16, content_height: u16) -> Rect {
    let width = content_width
        .saturating_add(PADDING + BORDERS)
        .min(screen.width);
    let height = content_height
        .saturating_add(BORDERS)
        .max(MIN_HEIGHT)
        .min(screen.height);

    Rect {
        x: screen.x + screen.width.saturating_sub(width) / 2,
        y: screen.y + screen.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let text_width = config.max_width.saturating_sub(PADDING + BORDERS).max(1);
    let body = wrap_text(config.message, usize::from(text_width));

    let widest = body
        .iter()
        .map(String::len)
        .chain(std::iter::once(config.title.len()))
        .max()
        .unwrap_or(0);
    let content_width = u16::try_from(widest).unwrap_or(u16::MAX).min(text_width);

    let mut content = Vec::with_capacity(body.len() + 4);
    content.push(Line::from(Span::styled(
        config.title,
        Style::default()
            .fg(config.title_color)
            .add_modifier(Modifier::BOLD),
    )));
    content.push(Line::default());
    content.extend(body.into_iter().map(Line::from));
    if let Some(hint) = config.hint {
        content.push(Line::default());
        content.push(Line::from(hint));
    }

    let content_height = u16::try_from(content.len()).unwrap_or(u16::MAX);
    let area = dialog_area(frame.area(), content_width, content_height);

    let background = Style::default().bg(Color::Black);
    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.border_color))
                .style(background),
        )
        .style(background);

    frame.render_widget(Clear, area);
    frame.render_widget(dialog, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dialog_is_centered() {
        let area = dialog_area(Rect::new(0, 0, 80, 24), 30, 6);
        assert_eq!(area, Rect::new(22, 8, 36, 8));
    }

    #[test]
    fn test_dialog_has_minimum_height() {
        let area = dialog_area(Rect::new(0, 0, 80, 24), 10, 1);
        assert_eq!(area.height, MIN_HEIGHT);
    }

    #[test]
    fn test_dialog_clamped_to_small_screen() {
        let area = dialog_area(Rect::new(0, 0, 20, 4), 60, 10);
        assert_eq!(area, Rect::new(0, 0, 20, 4));
    }

    #[test]
    fn test_dialog_respects_screen_offset() {
        let area = dialog_area(Rect::new(10, 5, 40, 20), 14, 4);
        assert_eq!(area, Rect::new(20, 12, 20, 6));
    }
}
