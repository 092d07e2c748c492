//! Key findings (feature importance) panel

use super::widgets::wrap_text;
use crate::state::Feature;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the feature importance list with finding `first` at the top
pub fn draw(frame: &mut Frame, area: Rect, findings: &[Feature], first: usize) {
    let block = Block::default()
        .title(" Key Findings ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if findings.is_empty() {
        let empty = Paragraph::new("No findings available")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let width = usize::from(block.inner(area).width.max(1));
    let (lines, starts) = finding_lines(findings, width);
    let offset = starts
        .get(first)
        .or(starts.last())
        .copied()
        .unwrap_or(0);
    let scroll = u16::try_from(offset).unwrap_or(u16::MAX);

    frame.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), area);
}

/// Lay out every finding pre-wrapped to `width`.
///
/// Returns the lines and, per finding, the line it starts on.
fn finding_lines(findings: &[Feature], width: usize) -> (Vec<Line<'static>>, Vec<usize>) {
    let mut lines = Vec::new();
    let mut starts = Vec::with_capacity(findings.len());

    for (i, feature) in findings.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        starts.push(lines.len());

        lines.push(Line::from(vec![
            Span::styled(
                feature.name.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  Importance: {:.1}%", feature.importance * 100.0),
                Style::default().fg(Color::Yellow),
            ),
        ]));
        if !feature.description.is_empty() {
            lines.extend(
                wrap_text(&feature.description, width)
                    .into_iter()
                    .map(|line| Line::styled(line, Style::default().fg(Color::Gray))),
            );
        }
    }

    (lines, starts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    fn feature(name: &str, description: &str) -> Feature {
        Feature {
            name: name.to_string(),
            importance: 0.1,
            description: description.to_string(),
        }
    }

    fn render(findings: &[Feature], first: usize) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|frame| draw(frame, frame.area(), findings, first))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_starts_account_for_wrapped_descriptions() {
        let findings = vec![
            feature("engine-size", "Larger engines sell for considerably more money"),
            feature("curb-weight", ""),
            feature("horsepower", "Power"),
        ];

        let (lines, starts) = finding_lines(&findings, 20);

        // engine-size: header + 3 wrapped lines, then a blank separator
        assert_eq!(starts, vec![0, 5, 7]);
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn test_last_finding_is_reachable() {
        let findings: Vec<Feature> = (0..10)
            .map(|i| {
                feature(
                    &format!("feat{i}"),
                    "A fairly long description that wraps across more than one line here",
                )
            })
            .collect();

        let text = render(&findings, findings.len() - 1);

        assert!(text.contains("feat9"));
        assert!(!text.contains("feat0"));
    }

    #[test]
    fn test_first_finding_shown_by_default() {
        let findings = vec![feature("engine-size", "Displacement")];

        let text = render(&findings, 0);

        assert!(text.contains("engine-size"));
        assert!(text.contains("Importance: 10.0%"));
        assert!(text.contains("Displacement"));
    }

    #[test]
    fn test_empty_list_placeholder() {
        assert!(render(&[], 0).contains("No findings available"));
    }
}
