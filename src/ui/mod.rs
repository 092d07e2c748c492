//! UI module for rendering the TUI

mod components;
mod field_renderer;
mod findings;
mod form_panel;
mod layout;
mod result_panel;
mod stats_panel;
mod widgets;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let regions = layout::create_layout(frame.area());

    form_panel::draw(frame, regions.form, app);
    stats_panel::draw(frame, regions.stats, app);
    result_panel::draw(frame, regions.result, app);
    findings::draw(
        frame,
        regions.findings,
        &app.state.findings,
        app.state.findings_scroll,
    );

    layout::draw_status_bar(frame, app);

    // Draw the error dialog on top of everything else
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    }
}
