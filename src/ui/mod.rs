//! UI module for rendering the TUI

mod boards;
mod forms;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (main_area, status_area) = layout::create_layout(area);

    // Draw main content based on current view
    match app.state.current_view {
        View::Boards => boards::draw(frame, main_area, app),
        View::BoardCreate => forms::draw_board_create(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);
}
