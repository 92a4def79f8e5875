//! Form rendering module

mod board_form;
mod field_renderer;

use crate::app::App;
use ratatui::{layout::Rect, Frame};

pub fn draw_board_create(frame: &mut Frame, area: Rect, app: &App) {
    board_form::draw(frame, area, app);
}
