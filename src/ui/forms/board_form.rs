//! Create-board form rendering

use super::field_renderer::{draw_field, draw_validation_message};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the create-board form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.create_form;

    let block = Block::default()
        .title(" Create Board ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name field
            Constraint::Length(1), // Validation message
            Constraint::Length(1), // Submission status
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    draw_field(frame, chunks[0], &form.name);
    draw_validation_message(frame, chunks[1], &form.name, "Board name is required");
    draw_submission_status(frame, chunks[2], app);
}

fn draw_submission_status(frame: &mut Frame, area: Rect, app: &App) {
    if app.state.create_form.is_submitting() {
        let line = Paragraph::new(Line::from(Span::styled(
            "Creating…",
            Style::default().fg(Color::Yellow),
        )));
        frame.render_widget(line, area);
    }
}
