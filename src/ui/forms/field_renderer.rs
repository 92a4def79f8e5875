//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a single-line text field.
///
/// An invalid field only gets the red treatment once it has been touched,
/// so a freshly opened form renders without errors.
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField) {
    let show_invalid = field.touched && !field.is_valid();

    let border_style = if show_invalid {
        Style::default().fg(Color::Red)
    } else if field.focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if field.focused { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::raw(field.value().to_string()),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.block(block), area);
}

/// Draw the validation message row below a field, empty when the field is
/// valid or untouched.
pub fn draw_validation_message(frame: &mut Frame, area: Rect, field: &FormField, message: &str) {
    if field.touched && !field.is_valid() {
        let line = Paragraph::new(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(line, area);
    }
}
