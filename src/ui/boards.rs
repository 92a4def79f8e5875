//! Boards list rendering

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Draw the boards list view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let boards = app.state.sorted_boards();

    let title = format!(
        " Boards ({}) — sorted by {} {} ",
        boards.len(),
        app.state.sort_field.label(),
        app.state.sort_direction.symbol()
    );

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if boards.is_empty() {
        let empty = List::new([ListItem::new(Line::from(Span::styled(
            "No boards yet. Press 'n' to create one.",
            Style::default().fg(Color::DarkGray),
        )))])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = boards
        .iter()
        .map(|board| {
            ListItem::new(Line::from(vec![
                Span::raw(board.name.clone()),
                Span::styled(
                    format!("  {}", board.created_at.format("%Y-%m-%d")),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let mut list_state = ListState::default();
    list_state.select(app.state.selected_index());
    frame.render_stateful_widget(list, area, &mut list_state);
}
