//! Main layout and status bar rendering

use crate::app::App;
use crate::state::{ToastKind, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into main content and a one-row status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Draw the status bar: active toast if any, otherwise key hints
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(toast) = &app.state.toast {
        let color = match toast.kind {
            ToastKind::Success => Color::Green,
            ToastKind::Error => Color::Red,
        };
        let line = Line::from(Span::styled(
            format!(" {} ", toast.text),
            Style::default().fg(Color::Black).bg(color),
        ));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let mut spans = match app.state.current_view {
        View::Boards => vec![
            Span::styled("n", Style::default().fg(Color::Cyan)),
            Span::raw(": new board  "),
            Span::styled("r", Style::default().fg(Color::Cyan)),
            Span::raw(": refresh  "),
            Span::styled("s", Style::default().fg(Color::Cyan)),
            Span::raw(": sort  "),
            Span::styled("q", Style::default().fg(Color::Cyan)),
            Span::raw(": quit"),
        ],
        View::BoardCreate => vec![
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(": create  "),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(": cancel"),
        ],
    };

    if !app.state.api_connected {
        spans.push(Span::styled(
            "  [service unreachable]",
            Style::default().fg(Color::Red),
        ));
    }

    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
