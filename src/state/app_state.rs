//! Application state definitions

use super::board::Board;
use super::forms::BoardCreateForm;
use super::toast::Toast;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Boards,
    BoardCreate,
}

/// Sort field for the boards list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardSortField {
    #[default]
    CreatedAt,
    Name,
}

impl BoardSortField {
    pub fn next(&self) -> Self {
        match self {
            Self::CreatedAt => Self::Name,
            Self::Name => Self::CreatedAt,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CreatedAt => "Created",
            Self::Name => "Name",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Asc => "↑",
            Self::Desc => "↓",
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    /// Boards as last fetched from the service
    pub boards: Vec<Board>,
    /// Id of the currently selected board, if any
    pub selected_board_id: Option<String>,
    /// The create-board form (always present, reset between uses)
    pub create_form: BoardCreateForm,
    /// Current status-bar notification
    pub toast: Option<Toast>,
    /// Whether the board service was reachable at the last check
    pub api_connected: bool,
    pub sort_field: BoardSortField,
    pub sort_direction: SortDirection,
}

impl AppState {
    /// Boards in the current sort order
    pub fn sorted_boards(&self) -> Vec<&Board> {
        let mut boards: Vec<&Board> = self.boards.iter().collect();
        boards.sort_by(|a, b| {
            let ord = match self.sort_field {
                BoardSortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
                BoardSortField::CreatedAt => a.created_at.cmp(&b.created_at),
            };
            match self.sort_direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
        boards
    }

    /// Index of the selected board within the sorted list
    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected_board_id.as_ref()?;
        self.sorted_boards().iter().position(|b| &b.id == id)
    }

    pub fn select_next(&mut self) {
        let boards = self.sorted_boards();
        if boards.is_empty() {
            return;
        }
        let next = match self.selected_index() {
            Some(i) => (i + 1).min(boards.len() - 1),
            None => 0,
        };
        self.selected_board_id = Some(boards[next].id.clone());
    }

    pub fn select_prev(&mut self) {
        let boards = self.sorted_boards();
        if boards.is_empty() {
            return;
        }
        let prev = match self.selected_index() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.selected_board_id = Some(boards[prev].id.clone());
    }

    /// Replace the current toast. Only one toast is shown at a time; a new
    /// notification supersedes whatever is still on screen.
    pub fn push_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }

    /// Drop the toast once its display time is up
    pub fn expire_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }
}
