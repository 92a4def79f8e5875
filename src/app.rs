//! Application state and core logic

use crate::api::BoardApi;
use crate::config::TuiConfig;
use crate::state::{AppState, SubmitAttempt, Toast, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Board service client, injected at construction
    api: Box<dyn BoardApi>,
    /// User configuration (sort preferences, service address)
    config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
    /// One-shot focus request for the create form's name field, applied on
    /// the next event-loop tick rather than synchronously on navigation
    pending_focus: bool,
}

impl App {
    /// Create a new App instance
    #[allow(clippy::field_reassign_with_default)]
    pub async fn new(mut api: Box<dyn BoardApi>, config: TuiConfig) -> Result<Self> {
        let mut state = AppState::default();

        state.sort_field = config.board_sort_field();
        state.sort_direction = config.board_sort_direction();

        // Check service connection and load boards if reachable
        state.api_connected = api.check_connection().await;
        if state.api_connected {
            match api.list_boards().await {
                Ok(boards) => state.boards = boards,
                Err(e) => tracing::warn!(error = %e, "failed to load boards at startup"),
            }
        }

        Ok(Self {
            state,
            api,
            config,
            quit: false,
            pending_focus: false,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Per-loop housekeeping: expire toasts and apply any pending focus
    /// request. Runs once per event-loop iteration, before drawing.
    pub fn tick(&mut self) {
        self.state.expire_toast();
        if self.pending_focus {
            self.state.create_form.name.focused = true;
            self.pending_focus = false;
        }
    }

    /// Handle a key event for the current view
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Boards => self.handle_boards_key(key).await,
            View::BoardCreate => self.handle_board_create_key(key).await,
        }
    }

    /// Handle keys in the boards list view
    async fn handle_boards_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('n') => self.open_create_form(),
            KeyCode::Char('r') => self.refresh_boards().await,
            KeyCode::Char('s') | KeyCode::Char('S')
                if key.modifiers.contains(KeyModifiers::SHIFT) =>
            {
                self.state.sort_direction = self.state.sort_direction.toggle();
                self.save_sort_prefs();
            }
            KeyCode::Char('s') => {
                self.state.sort_field = self.state.sort_field.next();
                self.save_sort_prefs();
            }
            KeyCode::Down | KeyCode::Char('j') => self.state.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.state.select_prev(),
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the create-board form view
    async fn handle_board_create_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => self.cancel_create_form(),
            KeyCode::Enter => self.submit_create_form().await,
            KeyCode::Char(c) if self.state.create_form.name.focused => {
                self.state.create_form.name.push_char(c);
            }
            KeyCode::Backspace if self.state.create_form.name.focused => {
                self.state.create_form.name.pop_char();
            }
            _ => {}
        }
        Ok(())
    }

    /// Open the create-board form with a fresh field and schedule focus
    fn open_create_form(&mut self) {
        self.state.create_form.reset();
        self.state.current_view = View::BoardCreate;
        self.pending_focus = true;
    }

    /// Leave the form without side effects
    fn cancel_create_form(&mut self) {
        self.state.create_form.reset();
        self.pending_focus = false;
        self.state.current_view = View::Boards;
    }

    /// Submit the create-board form.
    ///
    /// Invalid input never reaches the service; a submit while a request is
    /// in flight returns immediately. The request is awaited inline on the
    /// event loop, so exactly one completion is processed per submission.
    pub async fn submit_create_form(&mut self) {
        let name = match self.state.create_form.try_begin_submit() {
            SubmitAttempt::AlreadySubmitting | SubmitAttempt::Invalid => return,
            SubmitAttempt::Ready(name) => name,
        };

        match self.api.create_board(&name).await {
            Ok(board) => {
                self.state.create_form.finish_success();
                self.pending_focus = false;
                self.board_added(board.id).await;
                self.state.push_toast(Toast::success("Board created!"));
            }
            Err(e) => {
                // The typed value stays in the form so the user can retry.
                // Error detail goes to the log, not the toast.
                self.state.create_form.finish_failure();
                tracing::warn!(error = %e, board = %name, "board creation failed");
                self.state.push_toast(Toast::error("Failed to create board"));
            }
        }
    }

    /// React to a successful creation: refresh the board list, select the
    /// new board and return to the list view.
    async fn board_added(&mut self, board_id: String) {
        match self.api.list_boards().await {
            Ok(boards) => self.state.boards = boards,
            Err(e) => tracing::warn!(error = %e, "failed to refresh boards after creation"),
        }
        self.state.selected_board_id = Some(board_id);
        self.state.current_view = View::Boards;
    }

    /// Reload the board list from the service
    async fn refresh_boards(&mut self) {
        match self.api.list_boards().await {
            Ok(boards) => {
                self.state.boards = boards;
                self.state.api_connected = true;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to refresh boards");
                self.state.push_toast(Toast::error("Failed to load boards"));
            }
        }
    }

    /// Persist the current sort preferences
    fn save_sort_prefs(&mut self) {
        self.config.board_sort_field = Some(self.state.sort_field.label().to_lowercase());
        self.config.board_sort_direction = Some(match self.state.sort_direction {
            crate::state::SortDirection::Asc => "asc".to_string(),
            crate::state::SortDirection::Desc => "desc".to_string(),
        });
        if let Err(e) = self.config.save() {
            tracing::warn!(error = %e, "failed to save config");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockBoardApi;
    use crate::state::{Board, SubmissionState, ToastKind};
    use anyhow::anyhow;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn test_board(id: &str, name: &str) -> Board {
        Board {
            id: id.to_string(),
            name: name.to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    /// Mock with the service unreachable at startup, so App::new performs
    /// no initial board load.
    fn offline_mock() -> MockBoardApi {
        let mut mock = MockBoardApi::new();
        mock.expect_check_connection().returning(|| false);
        mock
    }

    async fn test_app(mock: MockBoardApi) -> App {
        App::new(Box::new(mock), TuiConfig::default())
            .await
            .unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_new_loads_boards_when_connected() {
        let mut mock = MockBoardApi::new();
        mock.expect_check_connection().returning(|| true);
        mock.expect_list_boards()
            .times(1)
            .returning(|| Ok(vec![test_board("b-1", "Groceries")]));

        let app = test_app(mock).await;
        assert!(app.state.api_connected);
        assert_eq!(app.state.boards.len(), 1);
    }

    #[tokio::test]
    async fn test_new_skips_load_when_offline() {
        let app = test_app(offline_mock()).await;
        assert!(!app.state.api_connected);
        assert!(app.state.boards.is_empty());
    }

    #[tokio::test]
    async fn test_submit_success_resets_form_and_refreshes_list() {
        let mut mock = offline_mock();
        mock.expect_create_board()
            .withf(|name| name == "Groceries")
            .times(1)
            .returning(|_| Ok(test_board("b-9", "Groceries")));
        mock.expect_list_boards()
            .times(1)
            .returning(|| Ok(vec![test_board("b-9", "Groceries")]));

        let mut app = test_app(mock).await;
        app.open_create_form();
        app.tick();
        // Leading/trailing whitespace must be trimmed before the call
        type_str(&mut app, "Groceries ").await;
        app.handle_key(key(KeyCode::Enter)).await.unwrap();

        assert_eq!(app.state.create_form.name.value(), "");
        assert!(!app.state.create_form.name.touched);
        assert_eq!(app.state.create_form.submission, SubmissionState::Idle);
        assert_eq!(app.state.current_view, View::Boards);
        assert_eq!(app.state.selected_board_id.as_deref(), Some("b-9"));
        assert_eq!(app.state.boards.len(), 1);
        let toast = app.state.toast.as_ref().unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
    }

    #[tokio::test]
    async fn test_submit_failure_preserves_value() {
        let mut mock = offline_mock();
        mock.expect_create_board()
            .withf(|name| name == "Trip")
            .times(1)
            .returning(|_| Err(anyhow!("service unavailable")));
        mock.expect_list_boards().times(0);

        let mut app = test_app(mock).await;
        app.open_create_form();
        app.tick();
        type_str(&mut app, "Trip").await;
        app.handle_key(key(KeyCode::Enter)).await.unwrap();

        assert_eq!(app.state.create_form.name.value(), "Trip");
        assert_eq!(app.state.create_form.submission, SubmissionState::Idle);
        assert_eq!(app.state.current_view, View::BoardCreate);
        assert!(app.state.selected_board_id.is_none());
        let toast = app.state.toast.as_ref().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
    }

    #[tokio::test]
    async fn test_submit_whitespace_only_makes_no_call() {
        let mut mock = offline_mock();
        mock.expect_create_board().times(0);
        mock.expect_list_boards().times(0);

        let mut app = test_app(mock).await;
        app.open_create_form();
        app.tick();
        type_str(&mut app, "  ").await;
        app.handle_key(key(KeyCode::Enter)).await.unwrap();

        assert!(app.state.create_form.name.touched);
        assert!(!app.state.create_form.name.is_valid());
        assert_eq!(app.state.create_form.submission, SubmissionState::Idle);
        assert_eq!(app.state.current_view, View::BoardCreate);
    }

    #[tokio::test]
    async fn test_submit_empty_marks_field_touched() {
        let mut mock = offline_mock();
        mock.expect_create_board().times(0);

        let mut app = test_app(mock).await;
        app.open_create_form();
        app.tick();
        app.handle_key(key(KeyCode::Enter)).await.unwrap();

        assert!(app.state.create_form.name.touched);
        assert_eq!(app.state.current_view, View::BoardCreate);
    }

    #[tokio::test]
    async fn test_submit_while_submitting_is_ignored() {
        let mut mock = offline_mock();
        mock.expect_create_board().times(0);

        let mut app = test_app(mock).await;
        app.open_create_form();
        app.tick();
        type_str(&mut app, "Trip").await;
        app.state.create_form.submission = SubmissionState::Submitting;

        app.submit_create_form().await;
        assert_eq!(app.state.create_form.name.value(), "Trip");
    }

    #[tokio::test]
    async fn test_focus_is_deferred_to_next_tick() {
        let mut app = test_app(offline_mock()).await;
        app.open_create_form();
        assert!(!app.state.create_form.name.focused);

        // Typing before the focus tick must not reach the field
        app.handle_key(key(KeyCode::Char('x'))).await.unwrap();
        assert_eq!(app.state.create_form.name.value(), "");

        app.tick();
        assert!(app.state.create_form.name.focused);
        app.handle_key(key(KeyCode::Char('x'))).await.unwrap();
        assert_eq!(app.state.create_form.name.value(), "x");
    }

    #[tokio::test]
    async fn test_cancel_resets_form_and_returns_to_list() {
        let mut app = test_app(offline_mock()).await;
        app.open_create_form();
        app.tick();
        type_str(&mut app, "Trip").await;
        app.handle_key(key(KeyCode::Esc)).await.unwrap();

        assert_eq!(app.state.current_view, View::Boards);
        assert_eq!(app.state.create_form.name.value(), "");
    }

    #[tokio::test]
    async fn test_refresh_failure_shows_error_toast() {
        let mut mock = offline_mock();
        mock.expect_list_boards()
            .times(1)
            .returning(|| Err(anyhow!("connection refused")));

        let mut app = test_app(mock).await;
        app.handle_key(key(KeyCode::Char('r'))).await.unwrap();

        let toast = app.state.toast.as_ref().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
    }

    #[tokio::test]
    async fn test_quit_key() {
        let mut app = test_app(offline_mock()).await;
        assert!(!app.should_quit());
        app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_navigation_keys_move_selection() {
        let mut mock = MockBoardApi::new();
        mock.expect_check_connection().returning(|| true);
        mock.expect_list_boards().times(1).returning(|| {
            Ok(vec![test_board("b-1", "First"), test_board("b-2", "Second")])
        });

        let mut app = test_app(mock).await;
        app.handle_key(key(KeyCode::Down)).await.unwrap();
        assert!(app.state.selected_board_id.is_some());
        let first = app.state.selected_board_id.clone();
        app.handle_key(key(KeyCode::Char('j'))).await.unwrap();
        assert_ne!(app.state.selected_board_id, first);
    }
}
