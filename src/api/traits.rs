//! Trait abstraction for the board service client to enable mocking in tests
//!
//! The application receives this trait as a boxed object at construction
//! time; nothing resolves the service from ambient context.

use crate::state::Board;
use anyhow::Result;
use async_trait::async_trait;

/// Operations the board service exposes to the TUI
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardApi: Send + Sync {
    /// Check if the board service is reachable
    async fn check_connection(&self) -> bool;

    /// List all boards
    async fn list_boards(&mut self) -> Result<Vec<Board>>;

    /// Create a new board with the given (already trimmed) name
    async fn create_board(&mut self, name: &str) -> Result<Board>;
}
