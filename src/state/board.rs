//! Board domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A board as returned by the board service.
///
/// The service owns the board's internal structure (lists, cards); the TUI
/// only needs identity, display name and creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
