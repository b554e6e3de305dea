/// MCP tools for habit management
///
/// This module contains all the MCP tools that external clients can call
/// to create habits, toggle completions, and read analytics.

pub mod create;
pub mod toggle;
pub mod delete;
pub mod list;
pub mod status;
pub mod analytics;
pub mod export;

// Re-export tool functions for easy access
pub use create::*;
pub use toggle::*;
pub use delete::*;
pub use list::*;
pub use status::*;
pub use analytics::*;
pub use export::*;

use crate::domain::HabitId;
use crate::storage::StorageError;

/// Parse a habit ID string supplied by a client
pub(crate) fn parse_habit_id(raw: &str) -> Result<HabitId, StorageError> {
    if raw.trim().is_empty() {
        return Err(StorageError::InvalidInput(
            "Habit ID cannot be empty".to_string(),
        ));
    }

    HabitId::from_string(raw.trim())
        .map_err(|_| StorageError::InvalidInput(format!("Invalid habit ID format: {}", raw)))
}
