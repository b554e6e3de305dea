/// Tool for deleting habits
///
/// This module implements the habit_delete MCP tool. Deletion is permanent
/// and removes the habit's completion history with it.

use serde::{Deserialize, Serialize};
use crate::storage::{HabitStore, StorageError};
use crate::tools::parse_habit_id;

/// Parameters for deleting a habit
#[derive(Debug, Deserialize)]
pub struct DeleteHabitParams {
    pub habit_id: String,
}

/// Response from deleting a habit
#[derive(Debug, Serialize)]
pub struct DeleteHabitResponse {
    pub success: bool,
    pub message: String,
}

/// Delete a habit and its completions using the provided storage
pub fn delete_habit<S: HabitStore>(
    storage: &S,
    params: DeleteHabitParams,
) -> Result<DeleteHabitResponse, StorageError> {
    let habit_id = parse_habit_id(&params.habit_id)?;
    let habit = storage.get_habit(&habit_id)?;

    storage.delete_habit(&habit_id)?;

    Ok(DeleteHabitResponse {
        success: true,
        message: format!("🗑️ Deleted habit '{}' and its completion history", habit.name),
    })
}
