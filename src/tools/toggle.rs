/// Tool for toggling today's completion of a habit
///
/// This module implements the habit_toggle MCP tool. A toggle always
/// targets the current calendar date; there is no backfill for past days.
/// Toggling a completed habit un-completes it again.

use serde::{Deserialize, Serialize};
use chrono::Utc;
use crate::analytics::{current_streak, CompletionSet};
use crate::storage::{HabitStore, StorageError};
use crate::tools::parse_habit_id;

/// Parameters for toggling a habit completion
#[derive(Debug, Deserialize)]
pub struct ToggleHabitParams {
    pub habit_id: String,
}

/// Response from toggling a habit
#[derive(Debug, Serialize)]
pub struct ToggleHabitResponse {
    pub success: bool,
    /// Whether the habit is completed for today after the toggle
    pub completed: bool,
    pub current_streak: u32,
    pub message: String,
}

/// Toggle today's completion for a habit using the provided storage
pub fn toggle_habit<S: HabitStore>(
    storage: &S,
    params: ToggleHabitParams,
) -> Result<ToggleHabitResponse, StorageError> {
    let habit_id = parse_habit_id(&params.habit_id)?;
    let habit = storage.get_habit(&habit_id)?;

    // The reference date is read once here at the boundary; everything
    // below works from this value.
    let today = Utc::now().naive_utc().date();

    let completed = storage.toggle_completion(&habit_id, today)?;

    let completions = storage.completions_for_habit(&habit_id)?;
    let streak = current_streak(&CompletionSet::from_completions(&completions), today);

    let message = if completed {
        format!(
            "🔥 Completed '{}'! Current streak: {} day{}",
            habit.name,
            streak,
            if streak == 1 { "" } else { "s" }
        )
    } else {
        format!("↩️ Unmarked '{}' for today", habit.name)
    };

    Ok(ToggleHabitResponse {
        success: true,
        completed,
        current_streak: streak,
        message,
    })
}
