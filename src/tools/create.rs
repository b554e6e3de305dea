/// Tool for creating new habits
///
/// This module implements the habit_create MCP tool.

use serde::{Deserialize, Serialize};
use crate::domain::{Category, Difficulty, Habit};
use crate::storage::{HabitStore, StorageError};

/// Parameters for creating a new habit
#[derive(Debug, Deserialize)]
pub struct CreateHabitParams {
    pub name: String,
    pub category: String,
    pub difficulty: Option<String>,
}

/// Response from creating a habit
#[derive(Debug, Serialize)]
pub struct CreateHabitResponse {
    pub success: bool,
    pub habit_id: Option<String>,
    pub message: String,
}

/// Create a new habit using the provided storage
pub fn create_habit<S: HabitStore>(
    storage: &S,
    params: CreateHabitParams,
) -> Result<CreateHabitResponse, StorageError> {
    let category = Category::parse(&params.category).ok_or_else(|| {
        StorageError::InvalidInput(format!(
            "Invalid category '{}'. Valid options: health, work, personal",
            params.category
        ))
    })?;

    // Difficulty defaults to medium, matching the habit form's default
    let difficulty = match params.difficulty {
        Some(ref raw) => Difficulty::parse(raw).ok_or_else(|| {
            StorageError::InvalidInput(format!(
                "Invalid difficulty '{}'. Valid options: easy, medium, hard",
                raw
            ))
        })?,
        None => Difficulty::Medium,
    };

    let habit = Habit::new(params.name.clone(), category, difficulty)
        .map_err(|e| StorageError::InvalidInput(e.to_string()))?;

    let habit_id = habit.id.to_string();
    storage.create_habit(&habit)?;

    Ok(CreateHabitResponse {
        success: true,
        habit_id: Some(habit_id),
        message: format!("✅ Created habit '{}'! Ready to start your streak!", habit.name),
    })
}
