/// Tool for checking habit status and streaks
///
/// This module implements the habit_status MCP tool.

use serde::{Deserialize, Serialize};
use chrono::Utc;
use crate::analytics::{CompletionSet, HabitStats};
use crate::storage::{HabitStore, StorageError};
use crate::tools::parse_habit_id;

/// Parameters for checking habit status
#[derive(Debug, Deserialize)]
pub struct StatusParams {
    /// If omitted, returns status for all habits
    pub habit_id: Option<String>,
}

/// Status information for a single habit
#[derive(Debug, Serialize)]
pub struct HabitStatus {
    pub habit_id: String,
    pub name: String,
    pub current_streak: u32,
    pub completed_today: bool,
    pub weekly_progress: u32,
    pub monthly_progress: u32,
    pub last_completed: Option<String>,
    pub total_completions: u32,
}

/// Response from checking habit status
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub habits: Vec<HabitStatus>,
    pub message: String,
}

/// Get status for one habit or all habits using the provided storage
pub fn get_habit_status<S: HabitStore>(
    storage: &S,
    params: StatusParams,
) -> Result<StatusResponse, StorageError> {
    let today = Utc::now().naive_utc().date();

    let habits = match params.habit_id {
        Some(ref raw) => vec![storage.get_habit(&parse_habit_id(raw)?)?],
        None => storage.list_habits(None)?,
    };

    let mut statuses = Vec::with_capacity(habits.len());
    for habit in habits {
        let completions = storage.completions_for_habit(&habit.id)?;
        let set = CompletionSet::from_completions(&completions);
        let stats = HabitStats::compute(habit.id.clone(), &set, today);

        statuses.push(HabitStatus {
            habit_id: habit.id.to_string(),
            name: habit.name,
            current_streak: stats.current_streak,
            completed_today: stats.completed_today,
            weekly_progress: stats.weekly_progress,
            monthly_progress: stats.monthly_progress,
            last_completed: stats.last_completed.map(|d| d.to_string()),
            total_completions: stats.total_completions,
        });
    }

    let message = if statuses.is_empty() {
        "No habits found. Create your first habit to get started!".to_string()
    } else {
        statuses
            .iter()
            .map(|h| {
                format!(
                    "🎯 {}{}\n   Streak: {} day{} | This week: {}/7 | This month: {}{}",
                    h.name,
                    if h.completed_today { " ✅" } else { "" },
                    h.current_streak,
                    if h.current_streak == 1 { "" } else { "s" },
                    h.weekly_progress,
                    h.monthly_progress,
                    match &h.last_completed {
                        Some(date) => format!(" | Last: {}", date),
                        None => String::new(),
                    }
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    };

    Ok(StatusResponse { habits: statuses, message })
}
