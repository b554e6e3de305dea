/// Tool for listing habits with their computed stats
///
/// This module implements the habit_list MCP tool.

use serde::{Deserialize, Serialize};
use chrono::Utc;
use crate::analytics::{CompletionSet, HabitStats};
use crate::domain::Category;
use crate::storage::{HabitStore, StorageError};

/// Parameters for listing habits
#[derive(Debug, Deserialize)]
pub struct ListHabitsParams {
    pub category: Option<String>,
}

/// One habit with its computed statistics
#[derive(Debug, Serialize)]
pub struct HabitSummary {
    pub habit_id: String,
    pub name: String,
    pub category: String,
    pub difficulty: String,
    pub current_streak: u32,
    pub completed_today: bool,
    pub weekly_progress: u32,
    pub monthly_progress: u32,
    pub total_completions: u32,
}

/// Summary statistics for the whole list
#[derive(Debug, Serialize)]
pub struct HabitListSummary {
    pub total_habits: u32,
    pub completed_today: u32,
    pub active_streaks: u32,
}

/// Response from listing habits
#[derive(Debug, Serialize)]
pub struct ListHabitsResponse {
    pub habits: Vec<HabitSummary>,
    pub summary: HabitListSummary,
}

/// List habits using the provided storage
pub fn list_habits<S: HabitStore>(
    storage: &S,
    params: ListHabitsParams,
) -> Result<ListHabitsResponse, StorageError> {
    let category_filter = match params.category {
        Some(ref raw) => Some(Category::parse(raw).ok_or_else(|| {
            StorageError::InvalidInput(format!(
                "Invalid category '{}'. Valid options: health, work, personal",
                raw
            ))
        })?),
        None => None,
    };

    let today = Utc::now().naive_utc().date();
    let habits = storage.list_habits(category_filter)?;

    let mut summaries = Vec::with_capacity(habits.len());
    for habit in habits {
        let completions = storage.completions_for_habit(&habit.id)?;
        let set = CompletionSet::from_completions(&completions);
        let stats = HabitStats::compute(habit.id.clone(), &set, today);

        summaries.push(HabitSummary {
            habit_id: habit.id.to_string(),
            name: habit.name,
            category: habit.category.as_str().to_string(),
            difficulty: habit.difficulty.as_str().to_string(),
            current_streak: stats.current_streak,
            completed_today: stats.completed_today,
            weekly_progress: stats.weekly_progress,
            monthly_progress: stats.monthly_progress,
            total_completions: stats.total_completions,
        });
    }

    let summary = HabitListSummary {
        total_habits: summaries.len() as u32,
        completed_today: summaries.iter().filter(|h| h.completed_today).count() as u32,
        active_streaks: summaries.iter().filter(|h| h.current_streak > 0).count() as u32,
    };

    Ok(ListHabitsResponse { habits: summaries, summary })
}
