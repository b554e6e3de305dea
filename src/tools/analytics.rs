/// Tool for the analytics dashboard: heat map, category performance,
/// and the aggregate overview
///
/// This module implements the habit_analytics MCP tool.

use serde::{Deserialize, Serialize};
use chrono::Utc;
use crate::analytics::{
    category_performance, heatmap, overview, CategoryPerformance, CompletionSet, HabitHistory,
    Intensity, Overview, CATEGORY_WINDOW_DAYS, HEATMAP_WINDOW_DAYS,
};
use crate::storage::{HabitStore, StorageError};

/// Parameters for the analytics dashboard
#[derive(Debug, Deserialize)]
pub struct AnalyticsParams {
    /// Heat-map window length in days; defaults to 12 weeks
    pub window_days: Option<u32>,
}

/// One heat-map cell
#[derive(Debug, Serialize)]
pub struct HeatmapDay {
    pub date: String,
    pub count: u32,
    pub intensity: Intensity,
}

/// Response carrying the full analytics dashboard
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub overview: Overview,
    pub heatmap: Vec<HeatmapDay>,
    pub categories: Vec<CategoryPerformance>,
    pub message: String,
}

/// Compute the analytics dashboard from a snapshot of all habits
pub fn get_analytics<S: HabitStore>(
    storage: &S,
    params: AnalyticsParams,
) -> Result<AnalyticsResponse, StorageError> {
    let today = Utc::now().naive_utc().date();
    let window_days = params.window_days.unwrap_or(HEATMAP_WINDOW_DAYS);

    // Take one consistent snapshot of every habit's history
    let habits = storage.list_habits(None)?;
    let mut sets = Vec::with_capacity(habits.len());
    for habit in &habits {
        let completions = storage.completions_for_habit(&habit.id)?;
        sets.push(CompletionSet::from_completions(&completions));
    }
    let histories: Vec<HabitHistory<'_>> = habits
        .iter()
        .zip(&sets)
        .map(|(habit, set)| HabitHistory { category: habit.category, completions: set })
        .collect();

    let summary = overview(&histories, today);
    let days = heatmap(&histories, today, window_days);
    let categories = category_performance(&histories, today, CATEGORY_WINDOW_DAYS);

    let message = format!(
        "📊 {} habit{}, {} completed today ({}%). Active streaks: {} (longest {} days).\n{}",
        summary.total_habits,
        if summary.total_habits == 1 { "" } else { "s" },
        summary.completed_today,
        summary.today_completion_rate,
        summary.active_streaks,
        summary.longest_current_streak,
        categories
            .iter()
            .map(|c| {
                format!(
                    "   {}: {}% ({}/{} over {} days)",
                    c.category.display_name(),
                    c.completion_rate,
                    c.actual_completions,
                    c.possible_completions,
                    CATEGORY_WINDOW_DAYS
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    );

    Ok(AnalyticsResponse {
        overview: summary,
        heatmap: days
            .into_iter()
            .map(|day| HeatmapDay {
                date: day.date.to_string(),
                count: day.count,
                intensity: day.intensity(),
            })
            .collect(),
        categories,
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Difficulty, Habit};
    use crate::storage::SqliteStore;

    #[test]
    fn test_analytics_empty_store() {
        let storage = SqliteStore::open_in_memory().unwrap();
        let response = get_analytics(&storage, AnalyticsParams { window_days: None }).unwrap();

        assert_eq!(response.overview.total_habits, 0);
        assert_eq!(response.heatmap.len(), HEATMAP_WINDOW_DAYS as usize);
        assert!(response.heatmap.iter().all(|d| d.count == 0));
        assert_eq!(response.categories.len(), 3);
    }

    #[test]
    fn test_analytics_counts_todays_completion() {
        let storage = SqliteStore::open_in_memory().unwrap();
        let habit = Habit::new("Run".to_string(), Category::Health, Difficulty::Easy).unwrap();
        storage.create_habit(&habit).unwrap();
        let today = Utc::now().naive_utc().date();
        storage.toggle_completion(&habit.id, today).unwrap();

        let response = get_analytics(&storage, AnalyticsParams { window_days: Some(7) }).unwrap();

        assert_eq!(response.overview.completed_today, 1);
        assert_eq!(response.heatmap.len(), 7);
        let last = response.heatmap.last().unwrap();
        assert_eq!(last.date, today.to_string());
        assert_eq!(last.count, 1);
        assert_eq!(last.intensity, Intensity::Low);

        let health = &response.categories[0];
        assert_eq!(health.category, Category::Health);
        assert_eq!(health.actual_completions, 1);
        assert_eq!(health.possible_completions, 30);
    }
}
