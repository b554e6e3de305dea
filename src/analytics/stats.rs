/// Per-habit stat summaries and the cross-habit dashboard overview
///
/// These bundle the individual analytics functions into the shapes the
/// list/status tools report, computed from the same explicit reference
/// date as everything else in the engine.

use chrono::NaiveDate;
use serde::Serialize;

use crate::analytics::{current_streak, monthly_progress, weekly_progress, CompletionSet, HabitHistory};
use crate::domain::HabitId;

/// Computed statistics for a single habit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HabitStats {
    /// Which habit these stats are for
    pub habit_id: HabitId,
    /// Consecutive days completed, ending today or yesterday
    pub current_streak: u32,
    /// Whether the habit is already done on the reference date
    pub completed_today: bool,
    /// Completions in the current calendar week
    pub weekly_progress: u32,
    /// Completions in the current calendar month
    pub monthly_progress: u32,
    /// Most recent completion date, if any
    pub last_completed: Option<NaiveDate>,
    /// Distinct days this habit was ever completed
    pub total_completions: u32,
}

impl HabitStats {
    /// Compute all stats for one habit from its completion history
    pub fn compute(habit_id: HabitId, completions: &CompletionSet, today: NaiveDate) -> Self {
        Self {
            habit_id,
            current_streak: current_streak(completions, today),
            completed_today: completions.contains(today),
            weekly_progress: weekly_progress(completions, today),
            monthly_progress: monthly_progress(completions, today),
            last_completed: completions.latest(),
            total_completions: completions.len() as u32,
        }
    }
}

/// Aggregate dashboard statistics across every habit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub total_habits: u32,
    /// Habits already completed on the reference date
    pub completed_today: u32,
    /// Rounded percentage of habits completed today, 0-100
    pub today_completion_rate: u32,
    /// Habits with a live streak
    pub active_streaks: u32,
    /// The longest current streak across all habits
    pub longest_current_streak: u32,
    /// Total completions across all habits in the current week
    pub weekly_completions: u32,
    /// Total completions across all habits in the current month
    pub monthly_completions: u32,
}

/// Compute the dashboard overview across all habits
pub fn overview(habits: &[HabitHistory<'_>], today: NaiveDate) -> Overview {
    let total_habits = habits.len() as u32;
    let completed_today = habits
        .iter()
        .filter(|h| h.completions.contains(today))
        .count() as u32;
    let streaks: Vec<u32> = habits
        .iter()
        .map(|h| current_streak(h.completions, today))
        .collect();

    Overview {
        total_habits,
        completed_today,
        today_completion_rate: if total_habits == 0 {
            0
        } else {
            (f64::from(completed_today) / f64::from(total_habits) * 100.0).round() as u32
        },
        active_streaks: streaks.iter().filter(|s| **s > 0).count() as u32,
        longest_current_streak: streaks.iter().copied().max().unwrap_or(0),
        weekly_completions: habits
            .iter()
            .map(|h| weekly_progress(h.completions, today))
            .sum(),
        monthly_completions: habits
            .iter()
            .map(|h| monthly_progress(h.completions, today))
            .sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_stats_for_empty_history() {
        let stats = HabitStats::compute(HabitId::new(), &CompletionSet::new(), date(2024, 1, 15));

        assert_eq!(stats.current_streak, 0);
        assert!(!stats.completed_today);
        assert_eq!(stats.weekly_progress, 0);
        assert_eq!(stats.monthly_progress, 0);
        assert_eq!(stats.last_completed, None);
        assert_eq!(stats.total_completions, 0);
    }

    #[test]
    fn test_stats_for_active_habit() {
        let set = CompletionSet::from_iso_dates(["2024-01-15", "2024-01-14", "2024-01-10"]);
        let stats = HabitStats::compute(HabitId::new(), &set, date(2024, 1, 15));

        assert_eq!(stats.current_streak, 2);
        assert!(stats.completed_today);
        assert_eq!(stats.monthly_progress, 3);
        assert_eq!(stats.last_completed, Some(date(2024, 1, 15)));
        assert_eq!(stats.total_completions, 3);
    }

    #[test]
    fn test_overview_empty() {
        let summary = overview(&[], date(2024, 1, 15));

        assert_eq!(summary.total_habits, 0);
        assert_eq!(summary.completed_today, 0);
        assert_eq!(summary.today_completion_rate, 0);
        assert_eq!(summary.active_streaks, 0);
        assert_eq!(summary.longest_current_streak, 0);
    }

    #[test]
    fn test_overview_counts() {
        let today = date(2024, 1, 15);
        // Done today, 3-day streak
        let a = CompletionSet::from_iso_dates(["2024-01-15", "2024-01-14", "2024-01-13"]);
        // Streak alive from yesterday, not done today
        let b = CompletionSet::from_iso_dates(["2024-01-14"]);
        // Streak broken
        let c = CompletionSet::from_iso_dates(["2024-01-10"]);
        let habits = [
            HabitHistory { category: Category::Health, completions: &a },
            HabitHistory { category: Category::Work, completions: &b },
            HabitHistory { category: Category::Personal, completions: &c },
        ];

        let summary = overview(&habits, today);

        assert_eq!(summary.total_habits, 3);
        assert_eq!(summary.completed_today, 1);
        assert_eq!(summary.today_completion_rate, 33);
        assert_eq!(summary.active_streaks, 2);
        assert_eq!(summary.longest_current_streak, 3);
        // Week of Sun 14th: a has 14th+15th, b has 14th
        assert_eq!(summary.weekly_completions, 3);
        assert_eq!(summary.monthly_completions, 5);
    }
}
