/// Per-category completion-rate aggregation
///
/// Compares actual completions against the theoretical maximum for each
/// category over a trailing window: every habit could have been completed
/// once per day, so the denominator is habits-in-category times window
/// length.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::analytics::HabitHistory;
use crate::domain::Category;

/// Default category-performance window: a trailing 30 days
pub const CATEGORY_WINDOW_DAYS: u32 = 30;

/// Completion-rate summary for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryPerformance {
    pub category: Category,
    /// Rounded percentage of possible completions achieved, 0-100
    pub completion_rate: u32,
    pub total_habits: u32,
    pub actual_completions: u32,
    pub possible_completions: u32,
}

/// Compute the completion rate of every category over the trailing window
///
/// All categories are always reported, in their stable order, so a category
/// with no habits shows a rate of 0 rather than disappearing from the
/// result (and the rate math never divides by zero).
pub fn category_performance(
    habits: &[HabitHistory<'_>],
    today: NaiveDate,
    window_days: u32,
) -> Vec<CategoryPerformance> {
    // For a zero-day window this start lands after `today` and the range
    // count below yields 0 for every habit.
    let start = today - Duration::days(i64::from(window_days) - 1);

    Category::ALL
        .iter()
        .map(|&category| {
            let total_habits = habits.iter().filter(|h| h.category == category).count() as u32;
            let actual_completions: u32 = habits
                .iter()
                .filter(|h| h.category == category)
                .map(|h| h.completions.count_in_range(start, today))
                .sum();
            let possible_completions = total_habits * window_days;
            let completion_rate = if possible_completions == 0 {
                0
            } else {
                (f64::from(actual_completions) / f64::from(possible_completions) * 100.0).round()
                    as u32
            };

            CategoryPerformance {
                category,
                completion_rate,
                total_habits,
                actual_completions,
                possible_completions,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::CompletionSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Build a set with `count` completions inside the 30-day window ending
    /// at the given date
    fn recent_completions(end: NaiveDate, count: u32) -> CompletionSet {
        let mut set = CompletionSet::new();
        for offset in 0..count {
            set.insert(end - Duration::days(i64::from(offset)));
        }
        set
    }

    #[test]
    fn test_three_health_habits_half_complete() {
        // 45 completions against 3 habits x 30 days = 90 possible -> 50%
        let today = date(2024, 1, 15);
        let a = recent_completions(today, 20);
        let b = recent_completions(today, 15);
        let c = recent_completions(today, 10);
        let habits = [
            HabitHistory { category: Category::Health, completions: &a },
            HabitHistory { category: Category::Health, completions: &b },
            HabitHistory { category: Category::Health, completions: &c },
        ];

        let report = category_performance(&habits, today, 30);
        let health = &report[0];

        assert_eq!(health.category, Category::Health);
        assert_eq!(health.total_habits, 3);
        assert_eq!(health.actual_completions, 45);
        assert_eq!(health.possible_completions, 90);
        assert_eq!(health.completion_rate, 50);
    }

    #[test]
    fn test_empty_categories_report_zero() {
        let report = category_performance(&[], date(2024, 1, 15), 30);

        assert_eq!(report.len(), 3);
        for entry in &report {
            assert_eq!(entry.total_habits, 0);
            assert_eq!(entry.actual_completions, 0);
            assert_eq!(entry.possible_completions, 0);
            assert_eq!(entry.completion_rate, 0);
        }
    }

    #[test]
    fn test_completions_outside_window_are_excluded() {
        let today = date(2024, 3, 1);
        let mut set = recent_completions(today, 5);
        // Well outside a 30-day window
        set.insert(date(2023, 12, 1));
        let habits = [HabitHistory { category: Category::Work, completions: &set }];

        let report = category_performance(&habits, today, 30);
        let work = report.iter().find(|e| e.category == Category::Work).unwrap();

        assert_eq!(work.actual_completions, 5);
        assert_eq!(work.possible_completions, 30);
        assert_eq!(work.completion_rate, 17); // 5/30 rounds to 17
    }

    #[test]
    fn test_full_window_is_one_hundred_percent() {
        let today = date(2024, 1, 31);
        let set = recent_completions(today, 30);
        let habits = [HabitHistory { category: Category::Personal, completions: &set }];

        let report = category_performance(&habits, today, 30);
        let personal = report
            .iter()
            .find(|e| e.category == Category::Personal)
            .unwrap();

        assert_eq!(personal.completion_rate, 100);
    }

    #[test]
    fn test_categories_keep_stable_order() {
        let report = category_performance(&[], date(2024, 1, 15), 30);
        let order: Vec<Category> = report.iter().map(|e| e.category).collect();
        assert_eq!(order, vec![Category::Health, Category::Work, Category::Personal]);
    }
}
