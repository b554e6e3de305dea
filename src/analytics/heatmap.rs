/// Calendar heat-map bucketing
///
/// Produces a per-day completion count across all habits over a trailing
/// window, GitHub-contribution-graph style. The intensity thresholds are a
/// presentation mapping layered over the raw counts.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::analytics::HabitHistory;

/// Default heat-map window: 12 weeks of daily cells
pub const HEATMAP_WINDOW_DAYS: u32 = 84;

/// Total completions across all habits on one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayActivity {
    pub date: NaiveDate,
    pub count: u32,
}

impl DayActivity {
    /// Presentation bucket for this day's count
    pub fn intensity(&self) -> Intensity {
        Intensity::from_count(self.count)
    }
}

/// Display bucket for a day's completion count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    None,
    Low,
    Medium,
    High,
}

impl Intensity {
    /// Map a raw count into its bucket: 0, 1, 2, or 3-and-up
    pub fn from_count(count: u32) -> Self {
        match count {
            0 => Intensity::None,
            1 => Intensity::Low,
            2 => Intensity::Medium,
            _ => Intensity::High,
        }
    }
}

/// Build the per-day activity series for the window ending at `today`
///
/// The window is the inclusive range `[today - (window_days - 1), today]`,
/// ordered oldest first. Each habit contributes at most one completion per
/// day, so a day's count is the number of habits completed on it.
pub fn heatmap(habits: &[HabitHistory<'_>], today: NaiveDate, window_days: u32) -> Vec<DayActivity> {
    if window_days == 0 {
        return Vec::new();
    }

    let start = today - Duration::days(i64::from(window_days) - 1);
    start
        .iter_days()
        .take(window_days as usize)
        .map(|date| DayActivity {
            date,
            count: habits
                .iter()
                .filter(|habit| habit.completions.contains(date))
                .count() as u32,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::CompletionSet;
    use crate::domain::Category;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_three_day_window_counts() {
        // Window [13th, 15th]: habit A completed on day 1 and day 3 of the
        // window, habit B on day 1 only.
        let a = CompletionSet::from_iso_dates(["2024-01-13", "2024-01-15"]);
        let b = CompletionSet::from_iso_dates(["2024-01-13"]);
        let habits = [
            HabitHistory { category: Category::Health, completions: &a },
            HabitHistory { category: Category::Work, completions: &b },
        ];

        let days = heatmap(&habits, date(2024, 1, 15), 3);

        let counts: Vec<u32> = days.iter().map(|d| d.count).collect();
        assert_eq!(counts, vec![2, 0, 1]);
        assert_eq!(days[0].date, date(2024, 1, 13));
        assert_eq!(days[2].date, date(2024, 1, 15));
    }

    #[test]
    fn test_window_length_and_order() {
        let days = heatmap(&[], date(2024, 1, 15), HEATMAP_WINDOW_DAYS);
        assert_eq!(days.len(), 84);
        assert_eq!(days[0].date, date(2023, 10, 24));
        assert_eq!(days[83].date, date(2024, 1, 15));
        assert!(days.iter().all(|d| d.count == 0));
    }

    #[test]
    fn test_completions_outside_window_are_ignored() {
        let set = CompletionSet::from_iso_dates(["2024-01-10", "2024-01-15"]);
        let habits = [HabitHistory { category: Category::Personal, completions: &set }];

        let days = heatmap(&habits, date(2024, 1, 15), 3);
        assert_eq!(days.iter().map(|d| d.count).sum::<u32>(), 1);
    }

    #[test]
    fn test_zero_window_is_empty() {
        assert!(heatmap(&[], date(2024, 1, 15), 0).is_empty());
    }

    #[test]
    fn test_intensity_buckets() {
        assert_eq!(Intensity::from_count(0), Intensity::None);
        assert_eq!(Intensity::from_count(1), Intensity::Low);
        assert_eq!(Intensity::from_count(2), Intensity::Medium);
        assert_eq!(Intensity::from_count(3), Intensity::High);
        assert_eq!(Intensity::from_count(17), Intensity::High);
    }
}
