/// Analytics engine for streaks, progress windows, and activity summaries
///
/// Everything in this module is a pure function over an in-memory snapshot
/// of completion data. The reference date ("today") is always an explicit
/// parameter so results are deterministic and testable; nothing here reads
/// the system clock or mutates its inputs.

pub mod streak;
pub mod progress;
pub mod heatmap;
pub mod category;
pub mod stats;

// Re-export the public surface of the engine
pub use streak::current_streak;
pub use progress::{monthly_progress, weekly_progress};
pub use heatmap::{heatmap, DayActivity, Intensity, HEATMAP_WINDOW_DAYS};
pub use category::{category_performance, CategoryPerformance, CATEGORY_WINDOW_DAYS};
pub use stats::{overview, HabitStats, Overview};

use std::collections::BTreeSet;
use chrono::NaiveDate;

use crate::domain::{Category, Completion};

/// A habit's completion history as a set of calendar dates
///
/// Duplicate dates collapse to one entry, so counting logic can never
/// double-count a day even if the store it was loaded from failed to
/// enforce uniqueness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionSet {
    dates: BTreeSet<NaiveDate>,
}

impl CompletionSet {
    /// Create an empty completion set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from completion records
    pub fn from_completions(completions: &[Completion]) -> Self {
        Self {
            dates: completions.iter().map(|c| c.completed_on).collect(),
        }
    }

    /// Build a set from ISO `YYYY-MM-DD` strings
    ///
    /// Strings that do not parse as dates are skipped rather than reported;
    /// a malformed record should never poison the whole history.
    pub fn from_iso_dates<'a, I>(dates: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            dates: dates
                .into_iter()
                .filter_map(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
                .collect(),
        }
    }

    /// Add a date to the set, returning false if it was already present
    pub fn insert(&mut self, date: NaiveDate) -> bool {
        self.dates.insert(date)
    }

    /// Whether the habit was completed on the given date
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Number of distinct completed dates
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the habit has never been completed
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// The most recent completed date, if any
    pub fn latest(&self) -> Option<NaiveDate> {
        self.dates.iter().next_back().copied()
    }

    /// Count completed dates in the inclusive range `[start, end]`
    pub fn count_in_range(&self, start: NaiveDate, end: NaiveDate) -> u32 {
        if start > end {
            return 0;
        }
        self.dates.range(start..=end).count() as u32
    }

    /// Iterate the completed dates in ascending order
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }
}

/// A habit's category paired with its completion history
///
/// This is the minimal view of a habit the cross-habit analytics need,
/// keeping the engine decoupled from storage and serialization concerns.
#[derive(Debug, Clone, Copy)]
pub struct HabitHistory<'a> {
    pub category: Category,
    pub completions: &'a CompletionSet,
}
