/// Completion entity for tracking habit check-offs
///
/// This module defines the Completion struct that records a habit being
/// done on one calendar date. The store guarantees at most one record per
/// (habit, date) pair; toggling the same date removes the record again.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use crate::domain::{CompletionId, HabitId};

/// A record that a habit was performed on a specific calendar date
///
/// Granularity is the calendar day: there is no time-of-day component to
/// the completion itself, only to the logged_at audit timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Completion {
    /// Unique identifier for this record
    pub id: CompletionId,
    /// Which habit was completed
    pub habit_id: HabitId,
    /// The calendar date the habit was completed on
    pub completed_on: NaiveDate,
    /// When this record was created
    pub logged_at: DateTime<Utc>,
}

impl Completion {
    /// Create a new completion for the given habit and date
    pub fn new(habit_id: HabitId, completed_on: NaiveDate) -> Self {
        Self {
            id: CompletionId::new(),
            habit_id,
            completed_on,
            logged_at: Utc::now(),
        }
    }

    /// Create a completion from existing data (used when loading from the database)
    pub fn from_existing(
        id: CompletionId,
        habit_id: HabitId,
        completed_on: NaiveDate,
        logged_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            habit_id,
            completed_on,
            logged_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_completion() {
        let habit_id = HabitId::new();
        let today = Utc::now().naive_utc().date();

        let completion = Completion::new(habit_id.clone(), today);

        assert_eq!(completion.habit_id, habit_id);
        assert_eq!(completion.completed_on, today);
    }
}
