/// Habit entity and related functionality
///
/// This module defines the core Habit struct that represents a recurring
/// activity the user wants to track, along with its validation rules.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::domain::{Category, Difficulty, DomainError, HabitId};

/// A habit represents something the user wants to do every day
///
/// This is the core entity in the system. Each habit has a name, a category
/// for the analytics breakdowns, and a difficulty rating. Completion history
/// lives in separate Completion records keyed by calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier for this habit
    pub id: HabitId,
    /// Display name (e.g., "Morning Run", "Read for 30min")
    pub name: String,
    /// Life area this habit belongs to
    pub category: Category,
    /// How demanding the habit is
    pub difficulty: Difficulty,
    /// When this habit was created
    pub created_at: DateTime<Utc>,
}

impl Habit {
    /// Create a new habit with validation
    pub fn new(
        name: String,
        category: Category,
        difficulty: Difficulty,
    ) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;

        Ok(Self {
            id: HabitId::new(),
            name: name.trim().to_string(),
            category,
            difficulty,
            created_at: Utc::now(),
        })
    }

    /// Create a habit from existing data (used when loading from the database)
    ///
    /// Assumes the data was validated when it was first stored.
    pub fn from_existing(
        id: HabitId,
        name: String,
        category: Category,
        difficulty: Difficulty,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            category,
            difficulty,
            created_at,
        }
    }

    /// Validate habit name according to business rules
    fn validate_name(name: &str) -> Result<(), DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string(),
            ));
        }

        if trimmed.len() > 100 {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be longer than 100 characters".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_valid_habit() {
        let habit = Habit::new(
            "Morning Run".to_string(),
            Category::Health,
            Difficulty::Medium,
        );

        assert!(habit.is_ok());
        let habit = habit.unwrap();
        assert_eq!(habit.name, "Morning Run");
        assert_eq!(habit.category, Category::Health);
        assert_eq!(habit.difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_name_is_trimmed() {
        let habit = Habit::new(
            "  Journal  ".to_string(),
            Category::Personal,
            Difficulty::Easy,
        )
        .unwrap();

        assert_eq!(habit.name, "Journal");
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = Habit::new("   ".to_string(), Category::Work, Difficulty::Hard);
        assert!(result.is_err());
    }

    #[test]
    fn test_overlong_name_rejected() {
        let result = Habit::new("x".repeat(101), Category::Work, Difficulty::Easy);
        assert!(result.is_err());
    }
}
