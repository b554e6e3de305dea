/// Core types and enums used throughout the domain layer
///
/// This module defines the fundamental types like Category, Difficulty, and
/// the ID newtypes used by Habit, Completion, and other domain entities.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a habit
///
/// This is a wrapper around UUID to provide type safety - you can't accidentally
/// pass a habit ID where a completion ID is expected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HabitId(pub Uuid);

impl HabitId {
    /// Generate a new random habit ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a habit ID from a string (useful for database loading)
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl std::fmt::Display for HabitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique identifier for a completion record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompletionId(pub Uuid);

impl CompletionId {
    /// Generate a new random completion ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a completion ID from a string
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl std::fmt::Display for CompletionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Life areas a habit can belong to
///
/// Categories drive the per-category analytics, so the set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Exercise, diet, sleep
    Health,
    /// Job and study habits
    Work,
    /// Everything else
    Personal,
}

impl Category {
    /// All categories in their stable display/reporting order
    pub const ALL: [Category; 3] = [Category::Health, Category::Work, Category::Personal];

    /// Get the display name for this category
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Health => "Health",
            Category::Work => "Work",
            Category::Personal => "Personal",
        }
    }

    /// Parse a category from user input (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "health" => Some(Category::Health),
            "work" => Some(Category::Work),
            "personal" => Some(Category::Personal),
            _ => None,
        }
    }

    /// Lowercase form used for database storage and tool responses
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Health => "health",
            Category::Work => "work",
            Category::Personal => "personal",
        }
    }
}

/// How demanding a habit is for the user
///
/// Difficulty is descriptive metadata; it does not affect streak or
/// progress calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse a difficulty from user input (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Lowercase form used for database storage and tool responses
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}
