/// Storage layer for persisting habit data
///
/// This module handles all database operations using SQLite. It provides
/// a clean interface for storing and retrieving habits and completions,
/// with toggle semantics guaranteeing at most one completion per habit and
/// calendar date.

pub mod sqlite;
pub mod migrations;

// Re-export the main storage types
pub use sqlite::*;

use chrono::NaiveDate;
use thiserror::Error;
use crate::domain::{Category, Completion, Habit, HabitId};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Habit not found: {habit_id}")]
    HabitNotFound { habit_id: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Migration error: {0}")]
    Migration(String),
}

/// Trait defining the storage interface for habits and completions
///
/// This trait allows swapping SQLite for another backend while keeping the
/// same interface, and lets the tool layer be tested against any store.
pub trait HabitStore {
    /// Create a new habit
    fn create_habit(&self, habit: &Habit) -> Result<(), StorageError>;

    /// Get a habit by ID
    fn get_habit(&self, habit_id: &HabitId) -> Result<Habit, StorageError>;

    /// Delete a habit and all of its completions
    fn delete_habit(&self, habit_id: &HabitId) -> Result<(), StorageError>;

    /// List habits, optionally filtered by category, newest first
    fn list_habits(&self, category: Option<Category>) -> Result<Vec<Habit>, StorageError>;

    /// Toggle the completion for a habit on a date
    ///
    /// Removes the completion if one exists for the (habit, date) key,
    /// creates it otherwise. Returns true when the habit is completed on
    /// that date after the call.
    fn toggle_completion(&self, habit_id: &HabitId, date: NaiveDate)
        -> Result<bool, StorageError>;

    /// Get all completions for a specific habit
    fn completions_for_habit(&self, habit_id: &HabitId) -> Result<Vec<Completion>, StorageError>;

    /// Get all completions (any habit) within an inclusive date range
    fn completions_in_range(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<Completion>, StorageError>;
}
