/// Domain module containing core business entities
///
/// This module defines the core entities (Habit, Completion) and their
/// validation rules. These types represent the fundamental concepts in the
/// habit tracking system; the analytics that operate over them live in the
/// analytics module.

pub mod habit;
pub mod completion;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use completion::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Invalid difficulty: {0}")]
    InvalidDifficulty(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
