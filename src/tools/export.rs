/// Tool for exporting all habit data as JSON
///
/// This module implements the habit_export MCP tool, the portable backup
/// of a user's habits and completion history.

use serde::Serialize;
use chrono::Utc;
use crate::storage::{HabitStore, StorageError};

/// One habit with its full completion history, in export form
#[derive(Debug, Serialize)]
pub struct HabitExport {
    pub id: String,
    pub name: String,
    pub category: String,
    pub difficulty: String,
    pub created_at: String,
    /// Completion dates as ISO `YYYY-MM-DD` strings, newest first
    pub completions: Vec<String>,
}

/// Response from exporting habit data
#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub exported_at: String,
    pub habits: Vec<HabitExport>,
    /// The export itself, pretty-printed for saving to a file
    pub message: String,
}

/// Export every habit and its completions using the provided storage
pub fn export_habits<S: HabitStore>(storage: &S) -> Result<ExportResponse, StorageError> {
    let habits = storage.list_habits(None)?;

    let mut exports = Vec::with_capacity(habits.len());
    for habit in habits {
        let completions = storage.completions_for_habit(&habit.id)?;
        exports.push(HabitExport {
            id: habit.id.to_string(),
            name: habit.name,
            category: habit.category.as_str().to_string(),
            difficulty: habit.difficulty.as_str().to_string(),
            created_at: habit.created_at.to_rfc3339(),
            completions: completions.iter().map(|c| c.completed_on.to_string()).collect(),
        });
    }

    let message = serde_json::to_string_pretty(&exports)?;

    Ok(ExportResponse {
        exported_at: Utc::now().to_rfc3339(),
        habits: exports,
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Difficulty, Habit};
    use crate::storage::SqliteStore;
    use chrono::NaiveDate;

    #[test]
    fn test_export_includes_completions() {
        let storage = SqliteStore::open_in_memory().unwrap();
        let habit = Habit::new("Run".to_string(), Category::Health, Difficulty::Easy).unwrap();
        storage.create_habit(&habit).unwrap();
        storage
            .toggle_completion(&habit.id, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
            .unwrap();

        let export = export_habits(&storage).unwrap();

        assert_eq!(export.habits.len(), 1);
        assert_eq!(export.habits[0].completions, vec!["2024-01-15".to_string()]);
        assert!(export.message.contains("\"2024-01-15\""));
    }

    #[test]
    fn test_export_empty_store() {
        let storage = SqliteStore::open_in_memory().unwrap();
        let export = export_habits(&storage).unwrap();

        assert!(export.habits.is_empty());
        assert_eq!(export.message.trim(), "[]");
    }
}
