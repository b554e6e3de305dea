/// SQLite implementation of the habit storage interface
///
/// This module provides the concrete SQLite implementation for storing
/// and retrieving habit data. It handles all SQL queries and data
/// conversion between database rows and domain types.

use std::path::PathBuf;
use rusqlite::{params, Connection, OptionalExtension};
use chrono::NaiveDate;

use crate::domain::{Category, Completion, CompletionId, Difficulty, Habit, HabitId};
use crate::storage::{migrations, HabitStore, StorageError};

/// SQLite-based storage implementation
///
/// This struct holds a connection to the SQLite database and implements
/// all the storage operations defined in the HabitStore trait.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SQLite storage instance
    ///
    /// This opens the database file and runs any necessary migrations
    /// to ensure the schema is up to date.
    pub fn new(db_path: PathBuf) -> Result<Self, StorageError> {
        let conn = Connection::open(&db_path)
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        // Cascading habit deletion relies on foreign keys being enforced
        conn.execute("PRAGMA foreign_keys = ON", []).map_err(|e| {
            StorageError::Connection(format!("Failed to enable foreign keys: {}", e))
        })?;

        migrations::initialize_database(&conn)?;

        tracing::info!("SQLite storage initialized at: {:?}", db_path);

        Ok(Self { conn })
    }

    /// In-memory store, used by tests and throwaway sessions
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;
        conn.execute("PRAGMA foreign_keys = ON", []).map_err(|e| {
            StorageError::Connection(format!("Failed to enable foreign keys: {}", e))
        })?;
        migrations::initialize_database(&conn)?;
        Ok(Self { conn })
    }

    /// Map a habit row (id, name, category, difficulty, created_at)
    fn habit_from_row(row: &rusqlite::Row<'_>) -> Result<Habit, rusqlite::Error> {
        let id_str: String = row.get(0)?;
        let id = HabitId::from_string(&id_str).map_err(|_| {
            rusqlite::Error::InvalidColumnType(0, "Invalid UUID".to_string(), rusqlite::types::Type::Text)
        })?;

        let category_str: String = row.get(2)?;
        let category = Category::parse(&category_str).ok_or_else(|| {
            rusqlite::Error::InvalidColumnType(2, "Invalid category".to_string(), rusqlite::types::Type::Text)
        })?;

        let difficulty_str: String = row.get(3)?;
        let difficulty = Difficulty::parse(&difficulty_str).ok_or_else(|| {
            rusqlite::Error::InvalidColumnType(3, "Invalid difficulty".to_string(), rusqlite::types::Type::Text)
        })?;

        let created_at_str: String = row.get(4)?;
        let created_at = chrono::DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|_| {
                rusqlite::Error::InvalidColumnType(4, "Invalid datetime".to_string(), rusqlite::types::Type::Text)
            })?
            .with_timezone(&chrono::Utc);

        Ok(Habit::from_existing(id, row.get(1)?, category, difficulty, created_at))
    }

    /// Map a completion row (id, habit_id, completed_on, logged_at)
    fn completion_from_row(row: &rusqlite::Row<'_>) -> Result<Completion, rusqlite::Error> {
        let id_str: String = row.get(0)?;
        let id = CompletionId::from_string(&id_str).map_err(|_| {
            rusqlite::Error::InvalidColumnType(0, "Invalid UUID".to_string(), rusqlite::types::Type::Text)
        })?;

        let habit_id_str: String = row.get(1)?;
        let habit_id = HabitId::from_string(&habit_id_str).map_err(|_| {
            rusqlite::Error::InvalidColumnType(1, "Invalid UUID".to_string(), rusqlite::types::Type::Text)
        })?;

        let completed_on_str: String = row.get(2)?;
        let completed_on = NaiveDate::parse_from_str(&completed_on_str, "%Y-%m-%d").map_err(|_| {
            rusqlite::Error::InvalidColumnType(2, "Invalid date".to_string(), rusqlite::types::Type::Text)
        })?;

        let logged_at_str: String = row.get(3)?;
        let logged_at = chrono::DateTime::parse_from_rfc3339(&logged_at_str)
            .map_err(|_| {
                rusqlite::Error::InvalidColumnType(3, "Invalid datetime".to_string(), rusqlite::types::Type::Text)
            })?
            .with_timezone(&chrono::Utc);

        Ok(Completion::from_existing(id, habit_id, completed_on, logged_at))
    }
}

impl HabitStore for SqliteStore {
    /// Create a new habit in the database
    fn create_habit(&self, habit: &Habit) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO habits (id, name, category, difficulty, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                habit.id.to_string(),
                habit.name,
                habit.category.as_str(),
                habit.difficulty.as_str(),
                habit.created_at.to_rfc3339(),
            ],
        )?;

        tracing::debug!("Created habit: {} ({})", habit.name, habit.id);
        Ok(())
    }

    /// Get a habit by its ID
    fn get_habit(&self, habit_id: &HabitId) -> Result<Habit, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, category, difficulty, created_at FROM habits WHERE id = ?1",
        )?;

        let result = stmt.query_row(params![habit_id.to_string()], Self::habit_from_row);

        match result {
            Ok(habit) => Ok(habit),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(StorageError::HabitNotFound {
                habit_id: habit_id.to_string(),
            }),
            Err(e) => Err(StorageError::Query(e)),
        }
    }

    /// Hard delete a habit; completions cascade with it
    fn delete_habit(&self, habit_id: &HabitId) -> Result<(), StorageError> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM habits WHERE id = ?1", params![habit_id.to_string()])?;

        if rows_affected == 0 {
            return Err(StorageError::HabitNotFound {
                habit_id: habit_id.to_string(),
            });
        }

        tracing::debug!("Deleted habit: {}", habit_id);
        Ok(())
    }

    /// List habits with optional category filtering
    fn list_habits(&self, category: Option<Category>) -> Result<Vec<Habit>, StorageError> {
        let mut sql =
            "SELECT id, name, category, difficulty, created_at FROM habits".to_string();

        if category.is_some() {
            sql.push_str(" WHERE category = ?1");
        }

        sql.push_str(" ORDER BY created_at DESC");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut habits = Vec::new();

        match category {
            Some(cat) => {
                let rows = stmt.query_map(params![cat.as_str()], Self::habit_from_row)?;
                for habit in rows {
                    habits.push(habit?);
                }
            }
            None => {
                let rows = stmt.query_map([], Self::habit_from_row)?;
                for habit in rows {
                    habits.push(habit?);
                }
            }
        }

        Ok(habits)
    }

    /// Toggle the completion record for a habit and date
    fn toggle_completion(
        &self,
        habit_id: &HabitId,
        date: NaiveDate,
    ) -> Result<bool, StorageError> {
        let existing: Option<String> = self
            .conn
            .query_row(
                "SELECT id FROM completions WHERE habit_id = ?1 AND completed_on = ?2",
                params![habit_id.to_string(), date.to_string()],
                |row| row.get(0),
            )
            .optional()?;

        match existing {
            Some(completion_id) => {
                self.conn
                    .execute("DELETE FROM completions WHERE id = ?1", params![completion_id])?;
                tracing::debug!("Removed completion for habit {} on {}", habit_id, date);
                Ok(false)
            }
            None => {
                let completion = Completion::new(habit_id.clone(), date);
                self.conn.execute(
                    "INSERT INTO completions (id, habit_id, completed_on, logged_at)
                     VALUES (?1, ?2, ?3, ?4)",
                    params![
                        completion.id.to_string(),
                        completion.habit_id.to_string(),
                        completion.completed_on.to_string(),
                        completion.logged_at.to_rfc3339(),
                    ],
                )?;
                tracing::debug!("Logged completion for habit {} on {}", habit_id, date);
                Ok(true)
            }
        }
    }

    /// Get all completions for a specific habit, newest first
    fn completions_for_habit(&self, habit_id: &HabitId) -> Result<Vec<Completion>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, habit_id, completed_on, logged_at
             FROM completions WHERE habit_id = ?1
             ORDER BY completed_on DESC",
        )?;

        let rows = stmt.query_map(params![habit_id.to_string()], Self::completion_from_row)?;

        let mut completions = Vec::new();
        for completion in rows {
            completions.push(completion?);
        }

        Ok(completions)
    }

    /// Get all completions within an inclusive date range
    fn completions_in_range(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<Completion>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, habit_id, completed_on, logged_at
             FROM completions
             WHERE completed_on BETWEEN ?1 AND ?2
             ORDER BY completed_on DESC",
        )?;

        let rows = stmt.query_map(
            params![start_date.to_string(), end_date.to_string()],
            Self::completion_from_row,
        )?;

        let mut completions = Vec::new();
        for completion in rows {
            completions.push(completion?);
        }

        Ok(completions)
    }
}
