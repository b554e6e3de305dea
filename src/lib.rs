/// Public library interface for the Habit Board MCP server
///
/// This module exports the main server implementation and public types
/// that can be used by other applications or tests.

use std::path::PathBuf;
use thiserror::Error;

// Internal modules
mod domain;
mod analytics;
mod storage;
mod tools;
mod mcp;

// Re-export public modules and types
pub use domain::*;
pub use analytics::{
    category_performance, current_streak, heatmap, monthly_progress, overview, weekly_progress,
    CategoryPerformance, CompletionSet, DayActivity, HabitHistory, HabitStats, Intensity,
    Overview, CATEGORY_WINDOW_DAYS, HEATMAP_WINDOW_DAYS,
};
pub use storage::{HabitStore, SqliteStore, StorageError};
pub use tools::{
    create_habit, delete_habit, export_habits, get_analytics, get_habit_status, list_habits,
    toggle_habit, AnalyticsParams, CreateHabitParams, DeleteHabitParams, ListHabitsParams,
    StatusParams, ToggleHabitParams,
};

/// Errors that can occur during server operation
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Database error: {0}")]
    Database(#[from] storage::StorageError),

    #[error("Domain validation error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Main habit board server that implements the MCP protocol
///
/// This server manages habit data through a SQLite database and provides
/// tools for creating habits, toggling daily completions, and reading
/// streak and calendar analytics.
pub struct HabitBoardServer {
    storage: SqliteStore,
}

impl HabitBoardServer {
    /// Create a new habit board server with the specified database path
    ///
    /// This will initialize the SQLite database with the required schema
    /// if it doesn't already exist.
    pub async fn new(db_path: PathBuf) -> Result<Self, ServerError> {
        tracing::info!("Initializing Habit Board server with database: {:?}", db_path);

        let storage = SqliteStore::new(db_path)?;

        Ok(Self { storage })
    }

    /// Run the MCP server, handling JSON-RPC requests over stdin/stdout
    ///
    /// This method will block until the server is shut down or an error occurs.
    pub async fn run(self) -> Result<(), ServerError> {
        tracing::info!("Starting MCP server...");

        // Test database connectivity
        let habits = self.storage.list_habits(None)?;
        tracing::info!("Server started successfully, found {} existing habits", habits.len());

        let mut mcp_server = mcp::McpServer::new(self);
        mcp_server.run().await?;

        Ok(())
    }

    /// Get a reference to the storage layer (useful for testing)
    pub fn storage(&self) -> &SqliteStore {
        &self.storage
    }
}
