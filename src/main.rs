/// Main entry point for the Habit Board MCP server
///
/// This file sets up logging, parses command line arguments, and starts the
/// MCP server. The server listens for JSON-RPC requests over stdin/stdout.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use habit_board_mcp::HabitBoardServer;

/// Get the default database path with a fallback strategy
fn get_default_database_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Preferred locations, most specific first
    let potential_paths = [
        dirs::home_dir().map(|mut p| {
            p.push(".habit_board");
            p
        }),
        dirs::data_dir().map(|mut p| {
            p.push("habit_board");
            p
        }),
    ];

    for potential_path in potential_paths.iter().flatten() {
        if std::fs::create_dir_all(potential_path).is_ok() {
            let mut db_path = potential_path.clone();
            db_path.push("habits.db");
            return Ok(db_path);
        }
    }

    // Fallback: use a temporary directory
    let mut temp_path = std::env::temp_dir();
    temp_path.push("habit_board");
    std::fs::create_dir_all(&temp_path)?;
    temp_path.push("habits.db");

    tracing::warn!("Using temporary directory for database: {}", temp_path.display());
    Ok(temp_path)
}

/// Command line arguments for the Habit Board MCP server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the SQLite database file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long)]
    database: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_board_mcp={}", log_level))
        .with_writer(std::io::stderr) // Logs go to stderr; stdout carries JSON-RPC
        .init();

    info!("Starting Habit Board MCP server");

    let db_path = match args.database {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path
        }
        None => get_default_database_path()?,
    };

    info!("Using database at: {}", db_path.display());

    let server = HabitBoardServer::new(db_path).await?;
    server.run().await?;

    info!("Habit Board MCP server shutdown complete");
    Ok(())
}
