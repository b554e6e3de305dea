/// Basic unit tests to verify core functionality through the public API
use habit_board_mcp::*;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_habit_creation() {
    let habit = Habit::new(
        "Test Habit".to_string(),
        Category::Health,
        Difficulty::Medium,
    );

    assert!(habit.is_ok());
    let habit = habit.unwrap();
    assert_eq!(habit.name, "Test Habit");
}

#[test]
fn test_empty_habit_has_zero_stats() {
    let today = date(2024, 1, 15);
    let set = CompletionSet::new();

    assert_eq!(current_streak(&set, today), 0);
    assert_eq!(weekly_progress(&set, today), 0);
    assert_eq!(monthly_progress(&set, today), 0);
}

#[test]
fn test_three_day_streak_ignores_disconnected_history() {
    // completions {today, today-1, today-2} -> 3
    let today = date(2024, 1, 15);
    let mut set = CompletionSet::from_iso_dates(["2024-01-15", "2024-01-14", "2024-01-13"]);
    assert_eq!(current_streak(&set, today), 3);

    // Adding today-4 (skipping today-3) does not change the streak
    set.insert(date(2024, 1, 11));
    assert_eq!(current_streak(&set, today), 3);
}

#[test]
fn test_storage_creation() {
    let temp_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let storage = SqliteStore::new(temp_file.path().to_path_buf());
    assert!(storage.is_ok());
}

#[test]
fn test_storage_toggle_roundtrip() {
    let storage = SqliteStore::open_in_memory().unwrap();
    let habit = Habit::new("Run".to_string(), Category::Health, Difficulty::Easy).unwrap();
    storage.create_habit(&habit).unwrap();

    let day = date(2024, 1, 15);
    assert!(storage.toggle_completion(&habit.id, day).unwrap());
    assert!(!storage.toggle_completion(&habit.id, day).unwrap());
    assert!(storage.completions_for_habit(&habit.id).unwrap().is_empty());
}

#[tokio::test]
async fn test_server_creation() {
    let temp_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let server = HabitBoardServer::new(temp_file.path().to_path_buf()).await;
    assert!(server.is_ok());
}
