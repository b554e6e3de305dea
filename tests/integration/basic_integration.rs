/// End-to-end tests driving the tool layer against a real SQLite store
use habit_board_mcp::*;
use tempfile::NamedTempFile;

#[tokio::test]
async fn test_server_basic_workflow() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let server = HabitBoardServer::new(temp_file.path().to_path_buf())
        .await
        .expect("Failed to create server");

    let storage = server.storage();
    assert!(storage.list_habits(None).unwrap().is_empty());
}

#[tokio::test]
async fn test_database_persistence() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = temp_file.path().to_path_buf();

    // Create a habit through the first server instance
    let habit_id = {
        let server = HabitBoardServer::new(db_path.clone())
            .await
            .expect("Failed to create first server");

        let response = create_habit(
            server.storage(),
            CreateHabitParams {
                name: "Meditate".to_string(),
                category: "personal".to_string(),
                difficulty: None,
            },
        )
        .expect("Failed to create habit");
        response.habit_id.expect("Missing habit id")
    };

    // A second server over the same file must see it
    let server2 = HabitBoardServer::new(db_path)
        .await
        .expect("Failed to create second server");
    let habits = server2.storage().list_habits(None).unwrap();
    assert_eq!(habits.len(), 1);
    assert_eq!(habits[0].id.to_string(), habit_id);
}

#[test]
fn test_create_toggle_status_flow() {
    let storage = SqliteStore::open_in_memory().expect("Failed to create storage");

    // Create
    let created = create_habit(
        &storage,
        CreateHabitParams {
            name: "Morning Run".to_string(),
            category: "health".to_string(),
            difficulty: Some("hard".to_string()),
        },
    )
    .unwrap();
    let habit_id = created.habit_id.unwrap();

    // Toggle on for today
    let toggled = toggle_habit(&storage, ToggleHabitParams { habit_id: habit_id.clone() }).unwrap();
    assert!(toggled.completed);
    assert_eq!(toggled.current_streak, 1);

    // Status reflects the completion
    let status = get_habit_status(&storage, StatusParams { habit_id: Some(habit_id.clone()) }).unwrap();
    assert_eq!(status.habits.len(), 1);
    assert!(status.habits[0].completed_today);
    assert_eq!(status.habits[0].current_streak, 1);
    assert_eq!(status.habits[0].weekly_progress, 1);
    assert_eq!(status.habits[0].monthly_progress, 1);

    // Analytics sees one completion today across the board
    let analytics = get_analytics(&storage, AnalyticsParams { window_days: Some(7) }).unwrap();
    assert_eq!(analytics.overview.total_habits, 1);
    assert_eq!(analytics.overview.completed_today, 1);
    assert_eq!(analytics.heatmap.last().unwrap().count, 1);

    // Toggle off again
    let untoggled = toggle_habit(&storage, ToggleHabitParams { habit_id: habit_id.clone() }).unwrap();
    assert!(!untoggled.completed);
    assert_eq!(untoggled.current_streak, 0);
}

#[test]
fn test_delete_removes_history_from_analytics() {
    let storage = SqliteStore::open_in_memory().expect("Failed to create storage");

    let created = create_habit(
        &storage,
        CreateHabitParams {
            name: "Inbox zero".to_string(),
            category: "work".to_string(),
            difficulty: None,
        },
    )
    .unwrap();
    let habit_id = created.habit_id.unwrap();

    toggle_habit(&storage, ToggleHabitParams { habit_id: habit_id.clone() }).unwrap();
    delete_habit(&storage, DeleteHabitParams { habit_id }).unwrap();

    let analytics = get_analytics(&storage, AnalyticsParams { window_days: None }).unwrap();
    assert_eq!(analytics.overview.total_habits, 0);
    assert!(analytics.heatmap.iter().all(|d| d.count == 0));

    let export = export_habits(&storage).unwrap();
    assert!(export.habits.is_empty());
}

#[test]
fn test_export_roundtrip_shape() {
    let storage = SqliteStore::open_in_memory().expect("Failed to create storage");

    create_habit(
        &storage,
        CreateHabitParams {
            name: "Read".to_string(),
            category: "personal".to_string(),
            difficulty: Some("easy".to_string()),
        },
    )
    .unwrap();

    let export = export_habits(&storage).unwrap();
    assert_eq!(export.habits.len(), 1);
    assert_eq!(export.habits[0].category, "personal");

    // The message is a parseable JSON document
    let parsed: serde_json::Value = serde_json::from_str(&export.message).unwrap();
    assert!(parsed.is_array());
}
