use tempfile::TempDir;
use waypoint_core::TripPlannerBuilder;

/// Helper function to create a test planner
pub async fn create_test_planner() -> (TempDir, waypoint_core::TripPlanner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = TripPlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}
