//! Test utilities and helpers for integration and unit testing
//!
//! This module provides common test infrastructure including:
//! - Database setup/teardown
//! - Mock data factories
//! - Date helpers
//! - Helper assertions

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::models::template::{ExercisePrescription, Progression, WorkoutBlockTemplate};

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing
/// Runs all migrations and returns a ready-to-use pool
///
/// Uses max_connections(1) to prevent multiple pool connections from creating
/// isolated in-memory databases, which would cause intermittent test failures
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  // Run migrations
  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

/// Close a test database pool
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// Create a mock exercise prescription
pub fn mock_prescription(name: &str, order_index: i32) -> ExercisePrescription {
  ExercisePrescription {
    exercise_id: name.to_lowercase().replace(' ', "-"),
    name: name.to_string(),
    target_sets: 3,
    target_reps: 8,
    starting_weight_kg: 50.0,
    progression: Progression::Linear { increment_kg: 2.5 },
    order_index,
  }
}

/// Create a mock one-exercise workout block
pub fn mock_template(day_name: &str) -> WorkoutBlockTemplate {
  WorkoutBlockTemplate::workout(day_name, vec![mock_prescription("Bench Press", 0)])
}

/// Create a mock three-day split
pub fn mock_split() -> Vec<WorkoutBlockTemplate> {
  vec![
    mock_template("Push"),
    mock_template("Pull"),
    mock_template("Legs"),
  ]
}

/// ---------------------------------------------------------------------------
/// Date Helpers
/// ---------------------------------------------------------------------------

/// Build a NaiveDate, panicking on invalid components (tests only)
pub fn naive_date(year: i32, month: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, month, day).expect("Invalid test date")
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_setup_db_creates_schema() {
    let pool = setup_test_db().await;

    // Verify key tables exist
    let tables: Vec<(String,)> = sqlx::query_as(
      "SELECT name FROM sqlite_master WHERE type='table' AND name IN ('planned_workouts', 'split_templates')"
    )
    .fetch_all(&pool)
    .await
    .expect("Failed to query tables");

    assert_eq!(tables.len(), 2, "Expected 2 tables, got {}", tables.len());

    teardown_test_db(pool).await;
  }

  #[test]
  fn test_mock_factories_create_valid_data() {
    let prescription = mock_prescription("Back Squat", 2);
    assert_eq!(prescription.exercise_id, "back-squat");
    assert_eq!(prescription.order_index, 2);

    let template = mock_template("Push");
    assert!(!template.is_rest_day);
    assert!(!template.exercises.is_empty());

    let split = mock_split();
    assert_eq!(split.len(), 3);
  }

  #[test]
  fn test_naive_date_helper() {
    let date = naive_date(2026, 3, 2);
    assert_eq!(date.to_string(), "2026-03-02");
  }
}
