//! Persistence for planned workouts and split templates
//!
//! The collaborator downstream of the scheduling engine: one row per non-rest
//! day of a generated program (rest days are inferred by absence), plus
//! storage for user-authored split templates with exercises as a JSON column.

use chrono::{NaiveDate, Utc};
use sqlx::{Row, SqlitePool};

use crate::error::PlanError;
use crate::models::plan::{GeneratedProgram, NewPlannedWorkout, PlannedWorkout};
use crate::models::template::{ExercisePrescription, WorkoutBlockTemplate};

// ---------------------------------------------------------------------------
// Planned Workouts
// ---------------------------------------------------------------------------

/// Persist a generated program. Returns the number of rows inserted, which
/// equals the program's non-rest day count.
pub async fn save_program(
    pool: &SqlitePool,
    program: &GeneratedProgram,
) -> Result<u64, PlanError> {
    let mut inserted = 0;
    for day in &program.days {
        let Some(record) = NewPlannedWorkout::from_scheduled(day) else {
            continue;
        };
        insert_planned_workout(pool, &record).await?;
        inserted += 1;
    }
    Ok(inserted)
}

async fn insert_planned_workout(
    pool: &SqlitePool,
    record: &NewPlannedWorkout,
) -> Result<(), PlanError> {
    sqlx::query(
        r#"
        INSERT INTO planned_workouts (plan_date, day_name, exercises_json)
        VALUES (?1, ?2, ?3)
        "#,
    )
    .bind(record.plan_date)
    .bind(&record.day_name)
    .bind(&record.exercises_json)
    .execute(pool)
    .await
    .map_err(|e| PlanError::Database(format!("Failed to insert planned workout: {}", e)))?;

    Ok(())
}

/// Load planned workouts in a date range (inclusive), ordered by date
pub async fn load_planned_workouts(
    pool: &SqlitePool,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<PlannedWorkout>, PlanError> {
    sqlx::query_as::<_, PlannedWorkout>(
        r#"
        SELECT id, plan_date, day_name, exercises_json, completed_at, created_at
        FROM planned_workouts
        WHERE plan_date >= ?1 AND plan_date <= ?2
        ORDER BY plan_date
        "#,
    )
    .bind(from)
    .bind(to)
    .fetch_all(pool)
    .await
    .map_err(|e| PlanError::Database(format!("Failed to load planned workouts: {}", e)))
}

/// Load the planned workout for a single date, if any (None means rest day)
pub async fn get_planned_workout_for_date(
    pool: &SqlitePool,
    date: NaiveDate,
) -> Result<Option<PlannedWorkout>, PlanError> {
    sqlx::query_as::<_, PlannedWorkout>(
        r#"
        SELECT id, plan_date, day_name, exercises_json, completed_at, created_at
        FROM planned_workouts
        WHERE plan_date = ?1
        "#,
    )
    .bind(date)
    .fetch_optional(pool)
    .await
    .map_err(|e| PlanError::Database(format!("Failed to load planned workout: {}", e)))
}

/// Mark a planned workout as completed
pub async fn mark_completed(pool: &SqlitePool, id: i64) -> Result<(), PlanError> {
    let result = sqlx::query(
        r#"
        UPDATE planned_workouts
        SET completed_at = ?1
        WHERE id = ?2
        "#,
    )
    .bind(Utc::now())
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| PlanError::Database(format!("Failed to mark workout completed: {}", e)))?;

    if result.rows_affected() == 0 {
        return Err(PlanError::Database(format!(
            "No planned workout with id {}",
            id
        )));
    }
    Ok(())
}

/// Replace the plan from a date forward with a regenerated program.
/// Completed rows are never touched; only future, undone entries are
/// replaced. Program days before `from` are skipped on re-insert.
pub async fn replace_program_from(
    pool: &SqlitePool,
    from: NaiveDate,
    program: &GeneratedProgram,
) -> Result<u64, PlanError> {
    sqlx::query(
        r#"
        DELETE FROM planned_workouts
        WHERE plan_date >= ?1 AND completed_at IS NULL
        "#,
    )
    .bind(from)
    .execute(pool)
    .await
    .map_err(|e| PlanError::Database(format!("Failed to clear future workouts: {}", e)))?;

    let mut inserted = 0;
    for day in &program.days {
        if day.date < from {
            continue;
        }
        let Some(record) = NewPlannedWorkout::from_scheduled(day) else {
            continue;
        };
        insert_planned_workout(pool, &record).await?;
        inserted += 1;
    }
    Ok(inserted)
}

// ---------------------------------------------------------------------------
// Split Templates
// ---------------------------------------------------------------------------

/// Save a named split, replacing any previous version of it
pub async fn save_split_templates(
    pool: &SqlitePool,
    split_name: &str,
    templates: &[WorkoutBlockTemplate],
) -> Result<(), PlanError> {
    sqlx::query("DELETE FROM split_templates WHERE split_name = ?1")
        .bind(split_name)
        .execute(pool)
        .await
        .map_err(|e| PlanError::Database(format!("Failed to clear split: {}", e)))?;

    for (position, template) in templates.iter().enumerate() {
        let exercises_json = serde_json::to_string(&template.exercises)
            .map_err(|e| PlanError::Database(format!("Failed to encode exercises: {}", e)))?;

        sqlx::query(
            r#"
            INSERT INTO split_templates
                (split_name, position, day_name, exercises_json, is_rest_day)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(split_name)
        .bind(position as i64)
        .bind(&template.day_name)
        .bind(&exercises_json)
        .bind(template.is_rest_day)
        .execute(pool)
        .await
        .map_err(|e| PlanError::Database(format!("Failed to insert split template: {}", e)))?;
    }
    Ok(())
}

/// Load a named split's blocks in position order
pub async fn load_split_templates(
    pool: &SqlitePool,
    split_name: &str,
) -> Result<Vec<WorkoutBlockTemplate>, PlanError> {
    let rows = sqlx::query(
        r#"
        SELECT day_name, exercises_json, is_rest_day
        FROM split_templates
        WHERE split_name = ?1
        ORDER BY position
        "#,
    )
    .bind(split_name)
    .fetch_all(pool)
    .await
    .map_err(|e| PlanError::Database(format!("Failed to load split templates: {}", e)))?;

    let mut templates = Vec::with_capacity(rows.len());
    for row in rows {
        let exercises_json: String = row.get("exercises_json");
        let exercises: Vec<ExercisePrescription> = serde_json::from_str(&exercises_json)
            .map_err(|e| PlanError::Database(format!("Failed to decode exercises: {}", e)))?;

        templates.push(WorkoutBlockTemplate {
            day_name: row.get("day_name"),
            exercises,
            is_rest_day: row.get("is_rest_day"),
        });
    }
    Ok(templates)
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------
