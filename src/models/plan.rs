use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::schedule::DayBlock;
use crate::models::template::ExercisePrescription;

/// ---------------------------------------------------------------------------
/// Generated Program: the week pattern expanded across a calendar horizon
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledDay {
  pub date: NaiveDate,
  pub block: DayBlock,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedProgram {
  pub start_date: NaiveDate,
  pub days: Vec<ScheduledDay>,
}

impl GeneratedProgram {
  pub fn len(&self) -> usize {
    self.days.len()
  }

  pub fn is_empty(&self) -> bool {
    self.days.is_empty()
  }

  pub fn training_days(&self) -> impl Iterator<Item = &ScheduledDay> {
    self.days.iter().filter(|d| !d.block.is_rest())
  }
}

/// ---------------------------------------------------------------------------
/// Planned Workout: the persisted record for one non-rest day
/// ---------------------------------------------------------------------------

/// Rest days are not stored; a date with no row is a rest day.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PlannedWorkout {
  pub id: i64,
  pub plan_date: NaiveDate,
  pub day_name: String,
  pub exercises_json: String,
  pub completed_at: Option<DateTime<Utc>>,
  pub created_at: Option<DateTime<Utc>>,
}

impl PlannedWorkout {
  pub fn exercises(&self) -> Result<Vec<ExercisePrescription>, String> {
    serde_json::from_str(&self.exercises_json)
      .map_err(|e| format!("Failed to parse exercises: {}", e))
  }

  pub fn is_completed(&self) -> bool {
    self.completed_at.is_some()
  }
}

/// For inserting new planned workouts (without id, created_at)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPlannedWorkout {
  pub plan_date: NaiveDate,
  pub day_name: String,
  pub exercises_json: String,
}

impl NewPlannedWorkout {
  /// Row shape for one scheduled day. Returns None for rest days, which are
  /// never persisted.
  pub fn from_scheduled(day: &ScheduledDay) -> Option<Self> {
    match &day.block {
      DayBlock::Rest => None,
      DayBlock::Workout {
        day_name,
        exercises,
      } => Some(Self {
        plan_date: day.date,
        day_name: day_name.clone(),
        exercises_json: serde_json::to_string(exercises).unwrap_or_default(),
      }),
    }
  }
}
