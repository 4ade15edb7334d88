use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::models::template::{ExercisePrescription, WorkoutBlockTemplate};

pub const DAYS_PER_WEEK: usize = 7;

/// ---------------------------------------------------------------------------
/// Day Block: one day's content, either rest or a named set of exercises
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DayBlock {
  Rest,
  Workout {
    day_name: String,
    exercises: Vec<ExercisePrescription>,
  },
}

impl DayBlock {
  pub fn from_template(template: &WorkoutBlockTemplate) -> Self {
    if template.is_rest_day {
      DayBlock::Rest
    } else {
      DayBlock::Workout {
        day_name: template.day_name.clone(),
        exercises: template.exercises.clone(),
      }
    }
  }

  pub fn is_rest(&self) -> bool {
    matches!(self, DayBlock::Rest)
  }

  pub fn day_name(&self) -> Option<&str> {
    match self {
      DayBlock::Rest => None,
      DayBlock::Workout { day_name, .. } => Some(day_name),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Week Schedule: exactly 7 day blocks
/// ---------------------------------------------------------------------------

/// Index 0 is the first day of the week as anchored by the caller, not
/// necessarily Monday. The 7-slot invariant is enforced here so a strategy
/// that misbehaves is caught at the generation boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSchedule {
  days: Vec<DayBlock>,
}

impl WeekSchedule {
  pub fn new(days: Vec<DayBlock>) -> Result<Self, PlanError> {
    if days.len() != DAYS_PER_WEEK {
      return Err(PlanError::MalformedWeekSchedule(days.len()));
    }
    Ok(Self { days })
  }

  pub fn days(&self) -> &[DayBlock] {
    &self.days
  }

  pub fn training_day_count(&self) -> usize {
    self.days.iter().filter(|d| !d.is_rest()).count()
  }

  pub fn rest_day_count(&self) -> usize {
    DAYS_PER_WEEK - self.training_day_count()
  }
}

impl std::ops::Index<usize> for WeekSchedule {
  type Output = DayBlock;

  fn index(&self, index: usize) -> &DayBlock {
    &self.days[index]
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
