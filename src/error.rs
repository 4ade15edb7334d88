/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------
///
/// Every failure in plan generation is deterministic, local, and synchronous:
/// either the caller supplied an invalid configuration, or an internal week
/// invariant was violated. Nothing here is transient, so nothing is retried.

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
  #[error("No workout days in template")]
  EmptyWorkoutBlocks,

  #[error("No rest day placement configured")]
  MissingRestPlacement,

  #[error("Training days per week must be 0-7, got {0}")]
  InvalidTrainingDays(u8),

  #[error("Workout day '{0}' has no exercises")]
  EmptyWorkoutDay(String),

  #[error("Custom rest day index {0} is outside 0-6")]
  CustomRestDayOutOfRange(usize),

  #[error("Duplicate custom rest day index {0}")]
  DuplicateCustomRestDay(usize),

  #[error("Week schedule must have exactly 7 days, got {0}")]
  MalformedWeekSchedule(usize),

  #[error("Program length must be at least 1 day, got {0}")]
  InvalidProgramLength(i64),

  #[error("Database error: {0}")]
  Database(String),
}

impl serde::Serialize for PlanError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}
