//! Workout-split scheduling engine
//!
//! Takes a set of training days per week, a rest-day distribution policy, and
//! a cyclic sequence of workout blocks, then deterministically produces a
//! 7-day week schedule and extends it across a program horizon anchored to a
//! calendar start date.
//!
//! The core (placement + planner) is pure and synchronous; persisting the
//! generated program as planned-workout records lives behind the async store.

pub mod db;
pub mod error;
pub mod models;
pub mod placement;
pub mod planner;
pub mod splits;
pub mod store;

#[cfg(test)]
mod test_utils;

pub use db::{initialize_db, DbPool};
pub use error::PlanError;
pub use models::plan::{GeneratedProgram, NewPlannedWorkout, PlannedWorkout, ScheduledDay};
pub use models::schedule::{DayBlock, WeekSchedule, DAYS_PER_WEEK};
pub use models::template::{ExercisePrescription, Progression, WorkoutBlockTemplate};
pub use placement::{strategy_for, BlockCycle, PlacementStrategy, RestDayPlacement};
pub use planner::{generate_plan, generate_program, generate_week, PlanRequest};
