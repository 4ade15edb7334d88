pub mod plan;
pub mod schedule;
pub mod template;

pub use plan::{GeneratedProgram, PlannedWorkout, ScheduledDay};
pub use schedule::{DayBlock, WeekSchedule};
pub use template::WorkoutBlockTemplate;
