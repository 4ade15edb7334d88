//! Predefined training splits
//!
//! The stock templates offered at plan creation before a user authors their
//! own. Each factory returns the ordered, cyclic block sequence the placement
//! engine consumes.

use crate::models::template::{ExercisePrescription, Progression, WorkoutBlockTemplate};

fn prescription(
  exercise_id: &str,
  name: &str,
  target_sets: i32,
  target_reps: i32,
  starting_weight_kg: f64,
  progression: Progression,
  order_index: i32,
) -> ExercisePrescription {
  ExercisePrescription {
    exercise_id: exercise_id.to_string(),
    name: name.to_string(),
    target_sets,
    target_reps,
    starting_weight_kg,
    progression,
    order_index,
  }
}

fn linear(increment_kg: f64) -> Progression {
  Progression::Linear { increment_kg }
}

fn double(min_reps: i32, max_reps: i32, increment_kg: f64) -> Progression {
  Progression::DoubleProgression {
    min_reps,
    max_reps,
    increment_kg,
  }
}

/// Three-day alternating full-body split (A/B/A, B/A/B next cycle)
pub fn full_body() -> Vec<WorkoutBlockTemplate> {
  vec![
    WorkoutBlockTemplate::workout(
      "Full Body A",
      vec![
        prescription("squat", "Back Squat", 3, 5, 60.0, linear(2.5), 0),
        prescription("bench", "Bench Press", 3, 5, 40.0, linear(2.5), 1),
        prescription("row", "Barbell Row", 3, 8, 40.0, linear(2.5), 2),
      ],
    ),
    WorkoutBlockTemplate::workout(
      "Full Body B",
      vec![
        prescription("deadlift", "Deadlift", 1, 5, 80.0, linear(5.0), 0),
        prescription("ohp", "Overhead Press", 3, 5, 30.0, linear(2.5), 1),
        prescription("pullup", "Pull-Up", 3, 8, 0.0, double(5, 8, 2.5), 2),
      ],
    ),
  ]
}

/// Upper/lower split
pub fn upper_lower() -> Vec<WorkoutBlockTemplate> {
  vec![
    WorkoutBlockTemplate::workout(
      "Upper",
      vec![
        prescription("bench", "Bench Press", 4, 6, 50.0, linear(2.5), 0),
        prescription("row", "Barbell Row", 4, 6, 50.0, linear(2.5), 1),
        prescription("ohp", "Overhead Press", 3, 8, 30.0, double(8, 12, 2.5), 2),
        prescription("curl", "Barbell Curl", 3, 10, 20.0, double(10, 15, 2.5), 3),
      ],
    ),
    WorkoutBlockTemplate::workout(
      "Lower",
      vec![
        prescription("squat", "Back Squat", 4, 6, 70.0, linear(2.5), 0),
        prescription("rdl", "Romanian Deadlift", 3, 8, 60.0, linear(2.5), 1),
        prescription("lunge", "Walking Lunge", 3, 10, 20.0, double(10, 12, 2.5), 2),
        prescription("calf", "Calf Raise", 4, 12, 40.0, double(12, 15, 5.0), 3),
      ],
    ),
  ]
}

/// Push/pull/legs split
pub fn push_pull_legs() -> Vec<WorkoutBlockTemplate> {
  vec![
    WorkoutBlockTemplate::workout(
      "Push",
      vec![
        prescription("bench", "Bench Press", 4, 6, 50.0, linear(2.5), 0),
        prescription("ohp", "Overhead Press", 3, 8, 30.0, linear(2.5), 1),
        prescription("incline-db", "Incline Dumbbell Press", 3, 10, 17.5, double(8, 12, 2.5), 2),
        prescription("triceps", "Triceps Pushdown", 3, 12, 20.0, double(10, 15, 2.5), 3),
      ],
    ),
    WorkoutBlockTemplate::workout(
      "Pull",
      vec![
        prescription("deadlift", "Deadlift", 1, 5, 90.0, linear(5.0), 0),
        prescription("pullup", "Pull-Up", 4, 8, 0.0, double(6, 10, 2.5), 1),
        prescription("row", "Barbell Row", 3, 8, 50.0, linear(2.5), 2),
        prescription("curl", "Barbell Curl", 3, 10, 20.0, double(10, 15, 2.5), 3),
      ],
    ),
    WorkoutBlockTemplate::workout(
      "Legs",
      vec![
        prescription("squat", "Back Squat", 4, 6, 70.0, linear(2.5), 0),
        prescription("rdl", "Romanian Deadlift", 3, 8, 60.0, linear(2.5), 1),
        prescription("legpress", "Leg Press", 3, 10, 100.0, double(10, 15, 10.0), 2),
        prescription("calf", "Calf Raise", 4, 12, 40.0, double(12, 15, 5.0), 3),
      ],
    ),
  ]
}
