use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Progression: how a prescribed load advances between sessions
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Progression {
  /// Add a fixed load every session
  Linear { increment_kg: f64 },
  /// Work reps up to max_reps at a load, then add load and drop back to min_reps
  DoubleProgression {
    min_reps: i32,
    max_reps: i32,
    increment_kg: f64,
  },
  /// Load held constant (warm-ups, mobility, deload work)
  Static,
}

impl Progression {
  pub fn from_json(json: &str) -> Result<Self, String> {
    serde_json::from_str(json).map_err(|e| format!("Failed to parse progression: {}", e))
  }

  pub fn to_json(&self) -> String {
    serde_json::to_string(self).unwrap_or_default()
  }

  /// Next prescribed load given the reps hit in the last completed session
  pub fn next_weight(&self, current_kg: f64, last_reps: i32) -> f64 {
    match self {
      Progression::Linear { increment_kg } => current_kg + increment_kg,
      Progression::DoubleProgression {
        max_reps,
        increment_kg,
        ..
      } => {
        if last_reps >= *max_reps {
          current_kg + increment_kg
        } else {
          current_kg
        }
      }
      Progression::Static => current_kg,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Exercise Prescription
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExercisePrescription {
  pub exercise_id: String,
  pub name: String,
  pub target_sets: i32,
  pub target_reps: i32,
  pub starting_weight_kg: f64,
  pub progression: Progression,
  pub order_index: i32,
}

/// ---------------------------------------------------------------------------
/// Workout Block Template: one day of a split
/// ---------------------------------------------------------------------------

/// A non-rest block carries a non-empty exercise list; a rest block carries
/// none. The planner boundary enforces the non-empty side before any
/// placement strategy runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutBlockTemplate {
  pub day_name: String,
  pub exercises: Vec<ExercisePrescription>,
  pub is_rest_day: bool,
}

impl WorkoutBlockTemplate {
  pub fn workout(day_name: impl Into<String>, exercises: Vec<ExercisePrescription>) -> Self {
    Self {
      day_name: day_name.into(),
      exercises,
      is_rest_day: false,
    }
  }

  pub fn rest() -> Self {
    Self {
      day_name: "Rest".to_string(),
      exercises: Vec::new(),
      is_rest_day: true,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_linear_progression_adds_increment() {
    let progression = Progression::Linear { increment_kg: 2.5 };
    crate::assert_approx_eq!(progression.next_weight(100.0, 5), 102.5, 0.001);
  }

  #[test]
  fn test_double_progression_holds_until_max_reps() {
    let progression = Progression::DoubleProgression {
      min_reps: 8,
      max_reps: 12,
      increment_kg: 2.5,
    };
    crate::assert_approx_eq!(progression.next_weight(60.0, 10), 60.0, 0.001);
    crate::assert_approx_eq!(progression.next_weight(60.0, 12), 62.5, 0.001);
  }

  #[test]
  fn test_static_progression_never_moves() {
    let progression = Progression::Static;
    crate::assert_approx_eq!(progression.next_weight(40.0, 15), 40.0, 0.001);
  }

  #[test]
  fn test_progression_json_roundtrip() {
    let progression = Progression::DoubleProgression {
      min_reps: 8,
      max_reps: 12,
      increment_kg: 2.5,
    };
    let json = progression.to_json();
    let parsed = Progression::from_json(&json).unwrap();

    match parsed {
      Progression::DoubleProgression {
        min_reps, max_reps, ..
      } => {
        assert_eq!(min_reps, 8);
        assert_eq!(max_reps, 12);
      }
      _ => panic!("Wrong type"),
    }
  }

  #[test]
  fn test_rest_template_has_no_exercises() {
    let rest = WorkoutBlockTemplate::rest();
    assert!(rest.is_rest_day);
    assert!(rest.exercises.is_empty());
  }
}
