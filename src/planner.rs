//! Plan Generation Boundary
//!
//! The validating entry point in front of the placement engine:
//! - generate_week: validate inputs, run the selected strategy, enforce the
//!   7-slot invariant
//! - generate_program: expand the canonical week cyclically (mod 7) across a
//!   calendar horizon anchored to a start date
//! - generate_plan: the caller-facing one-shot over a PlanRequest
//!
//! All input validation lives here rather than in callers, so the pure core
//! is fully self-validating and testable without a UI harness.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::models::plan::{GeneratedProgram, ScheduledDay};
use crate::models::schedule::{WeekSchedule, DAYS_PER_WEEK};
use crate::models::template::WorkoutBlockTemplate;
use crate::placement::{strategy_for, BlockCycle, RestDayPlacement};

// ---------------------------------------------------------------------------
/// Plan Request: everything the caller configures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    pub templates: Vec<WorkoutBlockTemplate>,
    pub training_days_per_week: u8,
    /// None means the user never picked a placement; generation fails rather
    /// than silently defaulting.
    pub rest_day_placement: Option<RestDayPlacement>,
    /// First day of the program. Slot 0 of every generated week lands here
    /// (mod 7). The Weekends policy rests slots 5-6, so anchor on a Monday
    /// to make those literal Saturday/Sunday.
    pub start_date: NaiveDate,
    pub program_length_days: i64,
}

// ---------------------------------------------------------------------------
/// Week Generation
// ---------------------------------------------------------------------------

/// Build one canonical week from the split's workout blocks. Rest templates
/// are filtered out of the pool first; strategies synthesize their own rest
/// placeholders.
pub fn generate_week(
    templates: &[WorkoutBlockTemplate],
    training_days_per_week: u8,
    placement: &RestDayPlacement,
) -> Result<WeekSchedule, PlanError> {
    if training_days_per_week as usize > DAYS_PER_WEEK {
        return Err(PlanError::InvalidTrainingDays(training_days_per_week));
    }
    placement.validate()?;

    let pool: Vec<WorkoutBlockTemplate> = templates
        .iter()
        .filter(|t| !t.is_rest_day)
        .cloned()
        .collect();
    for block in &pool {
        if block.exercises.is_empty() {
            return Err(PlanError::EmptyWorkoutDay(block.day_name.clone()));
        }
    }
    let cycle = BlockCycle::new(&pool)?;

    let strategy = strategy_for(placement);
    WeekSchedule::new(strategy.place(&cycle, training_days_per_week))
}

// ---------------------------------------------------------------------------
/// Program Generation
// ---------------------------------------------------------------------------

/// Repeat the week pattern across the horizon: day `d` gets
/// `start_date + d` and `week[d mod 7]`. Each repetition is identical; the
/// cycle never re-randomizes.
pub fn generate_program(
    week: &WeekSchedule,
    start_date: NaiveDate,
    length_in_days: i64,
) -> Result<GeneratedProgram, PlanError> {
    if length_in_days <= 0 {
        return Err(PlanError::InvalidProgramLength(length_in_days));
    }

    let mut days = Vec::with_capacity(length_in_days as usize);
    for offset in 0..length_in_days {
        let date = start_date
            .checked_add_days(Days::new(offset as u64))
            .ok_or(PlanError::InvalidProgramLength(length_in_days))?;
        days.push(ScheduledDay {
            date,
            block: week[offset as usize % DAYS_PER_WEEK].clone(),
        });
    }

    Ok(GeneratedProgram { start_date, days })
}

/// Generate the full schedule for a request: pick the strategy, build the
/// canonical week, expand it across the program horizon.
pub fn generate_plan(request: &PlanRequest) -> Result<GeneratedProgram, PlanError> {
    let placement = request
        .rest_day_placement
        .as_ref()
        .ok_or(PlanError::MissingRestPlacement)?;

    let week = generate_week(&request.templates, request.training_days_per_week, placement)?;
    generate_program(&week, request.start_date, request.program_length_days)
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{mock_split, mock_template, naive_date};

    fn base_request() -> PlanRequest {
        PlanRequest {
            templates: mock_split(),
            training_days_per_week: 4,
            rest_day_placement: Some(RestDayPlacement::AfterEachWorkout),
            start_date: naive_date(2026, 3, 2),
            program_length_days: 28,
        }
    }

    #[test]
    fn test_every_strategy_returns_seven_days() {
        let templates = mock_split();
        let policies = vec![
            RestDayPlacement::AfterEachWorkout,
            RestDayPlacement::AfterEverySecondWorkout,
            RestDayPlacement::Weekends,
            RestDayPlacement::Custom {
                rest_days: vec![2, 5],
            },
        ];

        for policy in policies {
            for training_days in 0..=5u8 {
                let week = generate_week(&templates, training_days, &policy)
                    .expect("valid inputs should generate a week");
                assert_eq!(week.days().len(), DAYS_PER_WEEK);
                assert_eq!(
                    week.training_day_count(),
                    training_days as usize,
                    "policy {:?}, training_days {}",
                    policy,
                    training_days
                );
            }
        }
    }

    #[test]
    fn test_generate_week_rejects_empty_pool() {
        let result = generate_week(&[], 3, &RestDayPlacement::AfterEachWorkout);
        assert!(matches!(result, Err(PlanError::EmptyWorkoutBlocks)));

        // A pool of only rest templates is just as empty
        let rest_only = vec![WorkoutBlockTemplate::rest()];
        let result = generate_week(&rest_only, 3, &RestDayPlacement::AfterEachWorkout);
        assert!(matches!(result, Err(PlanError::EmptyWorkoutBlocks)));
    }

    #[test]
    fn test_generate_week_rejects_too_many_training_days() {
        let result = generate_week(&mock_split(), 8, &RestDayPlacement::AfterEachWorkout);
        assert!(matches!(result, Err(PlanError::InvalidTrainingDays(8))));
    }

    #[test]
    fn test_generate_week_rejects_workout_day_without_exercises() {
        let templates = vec![WorkoutBlockTemplate::workout("Push", Vec::new())];
        let result = generate_week(&templates, 3, &RestDayPlacement::AfterEachWorkout);
        match result {
            Err(PlanError::EmptyWorkoutDay(name)) => assert_eq!(name, "Push"),
            other => panic!("Expected EmptyWorkoutDay, got {:?}", other),
        }
    }

    #[test]
    fn test_generate_week_rejects_invalid_custom_indices() {
        let placement = RestDayPlacement::Custom {
            rest_days: vec![9],
        };
        let result = generate_week(&mock_split(), 3, &placement);
        assert!(matches!(result, Err(PlanError::CustomRestDayOutOfRange(9))));
    }

    #[test]
    fn test_first_week_of_program_reproduces_schedule() {
        let templates = mock_split();
        let week = generate_week(&templates, 4, &RestDayPlacement::Weekends).unwrap();
        let program = generate_program(&week, naive_date(2026, 3, 2), 7).unwrap();

        for d in 0..DAYS_PER_WEEK {
            assert_eq!(program.days[d].block, week[d], "day {}", d);
        }
    }

    #[test]
    fn test_program_dates_advance_daily_and_repeat_weekly() {
        let templates = mock_split();
        let week = generate_week(&templates, 4, &RestDayPlacement::AfterEachWorkout).unwrap();
        let anchor = naive_date(2026, 3, 2);
        let program = generate_program(&week, anchor, 14).unwrap();

        assert_eq!(program.len(), 14);
        assert_eq!(program.days[7].date, naive_date(2026, 3, 9));
        // Pattern repeats every 7 days
        assert_eq!(program.days[7].block, program.days[0].block);
        assert_eq!(program.days[13].block, program.days[6].block);
    }

    #[test]
    fn test_generate_program_fails_fast_on_bad_length() {
        let templates = mock_split();
        let week = generate_week(&templates, 4, &RestDayPlacement::Weekends).unwrap();

        let result = generate_program(&week, naive_date(2026, 3, 2), 0);
        assert!(matches!(result, Err(PlanError::InvalidProgramLength(0))));

        let result = generate_program(&week, naive_date(2026, 3, 2), -7);
        assert!(matches!(result, Err(PlanError::InvalidProgramLength(-7))));
    }

    #[test]
    fn test_generate_plan_requires_placement() {
        let mut request = base_request();
        request.rest_day_placement = None;

        let result = generate_plan(&request);
        assert!(matches!(result, Err(PlanError::MissingRestPlacement)));
    }

    #[test]
    fn test_generate_plan_four_weeks() {
        let request = base_request();
        let program = generate_plan(&request).expect("valid request should generate");

        assert_eq!(program.len(), 28);
        assert_eq!(program.start_date, naive_date(2026, 3, 2));
        // 4 training days per generated week
        assert_eq!(program.training_days().count(), 16);
    }

    #[test]
    fn test_generate_plan_is_deterministic() {
        let request = base_request();
        let first = generate_plan(&request).unwrap();
        let second = generate_plan(&request).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_templates_cycle_across_training_slots() {
        let templates = vec![mock_template("A"), mock_template("B")];
        let week = generate_week(&templates, 5, &RestDayPlacement::Weekends).unwrap();

        let names: Vec<Option<&str>> = (0..5).map(|i| week[i].day_name()).collect();
        assert_eq!(
            names,
            vec![Some("A"), Some("B"), Some("A"), Some("B"), Some("A")]
        );
    }
}
