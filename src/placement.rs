//! Rest-Day Placement Engine
//!
//! Distributes (7 - trainingDaysPerWeek) rest days across one canonical week
//! according to a user-chosen policy:
//! - AfterEachWorkout: one rest day after each workout while the pool lasts
//! - AfterEverySecondWorkout: W W R cadence
//! - Weekends: last two slots always rest
//! - Custom: caller-supplied rest indices
//!
//! Key principles:
//! - Strategies are pure: same inputs, same week, no side effects
//! - The workout pool is cyclic - a short split repeats in order
//! - Strategies never overrun the training quota; under-filling falls back
//!   to extra rest

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::models::schedule::{DayBlock, DAYS_PER_WEEK};
use crate::models::template::WorkoutBlockTemplate;

// ---------------------------------------------------------------------------
/// Rest Day Placement: the user-facing policy
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RestDayPlacement {
    AfterEachWorkout,
    AfterEverySecondWorkout,
    Weekends,
    Custom { rest_days: Vec<usize> },
}

impl RestDayPlacement {
    /// Custom rest-day indices must be unique and within 0-6.
    pub fn validate(&self) -> Result<(), PlanError> {
        if let RestDayPlacement::Custom { rest_days } = self {
            let mut seen = BTreeSet::new();
            for &index in rest_days {
                if index >= DAYS_PER_WEEK {
                    return Err(PlanError::CustomRestDayOutOfRange(index));
                }
                if !seen.insert(index) {
                    return Err(PlanError::DuplicateCustomRestDay(index));
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
/// Block Cycle: cyclic access into the workout pool
// ---------------------------------------------------------------------------

/// Workout slot `i` always draws `blocks[i mod blocks.len()]`, so when the
/// training week is longer than the split, blocks repeat from the start in
/// order. Construction rejects an empty pool.
pub struct BlockCycle<'a> {
    blocks: &'a [WorkoutBlockTemplate],
}

impl<'a> BlockCycle<'a> {
    pub fn new(blocks: &'a [WorkoutBlockTemplate]) -> Result<Self, PlanError> {
        if blocks.is_empty() {
            return Err(PlanError::EmptyWorkoutBlocks);
        }
        Ok(Self { blocks })
    }

    pub fn block_at(&self, i: usize) -> &WorkoutBlockTemplate {
        &self.blocks[i % self.blocks.len()]
    }

    pub fn day_block_at(&self, i: usize) -> DayBlock {
        DayBlock::from_template(self.block_at(i))
    }
}

// ---------------------------------------------------------------------------
/// Placement Strategy trait + the four implementations
// ---------------------------------------------------------------------------

pub trait PlacementStrategy {
    /// Produce the 7 slots of one canonical week. The pool is non-empty and
    /// `training_days <= 7`; both are enforced at the planner boundary.
    fn place(&self, blocks: &BlockCycle<'_>, training_days: u8) -> Vec<DayBlock>;
}

/// One rest day immediately after each workout until the rest pool is
/// exhausted, then workouts run back-to-back; slots beyond the quota rest.
pub struct AfterEachWorkoutPlacement;

impl PlacementStrategy for AfterEachWorkoutPlacement {
    fn place(&self, blocks: &BlockCycle<'_>, training_days: u8) -> Vec<DayBlock> {
        let quota = training_days as usize;
        let total_rest = DAYS_PER_WEEK.saturating_sub(quota);
        let mut days = Vec::with_capacity(DAYS_PER_WEEK);
        let mut placed = 0;
        let mut rest_used = 0;

        while days.len() < DAYS_PER_WEEK {
            if placed < quota {
                days.push(blocks.day_block_at(placed));
                placed += 1;
                if rest_used < total_rest && days.len() < DAYS_PER_WEEK {
                    days.push(DayBlock::Rest);
                    rest_used += 1;
                }
            } else {
                days.push(DayBlock::Rest);
            }
        }
        days
    }
}

/// One rest day after every two consecutive workouts (W W R W W R ...).
/// Rest insertion is bounded by the rest pool, otherwise six training days
/// could never fit; the cadence counter resets on each rest emitted.
pub struct AfterEverySecondWorkoutPlacement;

impl PlacementStrategy for AfterEverySecondWorkoutPlacement {
    fn place(&self, blocks: &BlockCycle<'_>, training_days: u8) -> Vec<DayBlock> {
        let quota = training_days as usize;
        let total_rest = DAYS_PER_WEEK.saturating_sub(quota);
        let mut days = Vec::with_capacity(DAYS_PER_WEEK);
        let mut placed = 0;
        let mut rest_used = 0;
        let mut workouts_since_rest = 0;

        while days.len() < DAYS_PER_WEEK {
            if placed < quota {
                days.push(blocks.day_block_at(placed));
                placed += 1;
                workouts_since_rest += 1;
                if workouts_since_rest >= 2 && rest_used < total_rest && days.len() < DAYS_PER_WEEK
                {
                    days.push(DayBlock::Rest);
                    rest_used += 1;
                    workouts_since_rest = 0;
                }
            } else {
                days.push(DayBlock::Rest);
            }
        }
        days
    }
}

/// Slots 5 and 6 are unconditionally rest; slots 0-4 train up to the quota,
/// then rest. "Weekend" means the last two generated slots, not literal
/// Saturday/Sunday - callers who want that must anchor the program on a
/// Monday.
pub struct WeekendsPlacement;

const WEEKEND_START: usize = 5;

impl PlacementStrategy for WeekendsPlacement {
    fn place(&self, blocks: &BlockCycle<'_>, training_days: u8) -> Vec<DayBlock> {
        let quota = training_days as usize;
        let mut days = Vec::with_capacity(DAYS_PER_WEEK);
        let mut placed = 0;

        for slot in 0..DAYS_PER_WEEK {
            if slot >= WEEKEND_START {
                days.push(DayBlock::Rest);
            } else if placed < quota {
                days.push(blocks.day_block_at(placed));
                placed += 1;
            } else {
                days.push(DayBlock::Rest);
            }
        }
        days
    }
}

/// Caller-designated rest indices. A slot outside the rest set still becomes
/// rest once the training quota is met, so an index set that is inconsistent
/// with the training-day count degrades to extra rest instead of overrunning.
pub struct CustomPlacement {
    rest_days: BTreeSet<usize>,
}

impl PlacementStrategy for CustomPlacement {
    fn place(&self, blocks: &BlockCycle<'_>, training_days: u8) -> Vec<DayBlock> {
        let quota = training_days as usize;
        let mut days = Vec::with_capacity(DAYS_PER_WEEK);
        let mut placed = 0;

        for slot in 0..DAYS_PER_WEEK {
            if self.rest_days.contains(&slot) {
                days.push(DayBlock::Rest);
            } else if placed < quota {
                days.push(blocks.day_block_at(placed));
                placed += 1;
            } else {
                days.push(DayBlock::Rest);
            }
        }
        days
    }
}

// ---------------------------------------------------------------------------
/// Strategy Selector
// ---------------------------------------------------------------------------

/// Map a placement policy to its strategy. Closed mapping with no default
/// arm: a new policy variant will not compile until it is handled here.
pub fn strategy_for(placement: &RestDayPlacement) -> Box<dyn PlacementStrategy> {
    match placement {
        RestDayPlacement::AfterEachWorkout => Box::new(AfterEachWorkoutPlacement),
        RestDayPlacement::AfterEverySecondWorkout => Box::new(AfterEverySecondWorkoutPlacement),
        RestDayPlacement::Weekends => Box::new(WeekendsPlacement),
        RestDayPlacement::Custom { rest_days } => Box::new(CustomPlacement {
            rest_days: rest_days.iter().copied().collect(),
        }),
    }
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------
