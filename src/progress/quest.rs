//! Daily quest ("Preparation"): log enough distinct goals on one date for a
//! one-time bonus.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::goals::GoalStore;

/// Distinct active goals needed on one date
pub const QUEST_GOAL_COUNT: usize = 4;

/// Quest progress for a single date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestProgress {
    pub date: NaiveDate,
    /// Distinct goals with an active entry on `date`
    pub active_goals: usize,
    pub required: usize,
    /// Bonus was already granted for `date`
    pub completed: bool,
}

impl QuestProgress {
    /// Evaluate the quest for `date` against the current store
    pub fn evaluate(goals: &GoalStore, completed: &BTreeSet<NaiveDate>, date: NaiveDate) -> Self {
        Self {
            date,
            active_goals: goals.active_goals_on(date).len(),
            required: QUEST_GOAL_COUNT,
            completed: completed.contains(&date),
        }
    }

    /// Threshold reached and the bonus has not been granted yet.
    /// Grants are one-way: a completed date is never granted again or revoked.
    pub fn should_grant(&self) -> bool {
        !self.completed && self.active_goals >= self.required
    }

    pub fn remaining(&self) -> usize {
        self.required.saturating_sub(self.active_goals)
    }
}
