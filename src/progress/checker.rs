//! Badge checking logic
//!
//! Contains functions to check if badges should be unlocked.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use super::badges::{Badge, BadgeId, BadgeRule, BADGES};
use super::streaks::StreakInfo;
use crate::goals::GoalStore;

/// Derived state the badge rules are evaluated against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BadgeContext {
    pub total_logs: usize,
    pub longest_streak: u32,
    pub goal_count: usize,
    pub quests_completed: usize,
    pub attributes_covered: usize,
}

impl BadgeContext {
    /// Derive the context from the goal store and the quest record
    pub fn derive(goals: &GoalStore, quests_completed: usize, today: NaiveDate) -> Self {
        let longest_streak = goals
            .list_all()
            .iter()
            .map(|g| StreakInfo::compute(&g.active_dates(), today).best)
            .max()
            .unwrap_or(0);

        let attributes_covered = goals
            .list_all()
            .iter()
            .map(|g| g.attribute)
            .collect::<BTreeSet<_>>()
            .len();

        Self {
            total_logs: goals.total_active_entries(),
            longest_streak,
            goal_count: goals.len(),
            quests_completed,
            attributes_covered,
        }
    }
}

impl BadgeRule {
    /// Check whether the rule holds for the given context
    pub fn is_satisfied(&self, ctx: &BadgeContext) -> bool {
        match *self {
            BadgeRule::TotalLogs(n) => ctx.total_logs >= n,
            BadgeRule::LongestStreak(n) => ctx.longest_streak >= n,
            BadgeRule::GoalCount(n) => ctx.goal_count >= n,
            BadgeRule::QuestsCompleted(n) => ctx.quests_completed >= n,
            BadgeRule::AttributesCovered(n) => ctx.attributes_covered >= n,
        }
    }
}

/// Badges whose rule holds now and that are not unlocked yet.
///
/// Already-unlocked badges are skipped entirely, so a rule that stops holding
/// never affects them. Rules are independent; order does not matter.
pub fn check_badges(
    ctx: &BadgeContext,
    unlocked: &BTreeMap<BadgeId, NaiveDate>,
) -> Vec<&'static Badge> {
    BADGES
        .iter()
        .filter(|b| !unlocked.contains_key(&b.id))
        .filter(|b| b.rule.is_satisfied(ctx))
        .collect()
}
