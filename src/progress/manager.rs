//! Tracker - core progression logic
//!
//! Applies one mutation to the state and runs the dependent recomputation:
//! streaks, XP, the daily quest, badges and level ups.

use chrono::NaiveDate;
use tracing::{debug, info};

use super::badges::Badge;
use super::checker::{check_badges, BadgeContext};
use super::levels::LevelUp;
use super::profile::UnlockedBadge;
use super::quest::QuestProgress;
use super::streaks::StreakInfo;
use super::xp::{XpAward, XpRewards};
use crate::domain::{ensure_not_future, Attribute, Goal, GoalError, GoalStatus};
use crate::state::TrackerState;

/// Rules that are a matter of choice rather than invariants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackerPolicy {
    /// Accept logs against archived goals (the goal stays archived)
    pub allow_archived_logging: bool,
}

/// XP granted for a single log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogXp {
    pub base: u64,
    pub streak_bonus: u64,
}

impl LogXp {
    pub fn total(&self) -> u64 {
        self.base + self.streak_bonus
    }
}

/// Events that can happen during a mutation
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    XpAwarded { amount: u64, reason: String },
    QuestCompleted { date: NaiveDate },
    BadgeUnlocked(UnlockedBadge),
    LevelUp(LevelUp),
}

/// Result of a `log` call
#[derive(Debug, Clone)]
pub struct LogOutcome {
    pub goal: String,
    pub date: NaiveDate,
    /// Net quantity for the date after this log
    pub net: i64,
    /// The date counts as active after this log
    pub active: bool,
    pub streak: StreakInfo,
    /// None when the log was not eligible for XP
    pub xp: Option<LogXp>,
    /// Quest state for `date` after this log
    pub quest: QuestProgress,
    /// The quest bonus was granted by this log
    pub quest_bonus: bool,
    pub badges: Vec<UnlockedBadge>,
    pub level_up: Option<LevelUp>,
    pub events: Vec<ProgressEvent>,
}

impl LogOutcome {
    /// Total XP this log produced, quest bonus included
    pub fn xp_gained(&self) -> u64 {
        let log = self.xp.map(|x| x.total()).unwrap_or(0);
        let quest = if self.quest_bonus {
            XpRewards::DAILY_QUEST
        } else {
            0
        };
        log + quest
    }
}

/// Result of a goal-level mutation (add, archive, restore)
#[derive(Debug, Clone)]
pub struct GoalOutcome {
    pub goal: Goal,
    pub badges: Vec<UnlockedBadge>,
}

/// Main entry point for every mutating operation.
///
/// Borrows the state for one invocation. Each method validates everything it
/// can fail on before touching the state, so an `Err` means nothing changed.
pub struct Tracker<'s> {
    state: &'s mut TrackerState,
    policy: TrackerPolicy,
}

impl<'s> Tracker<'s> {
    pub fn new(state: &'s mut TrackerState) -> Self {
        Self::with_policy(state, TrackerPolicy::default())
    }

    pub fn with_policy(state: &'s mut TrackerState, policy: TrackerPolicy) -> Self {
        Self { state, policy }
    }

    pub fn state(&self) -> &TrackerState {
        self.state
    }

    // ========================================
    // GOAL OPERATIONS
    // ========================================

    /// Create a new goal
    pub fn add_goal(
        &mut self,
        name: &str,
        unit: &str,
        attribute: Attribute,
        today: NaiveDate,
    ) -> Result<GoalOutcome, GoalError> {
        let goal = self.state.goals.create(name, unit, attribute, today)?.clone();
        info!(goal = %goal.name, attribute = %goal.attribute, "Goal added");

        let badges = self.unlock_badges(today);
        Ok(GoalOutcome { goal, badges })
    }

    /// Pause a goal; its history is kept
    pub fn archive_goal(&mut self, name: &str, today: NaiveDate) -> Result<GoalOutcome, GoalError> {
        self.set_status(name, GoalStatus::Archived, today)
    }

    /// Resume an archived goal
    pub fn restore_goal(&mut self, name: &str, today: NaiveDate) -> Result<GoalOutcome, GoalError> {
        self.set_status(name, GoalStatus::Active, today)
    }

    fn set_status(
        &mut self,
        name: &str,
        status: GoalStatus,
        today: NaiveDate,
    ) -> Result<GoalOutcome, GoalError> {
        let goal = match status {
            GoalStatus::Archived => self.state.goals.archive(name)?,
            GoalStatus::Active => self.state.goals.restore(name)?,
        }
        .clone();
        info!(goal = %goal.name, status = %goal.status, "Goal status changed");

        let badges = self.unlock_badges(today);
        Ok(GoalOutcome { goal, badges })
    }

    // ========================================
    // LOG OPERATIONS
    // ========================================

    /// Add `delta` to the goal's quantity for `date` and update all progression
    pub fn log(
        &mut self,
        name: &str,
        date: NaiveDate,
        delta: i64,
        today: NaiveDate,
    ) -> Result<LogOutcome, GoalError> {
        ensure_not_future(date, today)?;

        let old_xp = self.state.xp_ledger.total();
        let record = self.state.goals.record(
            name,
            date,
            delta,
            self.policy.allow_archived_logging,
        )?;
        debug!(
            goal = name,
            %date,
            delta,
            previous = record.previous,
            net = record.net,
            "Recorded log"
        );

        // The goal exists: record() succeeded on it
        let goal = self.state.goals.get(name)?;
        let attribute = goal.attribute;
        let streak = StreakInfo::compute(&goal.active_dates(), today);

        let mut events = Vec::new();

        // Award XP
        let xp = if XpRewards::log_is_eligible(delta, record.net) {
            let xp = LogXp {
                base: XpRewards::LOG,
                streak_bonus: XpRewards::streak_bonus(streak.current),
            };
            self.state
                .xp_ledger
                .push(XpAward::for_log(date, name, attribute, xp.total()));
            info!(goal = name, amount = xp.total(), streak = streak.current, "XP awarded");
            events.push(ProgressEvent::XpAwarded {
                amount: xp.total(),
                reason: format!("Logged {} (+{} streak)", name, xp.streak_bonus),
            });
            Some(xp)
        } else {
            None
        };

        // Daily quest
        let mut quest = QuestProgress::evaluate(&self.state.goals, &self.state.quests, date);
        let quest_bonus = quest.should_grant();
        if quest_bonus {
            self.state.quests.insert(date);
            self.state.xp_ledger.push(XpAward::for_quest(date));
            quest.completed = true;
            info!(%date, goals = quest.active_goals, "Daily quest completed");
            events.push(ProgressEvent::QuestCompleted { date });
            events.push(ProgressEvent::XpAwarded {
                amount: XpRewards::DAILY_QUEST,
                reason: "Daily quest".to_string(),
            });
        }

        // Badges
        let badges = self.unlock_badges(today);
        events.extend(badges.iter().cloned().map(ProgressEvent::BadgeUnlocked));

        let level_up = LevelUp::between(old_xp, self.state.xp_ledger.total());
        if let Some(up) = level_up {
            info!(old = up.old_level, new = up.new_level, rank = %up.new_rank, "Level up");
            events.push(ProgressEvent::LevelUp(up));
        }

        Ok(LogOutcome {
            goal: name.to_string(),
            date,
            net: record.net,
            active: record.is_active(),
            streak,
            xp,
            quest,
            quest_bonus,
            badges,
            level_up,
            events,
        })
    }

    /// Set the goal's quantity for `date` to `value`.
    ///
    /// Applied as the equivalent delta, so the usual XP rules hold.
    pub fn set_quantity(
        &mut self,
        name: &str,
        date: NaiveDate,
        value: i64,
        today: NaiveDate,
    ) -> Result<LogOutcome, GoalError> {
        let current = self.state.goals.get(name)?.quantity_on(date);
        let delta = value
            .checked_sub(current)
            .ok_or_else(|| GoalError::InvalidQuantity {
                name: name.to_string(),
                date,
            })?;
        self.log(name, date, delta, today)
    }

    // ========================================
    // BADGES
    // ========================================

    /// Unlock every badge whose rule holds now; unlocks are permanent
    fn unlock_badges(&mut self, today: NaiveDate) -> Vec<UnlockedBadge> {
        let ctx = BadgeContext::derive(&self.state.goals, self.state.quests.len(), today);
        let newly: Vec<&'static Badge> = check_badges(&ctx, &self.state.badges);

        newly
            .into_iter()
            .map(|badge| {
                self.state.badges.insert(badge.id, today);
                info!(badge = %badge.id, "Badge unlocked");
                UnlockedBadge {
                    badge,
                    unlocked_on: today,
                }
            })
            .collect()
    }
}
