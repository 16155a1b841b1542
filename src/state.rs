//! Persisted state root
//!
//! Holds only primitive data. Level, rank, streaks and heatmaps are derived
//! on demand and never stored.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::goals::GoalStore;
use crate::progress::{BadgeId, XpLedger, XpSource};

/// Current schema version of the state file
pub const STATE_VERSION: u32 = 1;

/// Everything one invocation loads, mutates and saves
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackerState {
    pub version: u32,

    /// Goals in creation order
    #[serde(default)]
    pub goals: GoalStore,

    /// Every XP award ever granted
    #[serde(default)]
    pub xp_ledger: XpLedger,

    /// Dates on which the daily quest bonus was granted
    #[serde(default)]
    pub quests: BTreeSet<NaiveDate>,

    /// Unlocked badges and the date each was first earned
    #[serde(default)]
    pub badges: BTreeMap<BadgeId, NaiveDate>,
}

impl Default for TrackerState {
    fn default() -> Self {
        Self {
            version: STATE_VERSION,
            goals: GoalStore::new(),
            xp_ledger: XpLedger::default(),
            quests: BTreeSet::new(),
            badges: BTreeMap::new(),
        }
    }
}

/// Invariant violations found in loaded state
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("Unsupported state version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Duplicate goal name '{0}'")]
    DuplicateGoal(String),

    #[error("Goal with an empty name")]
    EmptyName,

    #[error("XP award on {date} references unknown goal '{goal}'")]
    UnknownGoal { goal: String, date: NaiveDate },

    #[error("XP award on {0} has no goal")]
    MissingGoal(NaiveDate),

    #[error("Quest award on {0} has no matching quest date")]
    OrphanQuestAward(NaiveDate),
}

impl TrackerState {
    /// Check the invariants the core relies on.
    ///
    /// Run on every load; the core never proceeds on state that fails this.
    pub fn validate(&self) -> Result<(), StateError> {
        if self.version != STATE_VERSION {
            return Err(StateError::UnsupportedVersion {
                found: self.version,
                expected: STATE_VERSION,
            });
        }

        let mut names = HashSet::new();
        for goal in self.goals.list_all() {
            if goal.name.trim().is_empty() {
                return Err(StateError::EmptyName);
            }
            if !names.insert(goal.name.as_str()) {
                return Err(StateError::DuplicateGoal(goal.name.clone()));
            }
        }

        for award in self.xp_ledger.awards() {
            match award.source {
                XpSource::Log => {
                    let goal = award
                        .goal
                        .as_deref()
                        .ok_or(StateError::MissingGoal(award.date))?;
                    if !names.contains(goal) {
                        return Err(StateError::UnknownGoal {
                            goal: goal.to_string(),
                            date: award.date,
                        });
                    }
                }
                XpSource::DailyQuest => {
                    if !self.quests.contains(&award.date) {
                        return Err(StateError::OrphanQuestAward(award.date));
                    }
                }
            }
        }

        Ok(())
    }
}
