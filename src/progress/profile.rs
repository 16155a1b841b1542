//! Player profile, derived from persisted state on demand

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::badges::{Badge, BadgeId};
use super::levels::LevelInfo;
use crate::domain::Attribute;
use crate::state::TrackerState;

/// A badge that has been unlocked
#[derive(Debug, Clone)]
pub struct UnlockedBadge {
    pub badge: &'static Badge,
    pub unlocked_on: NaiveDate,
}

/// Snapshot of the player's progression
#[derive(Debug, Clone)]
pub struct PlayerProfile {
    pub level: LevelInfo,
    /// XP per attribute; all five attributes are present
    pub attributes: BTreeMap<Attribute, u64>,
    /// Unlocked badges, oldest first
    pub badges: Vec<UnlockedBadge>,
    pub quests_completed: usize,
    /// Active (goal, date) entries
    pub total_logs: usize,
    pub active_goals: usize,
    pub archived_goals: usize,
}

impl PlayerProfile {
    /// Derive the profile; nothing here is stored
    pub fn derive(state: &TrackerState) -> Self {
        let mut badges: Vec<UnlockedBadge> = state
            .badges
            .iter()
            .map(|(id, date)| UnlockedBadge {
                badge: Badge::get(*id),
                unlocked_on: *date,
            })
            .collect();
        badges.sort_by_key(|b| (b.unlocked_on, b.badge.id));

        let active_goals = state.goals.list_active().len();

        Self {
            level: LevelInfo::new(state.xp_ledger.total()),
            attributes: state.xp_ledger.by_attribute(),
            badges,
            quests_completed: state.quests.len(),
            total_logs: state.goals.total_active_entries(),
            active_goals,
            archived_goals: state.goals.len() - active_goals,
        }
    }

    pub fn total_xp(&self) -> u64 {
        self.level.total_xp
    }

    pub fn has_badge(&self, id: BadgeId) -> bool {
        self.badges.iter().any(|b| b.badge.id == id)
    }

    /// Attribute with the most XP, if any XP has been earned
    pub fn strongest_attribute(&self) -> Option<Attribute> {
        self.attributes
            .iter()
            .filter(|(_, xp)| **xp > 0)
            .max_by_key(|(attr, xp)| (**xp, std::cmp::Reverse(**attr)))
            .map(|(attr, _)| *attr)
    }
}

/// Serializable view for machine-readable output
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    pub total_xp: u64,
    pub level: u32,
    pub rank: String,
    pub next_level_xp: u64,
    pub attributes: BTreeMap<Attribute, u64>,
    pub badges: Vec<BadgeSummary>,
    pub quests_completed: usize,
    pub total_logs: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BadgeSummary {
    pub id: BadgeId,
    pub name: &'static str,
    pub unlocked_on: NaiveDate,
}

impl From<&PlayerProfile> for ProfileSummary {
    fn from(profile: &PlayerProfile) -> Self {
        Self {
            total_xp: profile.level.total_xp,
            level: profile.level.level,
            rank: profile.level.rank.label().to_string(),
            next_level_xp: profile.level.next_level_xp,
            attributes: profile.attributes.clone(),
            badges: profile
                .badges
                .iter()
                .map(|b| BadgeSummary {
                    id: b.badge.id,
                    name: b.badge.name,
                    unlocked_on: b.unlocked_on,
                })
                .collect(),
            quests_completed: profile.quests_completed,
            total_logs: profile.total_logs,
        }
    }
}
