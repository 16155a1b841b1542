//! Experience awards and the append-only XP ledger

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::Attribute;

/// XP rewards for various actions
pub struct XpRewards;

impl XpRewards {
    /// Flat XP for a log that leaves the date active
    pub const LOG: u64 = 10;

    /// One-time bonus for the daily quest
    pub const DAILY_QUEST: u64 = 50;

    /// Bonus XP per streak day beyond the first
    pub const STREAK_STEP: u64 = 2;

    /// Cap on the streak bonus
    pub const STREAK_CAP: u64 = 20;

    /// Calculate streak bonus XP
    /// Streak day 1 = 0 XP, day 2 = 2 XP, day 3 = 4 XP, etc. (capped at 20)
    pub fn streak_bonus(streak_days: u32) -> u64 {
        (u64::from(streak_days.saturating_sub(1)) * Self::STREAK_STEP).min(Self::STREAK_CAP)
    }

    /// A log earns XP only for a positive delta that leaves the date active.
    /// Corrections and logs that stay at or below zero earn nothing.
    pub fn log_is_eligible(delta: i64, net: i64) -> bool {
        delta > 0 && net > 0
    }
}

/// What an award was granted for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum XpSource {
    Log,
    DailyQuest,
}

/// One entry of the XP ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct XpAward {
    /// Date the award was earned for
    pub date: NaiveDate,
    pub source: XpSource,
    /// Goal that earned it (None for quest bonuses)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    /// Attribute credited (None for quest bonuses)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<Attribute>,
    pub amount: u64,
}

impl XpAward {
    pub fn for_log(date: NaiveDate, goal: &str, attribute: Attribute, amount: u64) -> Self {
        Self {
            date,
            source: XpSource::Log,
            goal: Some(goal.to_string()),
            attribute: Some(attribute),
            amount,
        }
    }

    pub fn for_quest(date: NaiveDate) -> Self {
        Self {
            date,
            source: XpSource::DailyQuest,
            goal: None,
            attribute: None,
            amount: XpRewards::DAILY_QUEST,
        }
    }
}

/// Append-only record of every award. Totals are sums over it, so total XP
/// never decreases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct XpLedger {
    awards: Vec<XpAward>,
}

impl XpLedger {
    pub fn push(&mut self, award: XpAward) {
        self.awards.push(award);
    }

    pub fn awards(&self) -> &[XpAward] {
        &self.awards
    }

    pub fn total(&self) -> u64 {
        self.awards
            .iter()
            .fold(0u64, |acc, a| acc.saturating_add(a.amount))
    }

    /// Per-attribute totals; every attribute is present, zero if untrained
    pub fn by_attribute(&self) -> BTreeMap<Attribute, u64> {
        let mut totals: BTreeMap<Attribute, u64> =
            Attribute::ALL.iter().map(|a| (*a, 0)).collect();
        for award in &self.awards {
            if let Some(attr) = award.attribute {
                let entry = totals.entry(attr).or_insert(0);
                *entry = entry.saturating_add(award.amount);
            }
        }
        totals
    }
}
