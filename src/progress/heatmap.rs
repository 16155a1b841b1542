//! Heatmap data: per-date intensity buckets for an external renderer.
//!
//! Buckets are relative to the best day in the goal's own history, so a goal
//! measured in minutes and one measured in reps both use the full scale.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::domain::Goal;

/// Discretized activity level for one date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    /// Nothing (or a net non-positive quantity) logged
    None,
    Low,
    Medium,
    High,
    Peak,
}

impl Intensity {
    /// All buckets from least to most, for legends
    pub const SCALE: [Intensity; 5] = [
        Intensity::None,
        Intensity::Low,
        Intensity::Medium,
        Intensity::High,
        Intensity::Peak,
    ];

    /// Quartile bucket of `quantity` relative to `max`
    pub fn bucket(quantity: i64, max: i64) -> Self {
        if quantity <= 0 {
            return Intensity::None;
        }
        let max = max.max(1);
        let ratio = quantity as f64 / max as f64;

        if ratio < 0.25 {
            Intensity::Low
        } else if ratio < 0.50 {
            Intensity::Medium
        } else if ratio < 0.75 {
            Intensity::High
        } else {
            Intensity::Peak
        }
    }
}

/// Inclusive date window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeatmapRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl HeatmapRange {
    /// Build a range; reversed bounds are swapped
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    /// Grid window ending today: starts on the Sunday on or before `today - weeks`.
    /// Clamped to the earliest representable date.
    pub fn trailing_weeks(today: NaiveDate, weeks: u32) -> Self {
        let start = today
            .checked_sub_signed(Duration::weeks(i64::from(weeks)))
            .unwrap_or(NaiveDate::MIN);
        let offset = start.weekday().num_days_from_sunday();
        let start = start
            .checked_sub_signed(Duration::days(i64::from(offset)))
            .unwrap_or(start);
        Self::new(start, today)
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d <= self.end)
    }

    /// Number of days covered, both ends included
    pub fn day_count(&self) -> usize {
        ((self.end - self.start).num_days() + 1) as usize
    }
}

/// What a heatmap is built for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeatmapTarget {
    Goal(String),
    /// Every active goal; a date's quantity is the number of goals logged on it
    AllActive,
}

/// Ordered date → bucket mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    pub range: HeatmapRange,
    /// Reference maximum the buckets were computed against
    pub max: i64,
    pub cells: BTreeMap<NaiveDate, Intensity>,
}

impl Heatmap {
    /// Heatmap for one goal, scaled to its best day ever
    pub fn for_goal(goal: &Goal, range: HeatmapRange) -> Self {
        let max = goal.entries.values().copied().max().unwrap_or(0).max(0);
        let cells = range
            .days()
            .map(|d| (d, Intensity::bucket(goal.quantity_on(d), max)))
            .collect();

        Self { range, max, cells }
    }

    /// Aggregate heatmap over several goals, scaled to the busiest day ever
    pub fn aggregate(goals: &[&Goal], range: HeatmapRange) -> Self {
        let mut counts: BTreeMap<NaiveDate, i64> = BTreeMap::new();
        for goal in goals {
            for date in goal.active_dates() {
                *counts.entry(date).or_insert(0) += 1;
            }
        }

        let max = counts.values().copied().max().unwrap_or(0);
        let cells = range
            .days()
            .map(|d| {
                let count = counts.get(&d).copied().unwrap_or(0);
                (d, Intensity::bucket(count, max))
            })
            .collect();

        Self { range, max, cells }
    }

    pub fn get(&self, date: NaiveDate) -> Intensity {
        self.cells.get(&date).copied().unwrap_or(Intensity::None)
    }
}
