use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Attribute, GoalError};

/// Date format used everywhere a calendar day crosses a boundary
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Lifecycle status of a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    /// Goal is being tracked
    #[default]
    Active,
    /// Goal is paused; history is kept
    Archived,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::Active => "active",
            GoalStatus::Archived => "archived",
        }
    }
}

impl std::fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A tracked goal and its daily log history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Goal {
    /// Unique, case-sensitive name
    pub name: String,

    /// Display-only unit label (e.g. "reps", "minutes")
    pub unit: String,

    /// Stat this goal trains
    pub attribute: Attribute,

    #[serde(default)]
    pub status: GoalStatus,

    /// Day the goal was added
    pub created: NaiveDate,

    /// Net quantity per day. One entry per date; repeated logs accumulate.
    #[serde(default)]
    pub entries: BTreeMap<NaiveDate, i64>,
}

impl Goal {
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        attribute: Attribute,
        created: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            attribute,
            status: GoalStatus::Active,
            created,
            entries: BTreeMap::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == GoalStatus::Active
    }

    /// Net quantity logged on `date` (0 when nothing was logged)
    pub fn quantity_on(&self, date: NaiveDate) -> i64 {
        self.entries.get(&date).copied().unwrap_or(0)
    }

    /// A date counts as active only when its net quantity is strictly positive
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.quantity_on(date) > 0
    }

    /// Strictly increasing sequence of active dates
    pub fn active_dates(&self) -> Vec<NaiveDate> {
        self.entries
            .iter()
            .filter(|(_, qty)| **qty > 0)
            .map(|(date, _)| *date)
            .collect()
    }
}

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(s: &str) -> Result<NaiveDate, GoalError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| GoalError::InvalidDate(s.to_string()))
}

/// Reject dates after `today`; backfilling the past is allowed
pub fn ensure_not_future(date: NaiveDate, today: NaiveDate) -> Result<(), GoalError> {
    if date > today {
        return Err(GoalError::InvalidDate(date.format(DATE_FORMAT).to_string()));
    }
    Ok(())
}
