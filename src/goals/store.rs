//! Goal store implementation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Attribute, Goal, GoalError, GoalStatus};

/// Outcome of a single `record` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordResult {
    /// Net quantity for the date before the delta was applied
    pub previous: i64,
    /// Net quantity for the date after the delta was applied
    pub net: i64,
}

impl RecordResult {
    /// The date counted as active before this call
    pub fn was_active(&self) -> bool {
        self.previous > 0
    }

    /// The date counts as active after this call
    pub fn is_active(&self) -> bool {
        self.net > 0
    }
}

/// Owns every goal, active or archived, in creation order.
///
/// Goals are never physically removed; archiving is the only removal path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalStore {
    goals: Vec<Goal>,
}

impl GoalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new active goal. Names stay reserved after archiving.
    pub fn create(
        &mut self,
        name: &str,
        unit: &str,
        attribute: Attribute,
        created: NaiveDate,
    ) -> Result<&Goal, GoalError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GoalError::InvalidName);
        }
        if self.contains(name) {
            return Err(GoalError::DuplicateGoal(name.to_string()));
        }

        self.goals.push(Goal::new(name, unit.trim(), attribute, created));
        let index = self.goals.len() - 1;
        Ok(&self.goals[index])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.goals.iter().any(|g| g.name == name)
    }

    /// Get a goal by name
    pub fn get(&self, name: &str) -> Result<&Goal, GoalError> {
        self.goals
            .iter()
            .find(|g| g.name == name)
            .ok_or_else(|| GoalError::GoalNotFound(name.to_string()))
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Goal, GoalError> {
        self.goals
            .iter_mut()
            .find(|g| g.name == name)
            .ok_or_else(|| GoalError::GoalNotFound(name.to_string()))
    }

    /// Pause tracking for a goal
    pub fn archive(&mut self, name: &str) -> Result<&Goal, GoalError> {
        self.transition(name, GoalStatus::Archived)
    }

    /// Resume tracking for an archived goal
    pub fn restore(&mut self, name: &str) -> Result<&Goal, GoalError> {
        self.transition(name, GoalStatus::Active)
    }

    fn transition(&mut self, name: &str, target: GoalStatus) -> Result<&Goal, GoalError> {
        let goal = self.get_mut(name)?;
        if goal.status == target {
            return Err(GoalError::InvalidState {
                name: name.to_string(),
                status: target,
            });
        }
        goal.status = target;
        Ok(&*goal)
    }

    /// Active goals in creation order
    pub fn list_active(&self) -> Vec<&Goal> {
        self.goals.iter().filter(|g| g.is_active()).collect()
    }

    /// All goals in creation order
    pub fn list_all(&self) -> &[Goal] {
        &self.goals
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Apply `delta` to the goal's entry for `date`, creating it if needed.
    ///
    /// Archived goals are rejected unless `allow_archived` is set. The date itself
    /// is not validated here; callers check it against "today" first.
    pub fn record(
        &mut self,
        name: &str,
        date: NaiveDate,
        delta: i64,
        allow_archived: bool,
    ) -> Result<RecordResult, GoalError> {
        let goal = self.get_mut(name)?;
        if !goal.is_active() && !allow_archived {
            return Err(GoalError::ArchivedGoal(name.to_string()));
        }

        let previous = goal.quantity_on(date);
        let net = previous
            .checked_add(delta)
            .ok_or_else(|| GoalError::InvalidQuantity {
                name: name.to_string(),
                date,
            })?;
        // A zero delta on an empty date leaves no entry behind
        if net != 0 || goal.entries.contains_key(&date) {
            goal.entries.insert(date, net);
        }

        Ok(RecordResult { previous, net })
    }

    /// Names of goals with an active entry on `date`, archived goals included
    pub fn active_goals_on(&self, date: NaiveDate) -> Vec<&str> {
        self.goals
            .iter()
            .filter(|g| g.is_active_on(date))
            .map(|g| g.name.as_str())
            .collect()
    }

    /// Number of active (goal, date) entries across the whole store
    pub fn total_active_entries(&self) -> usize {
        self.goals
            .iter()
            .map(|g| g.entries.values().filter(|qty| **qty > 0).count())
            .sum()
    }
}
