use chrono::NaiveDate;

use super::GoalStatus;

/// Typed failures of the progression core.
///
/// A failed operation never leaves a partial mutation behind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GoalError {
    #[error("Goal '{0}' already exists")]
    DuplicateGoal(String),

    #[error("Goal '{0}' not found")]
    GoalNotFound(String),

    #[error("Goal '{name}' is already {status}")]
    InvalidState { name: String, status: GoalStatus },

    #[error("Goal '{0}' is archived; restore it before logging")]
    ArchivedGoal(String),

    #[error("Invalid date '{0}' (expected YYYY-MM-DD, not in the future)")]
    InvalidDate(String),

    #[error("Invalid attribute '{0}' (expected one of STR, AGI, INT, VIT, PER)")]
    InvalidAttribute(String),

    #[error("Goal name must not be empty")]
    InvalidName,

    #[error("Quantity for '{name}' on {date} would overflow")]
    InvalidQuantity { name: String, date: NaiveDate },
}
