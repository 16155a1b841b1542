//! Core domain types for goalquest

mod attribute;
mod error;
mod goal;

pub use attribute::Attribute;
pub use error::GoalError;
pub use goal::{ensure_not_future, parse_date, Goal, GoalStatus, DATE_FORMAT};
