//! Goal storage: the set of goals and their daily log histories

mod store;

pub use store::{GoalStore, RecordResult};
