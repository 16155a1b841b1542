//! Shared test utilities for tracker integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use tempfile::TempDir;

use goalquest::progress::{Tracker, XpSource};
use goalquest::storage::StateFile;
use goalquest::{Attribute, TrackerState};

/// A date in March 2025, a month that starts on a Saturday
pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, d).expect("valid test date")
}

/// State with the given goals, all created on the 1st
pub fn state_with_goals(goals: &[(&str, Attribute)]) -> TrackerState {
    let mut state = TrackerState::default();
    let mut tracker = Tracker::new(&mut state);
    for (name, attribute) in goals {
        tracker
            .add_goal(name, "units", *attribute, day(1))
            .expect("Failed to add goal");
    }
    state
}

/// Creates a state file inside a fresh temp directory.
/// Keep the `TempDir` alive for as long as the file is used.
pub fn temp_state_file() -> (TempDir, StateFile) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file = StateFile::new(temp_dir.path().join("nested").join("state.json"));
    (temp_dir, file)
}

/// Number of XP awards granted for logs (quest bonuses excluded)
pub fn log_awards(state: &TrackerState) -> usize {
    state
        .xp_ledger
        .awards()
        .iter()
        .filter(|a| a.source == XpSource::Log)
        .count()
}
