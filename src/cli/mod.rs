//! CLI command implementations

pub mod goals;
pub mod init;
pub mod log;
pub mod profile;
pub mod render;
pub mod seed;
pub mod show;

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use chrono::{Local, NaiveDate};

use goalquest::config::Config;
use goalquest::progress::{Tracker, TrackerQuery};
use goalquest::storage::StateFile;
use goalquest::TrackerState;

/// Everything a command needs for one invocation
pub struct Context {
    pub config: Config,
    pub state_file: StateFile,
    pub today: NaiveDate,
}

impl Context {
    pub fn load(config_path: Option<&Path>, data_path: Option<PathBuf>) -> Result<Self> {
        let config = Config::load(config_path)?;
        let data_file = data_path.unwrap_or_else(|| config.data_file());

        Ok(Self {
            config,
            state_file: StateFile::new(data_file),
            today: Local::now().date_naive(),
        })
    }

    /// Load the state; a broken state file stops the command
    pub fn load_state(&self) -> Result<TrackerState> {
        self.state_file
            .load()
            .with_context(|| "Refusing to continue with an unreadable state file")
    }

    pub fn save_state(&self, state: &TrackerState) -> Result<()> {
        self.state_file.save(state)?;
        Ok(())
    }

    /// Load, apply one mutation, save. Nothing is saved if the mutation fails.
    pub fn mutate<T>(
        &self,
        apply: impl FnOnce(&mut Tracker<'_>) -> Result<T, goalquest::GoalError>,
    ) -> Result<(T, TrackerState)> {
        let mut state = self.load_state()?;
        let mut tracker = Tracker::with_policy(&mut state, self.config.policy());
        let value = apply(&mut tracker)?;
        self.save_state(&state)?;
        Ok((value, state))
    }

    pub fn heatmap_weeks(&self) -> u32 {
        self.config.display.heatmap_weeks
    }
}

/// Shorthand for read-only commands
pub fn query(state: &TrackerState) -> TrackerQuery<'_> {
    TrackerQuery::new(state)
}
