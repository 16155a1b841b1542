//! Configuration loading and management

mod io;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::progress::TrackerPolicy;

/// Default number of weeks shown in heatmaps
pub const DEFAULT_HEATMAP_WEEKS: u32 = 52;

/// Largest accepted `heatmap_weeks` (ten years)
pub const MAX_HEATMAP_WEEKS: u32 = 520;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Where the state lives
    #[serde(default)]
    pub storage: StorageSettings,

    /// Tracking rules
    #[serde(default)]
    pub tracking: TrackingSettings,

    /// Terminal output
    #[serde(default)]
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageSettings {
    /// State file path; defaults to `~/.goalquest/state.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackingSettings {
    /// Accept logs against archived goals (default: false)
    #[serde(default)]
    pub allow_archived_logging: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplaySettings {
    /// Weeks of history in a heatmap (default: 52)
    #[serde(default = "default_heatmap_weeks")]
    pub heatmap_weeks: u32,
}

fn default_heatmap_weeks() -> u32 {
    DEFAULT_HEATMAP_WEEKS
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            heatmap_weeks: DEFAULT_HEATMAP_WEEKS,
        }
    }
}

impl Config {
    /// State file to use, falling back to the default location
    pub fn data_file(&self) -> PathBuf {
        self.storage
            .data_file
            .clone()
            .unwrap_or_else(Self::default_data_path)
    }

    /// Reject values the display code cannot work with
    pub fn validate(&self) -> anyhow::Result<()> {
        let weeks = self.display.heatmap_weeks;
        if weeks == 0 || weeks > MAX_HEATMAP_WEEKS {
            anyhow::bail!(
                "display.heatmap_weeks must be between 1 and {MAX_HEATMAP_WEEKS}, got {weeks}"
            );
        }
        Ok(())
    }

    /// Policy handed to the tracker
    pub fn policy(&self) -> TrackerPolicy {
        TrackerPolicy {
            allow_archived_logging: self.tracking.allow_archived_logging,
        }
    }
}
