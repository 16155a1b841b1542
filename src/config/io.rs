//! Configuration file I/O operations

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use super::Config;
use crate::storage;

/// Default configuration content written by `goalquest init`
pub const DEFAULT_CONFIG: &str = r#"# goalquest configuration
# =======================

# Where goals, logs and progression are stored.
# Defaults to ~/.goalquest/state.json when unset.
[storage]
# data_file = "/path/to/state.json"

# Tracking rules
#   allow_archived_logging - Accept logs for archived goals (default: false)
[tracking]
allow_archived_logging = false

# Terminal output
#   heatmap_weeks - Weeks of history shown by `show` and `log` (default: 52)
[display]
heatmap_weeks = 52
"#;

impl Config {
    /// Get the global config directory path (~/.goalquest/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".goalquest")
    }

    /// Get the global config file path (~/.goalquest/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Default state file path (~/.goalquest/state.json)
    pub fn default_data_path() -> PathBuf {
        Self::global_config_dir().join("state.json")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load the given config file, or the global one.
    ///
    /// A missing global config means defaults. An explicitly requested file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let global_path = Self::global_config_path();
                if global_path.exists() {
                    Self::from_file(&global_path)
                } else {
                    tracing::debug!("No config at {}, using defaults", global_path.display());
                    Ok(Self::default())
                }
            }
        }
    }

    /// Write the commented default config, refusing to overwrite unless `force`
    pub fn init_file(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            bail!(
                "Configuration already exists: {}\nUse --force to overwrite.",
                path.display()
            );
        }
        write_atomic(path, DEFAULT_CONFIG)
    }

    /// Save configuration to a file with atomic write and file locking.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;
        write_atomic(path, &content)
    }
}

/// Atomic, locked write shared with the state file
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    storage::write_atomic(path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        Config::init_file(&path, false).unwrap();
        assert!(Config::init_file(&path, false).is_err());
        assert!(Config::init_file(&path, true).is_ok());
        assert_eq!(Config::load(Some(&path)).unwrap(), Config::default());
    }

    #[test]
    fn test_save_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg").join("config.toml");

        let mut config = Config::default();
        config.tracking.allow_archived_logging = true;
        config.display.heatmap_weeks = 12;
        config.save_to_file(&path).unwrap();

        assert_eq!(Config::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_oversized_heatmap_weeks_rejected_on_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[display]\nheatmap_weeks = 4294967295\n").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("heatmap_weeks"));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("nope.toml"))).is_err());
    }
}
