//! State file persistence
//!
//! The whole state is loaded once per invocation and, for mutating commands,
//! saved once at the end. Saving uses an exclusive lock plus temp file and
//! rename, so a crash mid-write never leaves a partial file behind.
//!
//! Two invocations racing each other are not coordinated beyond the write
//! itself: each loads, mutates and saves its own copy, and the last writer wins.

use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::debug;

use crate::state::{StateError, TrackerState};

/// Persistence failures. Loading fails closed: nothing here ever falls back to
/// an empty state for a file that exists.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse state file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("State file {} is inconsistent: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: StateError,
    },

    #[error("Failed to serialize state: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// JSON state file on disk
#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate the state. A missing file is a fresh start.
    pub fn load(&self) -> Result<TrackerState, StorageError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No state file yet, starting fresh");
            return Ok(TrackerState::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| StorageError::Io {
            action: "read",
            path: self.path.clone(),
            source,
        })?;

        let state: TrackerState =
            serde_json::from_str(&content).map_err(|source| StorageError::Parse {
                path: self.path.clone(),
                source,
            })?;

        state.validate().map_err(|source| StorageError::Invalid {
            path: self.path.clone(),
            source,
        })?;

        debug!(
            path = %self.path.display(),
            goals = state.goals.len(),
            "Loaded state"
        );
        Ok(state)
    }

    /// Save the state with atomic write and file locking.
    pub fn save(&self, state: &TrackerState) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(state).map_err(StorageError::Serialize)?;
        write_atomic(&self.path, &content)?;
        debug!(path = %self.path.display(), bytes = content.len(), "Saved state");
        Ok(())
    }
}

/// Replace `path` with `content` atomically.
///
/// 1. Exclusive lock on a sibling `.lock` file serializes concurrent writes
/// 2. Content goes to a sibling `.tmp` file, synced, then renamed over the target
/// 3. Parent directory is created if needed
pub fn write_atomic(path: &Path, content: &str) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                action: "create directory",
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    // Lock file is separate from the target to survive the rename
    let lock_path = sibling(path, "lock");
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&lock_path)
        .map_err(|source| StorageError::Io {
            action: "create lock file",
            path: lock_path.clone(),
            source,
        })?;

    lock_file
        .lock_exclusive()
        .map_err(|source| StorageError::Io {
            action: "lock",
            path: lock_path.clone(),
            source,
        })?;

    let temp_path = sibling(path, "tmp");
    let write_temp = || -> std::io::Result<()> {
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.sync_all()
    };
    write_temp().map_err(|source| StorageError::Io {
        action: "write",
        path: temp_path.clone(),
        source,
    })?;

    std::fs::rename(&temp_path, path).map_err(|source| StorageError::Io {
        action: "replace",
        path: path.to_path_buf(),
        source,
    })?;

    // Lock is released when lock_file is dropped
    Ok(())
}

/// `state.json` + `tmp` -> `state.json.tmp`
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("state"));
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}
