//! goalquest - habit tracking as a role-playing game
//!
//! Daily activity logs per goal turn into experience points, levels, ranks,
//! attribute scores, streaks, badges and a daily quest bonus.
//!
//! ## Layers
//!
//! 1. **Core** (`goals`, `progress`, `state`): a pure transformation of one
//!    in-memory [`TrackerState`]. No I/O, no clock; callers pass "today".
//! 2. **Storage** (`storage`): loads the state once and saves it once per
//!    invocation with an atomic write.
//! 3. **Config** (`config`): `~/.goalquest/config.toml`.
//!
//! The `goalquest` binary wires these together behind a small CLI.

pub mod config;
pub mod domain;
pub mod goals;
pub mod progress;
pub mod state;
pub mod storage;

pub use domain::*;
pub use state::TrackerState;
