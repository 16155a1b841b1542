//! Progression system: Streaks, XP, Levels, Ranks, Badges, the Daily Quest and Heatmaps
//!
//! This module turns the goal store's log history into role-playing progression.
//! Mutations go through [`Tracker`]; reads go through [`TrackerQuery`].

mod badges;
mod checker;
mod heatmap;
mod levels;
mod manager;
mod profile;
mod queries;
mod quest;
mod streaks;
mod xp;

pub use badges::{Badge, BadgeId, BadgeRule, BADGES};
pub use checker::{check_badges, BadgeContext};
pub use heatmap::{Heatmap, HeatmapRange, HeatmapTarget, Intensity};
pub use levels::{Level, LevelInfo, LevelUp, Rank, LEVELS_PER_RANK, XP_PER_LEVEL};
pub use manager::{GoalOutcome, LogOutcome, LogXp, ProgressEvent, Tracker, TrackerPolicy};
pub use profile::{BadgeSummary, PlayerProfile, ProfileSummary, UnlockedBadge};
pub use queries::{GoalReport, TrackerQuery};
pub use quest::{QuestProgress, QUEST_GOAL_COUNT};
pub use streaks::StreakInfo;
pub use xp::{XpAward, XpLedger, XpRewards, XpSource};
