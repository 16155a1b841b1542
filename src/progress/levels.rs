//! XP and Level system
//!
//! Level and rank are pure functions of total XP and are never stored.
//!
//! Level curve: level 1 starts at 0 XP, level `L >= 2` requires `100 * L` total XP.

use serde::Serialize;

/// XP per level step of the threshold curve
pub const XP_PER_LEVEL: u64 = 100;

/// Levels per rank band
pub const LEVELS_PER_RANK: u32 = 10;

/// Level calculations
pub struct Level;

impl Level {
    /// Calculate level for given XP
    pub fn for_xp(xp: u64) -> u32 {
        let level = (xp / XP_PER_LEVEL).max(1);
        u32::try_from(level).unwrap_or(u32::MAX)
    }

    /// Total XP required to reach `level`
    pub fn xp_required(level: u32) -> u64 {
        if level <= 1 {
            0
        } else {
            u64::from(level) * XP_PER_LEVEL
        }
    }

    /// Total XP required for the level after `current_level`
    pub fn xp_for_next(current_level: u32) -> u64 {
        Self::xp_required(current_level.saturating_add(1))
    }
}

/// Coarse tier derived from level in 10-level bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Rank {
    E,
    D,
    C,
    B,
    A,
    /// Ceiling label for every level past the last band
    S,
}

impl Rank {
    /// All ranks in ascending order
    pub const ALL: [Rank; 6] = [Rank::E, Rank::D, Rank::C, Rank::B, Rank::A, Rank::S];

    pub fn for_level(level: u32) -> Self {
        let band = (level / LEVELS_PER_RANK) as usize;
        Self::ALL[band.min(Self::ALL.len() - 1)]
    }

    pub fn for_xp(xp: u64) -> Self {
        Self::for_level(Level::for_xp(xp))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::E => "E-Rank",
            Self::D => "D-Rank",
            Self::C => "C-Rank",
            Self::B => "B-Rank",
            Self::A => "A-Rank",
            Self::S => "S-Rank",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Level snapshot for a given XP total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelInfo {
    pub total_xp: u64,
    pub level: u32,
    pub rank: Rank,
    /// XP needed for current level
    pub current_level_xp: u64,
    /// XP needed for next level
    pub next_level_xp: u64,
}

impl LevelInfo {
    pub fn new(total_xp: u64) -> Self {
        let level = Level::for_xp(total_xp);

        Self {
            total_xp,
            level,
            rank: Rank::for_level(level),
            current_level_xp: Level::xp_required(level),
            next_level_xp: Level::xp_for_next(level),
        }
    }

    /// Calculate progress percentage to next level (0.0 - 1.0)
    pub fn progress_to_next(&self) -> f32 {
        let xp_in_level = self.total_xp.saturating_sub(self.current_level_xp);
        let xp_for_level = self.next_level_xp.saturating_sub(self.current_level_xp);
        if xp_for_level == 0 {
            1.0
        } else {
            (xp_in_level as f32 / xp_for_level as f32).min(1.0)
        }
    }

    pub fn xp_to_next(&self) -> u64 {
        self.next_level_xp.saturating_sub(self.total_xp)
    }
}

/// A level up event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelUp {
    pub old_level: u32,
    pub new_level: u32,
    pub old_rank: Rank,
    pub new_rank: Rank,
}

impl LevelUp {
    /// Compare XP totals before and after an award
    pub fn between(old_xp: u64, new_xp: u64) -> Option<Self> {
        let old_level = Level::for_xp(old_xp);
        let new_level = Level::for_xp(new_xp);
        (new_level > old_level).then(|| Self {
            old_level,
            new_level,
            old_rank: Rank::for_level(old_level),
            new_rank: Rank::for_level(new_level),
        })
    }

    pub fn rank_changed(&self) -> bool {
        self.new_rank != self.old_rank
    }
}
