//! Badge definitions and metadata
//!
//! All badges are defined here with their unlock conditions.

use serde::{Deserialize, Serialize};

/// Unique identifier for each badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeId {
    // Log count badges
    FirstLog,
    TenLogs,
    HundredLogs,

    // Streak badges
    Streak3,
    Streak7,
    Streak30,
    Streak100,

    // Goal set badges
    GoalCollector,
    AllRounder,

    // Quest badges
    FirstQuest,
}

impl BadgeId {
    /// Get the string ID used in the data file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstLog => "first_log",
            Self::TenLogs => "ten_logs",
            Self::HundredLogs => "hundred_logs",
            Self::Streak3 => "streak3",
            Self::Streak7 => "streak7",
            Self::Streak30 => "streak30",
            Self::Streak100 => "streak100",
            Self::GoalCollector => "goal_collector",
            Self::AllRounder => "all_rounder",
            Self::FirstQuest => "first_quest",
        }
    }
}

impl std::fmt::Display for BadgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unlock condition, evaluated against derived player state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeRule {
    /// Active (goal, date) entries across all goals
    TotalLogs(usize),
    /// Longest streak of any single goal
    LongestStreak(u32),
    /// Goals ever created, archived ones included
    GoalCount(usize),
    /// Dates with a completed daily quest
    QuestsCompleted(usize),
    /// Distinct attributes covered by the goal set
    AttributesCovered(usize),
}

/// Badge definition with all metadata
#[derive(Debug, Clone)]
pub struct Badge {
    pub id: BadgeId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub rule: BadgeRule,
}

/// All badge definitions
pub static BADGES: &[Badge] = &[
    // === LOGS ===
    Badge {
        id: BadgeId::FirstLog,
        name: "First Step",
        description: "Log progress on any goal",
        icon: "🎯",
        rule: BadgeRule::TotalLogs(1),
    },
    Badge {
        id: BadgeId::TenLogs,
        name: "Getting Consistent",
        description: "Log 10 active days",
        icon: "📈",
        rule: BadgeRule::TotalLogs(10),
    },
    Badge {
        id: BadgeId::HundredLogs,
        name: "Centurion",
        description: "Log 100 active days",
        icon: "💯",
        rule: BadgeRule::TotalLogs(100),
    },
    // === STREAKS ===
    Badge {
        id: BadgeId::Streak3,
        name: "Warming Up",
        description: "Reach a 3-day streak",
        icon: "🔥",
        rule: BadgeRule::LongestStreak(3),
    },
    Badge {
        id: BadgeId::Streak7,
        name: "Week Warrior",
        description: "Reach a 7-day streak",
        icon: "🗓️",
        rule: BadgeRule::LongestStreak(7),
    },
    Badge {
        id: BadgeId::Streak30,
        name: "Iron Will",
        description: "Reach a 30-day streak",
        icon: "⚔️",
        rule: BadgeRule::LongestStreak(30),
    },
    Badge {
        id: BadgeId::Streak100,
        name: "Unbroken",
        description: "Reach a 100-day streak",
        icon: "👑",
        rule: BadgeRule::LongestStreak(100),
    },
    // === GOALS ===
    Badge {
        id: BadgeId::GoalCollector,
        name: "Goal Collector",
        description: "Track 5 goals",
        icon: "🗂️",
        rule: BadgeRule::GoalCount(5),
    },
    Badge {
        id: BadgeId::AllRounder,
        name: "All-Rounder",
        description: "Have a goal for every attribute",
        icon: "⭐",
        rule: BadgeRule::AttributesCovered(5),
    },
    // === QUESTS ===
    Badge {
        id: BadgeId::FirstQuest,
        name: "Prepared",
        description: "Complete the daily quest",
        icon: "📜",
        rule: BadgeRule::QuestsCompleted(1),
    },
];

impl Badge {
    /// Look up a badge definition
    pub fn get(id: BadgeId) -> &'static Badge {
        // Positions in BADGES
        let index = match id {
            BadgeId::FirstLog => 0,
            BadgeId::TenLogs => 1,
            BadgeId::HundredLogs => 2,
            BadgeId::Streak3 => 3,
            BadgeId::Streak7 => 4,
            BadgeId::Streak30 => 5,
            BadgeId::Streak100 => 6,
            BadgeId::GoalCollector => 7,
            BadgeId::AllRounder => 8,
            BadgeId::FirstQuest => 9,
        };
        &BADGES[index]
    }
}
