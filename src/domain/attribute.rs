use serde::{Deserialize, Serialize};

use super::GoalError;

/// Character stat a goal trains. Experience from a goal accumulates here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Attribute {
    /// Strength
    Str,
    /// Agility
    Agi,
    /// Intelligence
    Int,
    /// Vitality
    Vit,
    /// Perception
    Per,
}

impl Attribute {
    pub const ALL: [Attribute; 5] = [
        Attribute::Str,
        Attribute::Agi,
        Attribute::Int,
        Attribute::Vit,
        Attribute::Per,
    ];

    /// Tag used in the data file and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Str => "STR",
            Self::Agi => "AGI",
            Self::Int => "INT",
            Self::Vit => "VIT",
            Self::Per => "PER",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Str => "Strength",
            Self::Agi => "Agility",
            Self::Int => "Intelligence",
            Self::Vit => "Vitality",
            Self::Per => "Perception",
        }
    }
}

impl std::str::FromStr for Attribute {
    type Err = GoalError;

    /// Tags are matched case-insensitively; anything outside the fixed set is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STR" => Ok(Self::Str),
            "AGI" => Ok(Self::Agi),
            "INT" => Ok(Self::Int),
            "VIT" => Ok(Self::Vit),
            "PER" => Ok(Self::Per),
            _ => Err(GoalError::InvalidAttribute(s.to_string())),
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
