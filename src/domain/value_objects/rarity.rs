//! Rarity grades and their drop weights

use serde::{Deserialize, Serialize};

/// Rarity grade of a rolled character, best to worst.
///
/// Drop weights are percentages and sum to exactly 100.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RarityGrade {
    SS,
    S,
    A,
    B,
    C,
    D,
    E,
}

impl RarityGrade {
    /// Canonical order used for the weighted draw and for display.
    pub const ALL: [RarityGrade; 7] = [
        RarityGrade::SS,
        RarityGrade::S,
        RarityGrade::A,
        RarityGrade::B,
        RarityGrade::C,
        RarityGrade::D,
        RarityGrade::E,
    ];

    /// Drop weight as a percentage.
    pub fn weight(self) -> f64 {
        match self {
            RarityGrade::SS => 0.1,
            RarityGrade::S => 1.0,
            RarityGrade::A => 5.0,
            RarityGrade::B => 10.0,
            RarityGrade::C => 40.0,
            RarityGrade::D => 40.0,
            RarityGrade::E => 3.9,
        }
    }

    /// Multiplier applied to role base stats.
    pub fn stat_multiplier(self) -> f64 {
        match self {
            RarityGrade::SS => 2.0,
            RarityGrade::S => 1.8,
            RarityGrade::A => 1.5,
            RarityGrade::B => 1.3,
            RarityGrade::C => 1.1,
            RarityGrade::D => 1.0,
            RarityGrade::E => 0.85,
        }
    }

    /// Human-readable drop-rate descriptor, used in narrative prompts.
    pub fn descriptor(self) -> &'static str {
        match self {
            RarityGrade::SS => "SS Rank (0.1% drop rate - Mythical)",
            RarityGrade::S => "S Rank (1% drop rate - Legendary)",
            RarityGrade::A => "A Rank (5% drop rate - Epic)",
            RarityGrade::B => "B Rank (10% drop rate - Rare)",
            RarityGrade::C => "C Rank (40% drop rate - Uncommon)",
            RarityGrade::D => "D Rank (40% drop rate - Common)",
            RarityGrade::E => "E Rank (3.9% drop rate - Poor)",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RarityGrade::SS => "SS",
            RarityGrade::S => "S",
            RarityGrade::A => "A",
            RarityGrade::B => "B",
            RarityGrade::C => "C",
            RarityGrade::D => "D",
            RarityGrade::E => "E",
        }
    }

    /// Parse a grade code from a seed token.
    pub fn from_code(code: &str) -> Option<RarityGrade> {
        RarityGrade::ALL.iter().copied().find(|g| g.as_str() == code)
    }
}

impl std::fmt::Display for RarityGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
