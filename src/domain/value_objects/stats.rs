//! Character stats, qualitative ranks, and the role base-stat tables

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Role;

/// The five numeric stats of a character, rounded to integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub speed: u32,
    pub em: u32,
}

/// Base stats before the rarity multiplier and jitter are applied.
#[derive(Debug, Clone, Copy)]
pub struct BaseStats {
    pub hp: f64,
    pub atk: f64,
    pub def: f64,
    pub speed: f64,
    pub em: f64,
}

impl Role {
    /// Base stat table for this role.
    pub fn base_stats(self) -> BaseStats {
        match self {
            Role::Dps => BaseStats { hp: 100.0, atk: 80.0, def: 50.0, speed: 70.0, em: 60.0 },
            Role::BurstDps => BaseStats { hp: 90.0, atk: 90.0, def: 40.0, speed: 60.0, em: 80.0 },
            Role::Support => BaseStats { hp: 110.0, atk: 40.0, def: 70.0, speed: 65.0, em: 75.0 },
            Role::Tank => BaseStats { hp: 120.0, atk: 30.0, def: 90.0, speed: 40.0, em: 50.0 },
            Role::Control => BaseStats { hp: 100.0, atk: 50.0, def: 60.0, speed: 75.0, em: 70.0 },
        }
    }
}

/// Qualitative rank of a stat relative to its expected value.
///
/// Ordered worst to best so that rank comparisons follow ratio comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StatRank {
    #[serde(rename = "below average")]
    BelowAverage,
    #[serde(rename = "average")]
    Average,
    #[serde(rename = "good")]
    Good,
    #[serde(rename = "excellent")]
    Excellent,
    #[serde(rename = "divine")]
    Divine,
}

impl StatRank {
    pub fn as_str(self) -> &'static str {
        match self {
            StatRank::BelowAverage => "below average",
            StatRank::Average => "average",
            StatRank::Good => "good",
            StatRank::Excellent => "excellent",
            StatRank::Divine => "divine",
        }
    }
}

impl std::fmt::Display for StatRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-stat qualitative ranks, parallel to [`StatBlock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRankBlock {
    pub hp: StatRank,
    pub atk: StatRank,
    pub def: StatRank,
    pub speed: StatRank,
    pub em: StatRank,
}

impl StatRankBlock {
    /// The stat whose rank is highest; ties go to the earlier field in
    /// hp, atk, def, speed, em order. Drives fallback title generation.
    pub fn dominant_stat(&self) -> &'static str {
        let fields = [
            ("hp", self.hp),
            ("atk", self.atk),
            ("def", self.def),
            ("speed", self.speed),
            ("em", self.em),
        ];
        let mut best = fields[0];
        for field in &fields[1..] {
            if field.1 > best.1 {
                best = *field;
            }
        }
        best.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_ordering_matches_quality() {
        assert!(StatRank::Divine > StatRank::Excellent);
        assert!(StatRank::Excellent > StatRank::Good);
        assert!(StatRank::Good > StatRank::Average);
        assert!(StatRank::Average > StatRank::BelowAverage);
    }

    #[test]
    fn dominant_stat_prefers_earlier_field_on_ties() {
        let ranks = StatRankBlock {
            hp: StatRank::Good,
            atk: StatRank::Good,
            def: StatRank::Average,
            speed: StatRank::Divine,
            em: StatRank::Divine,
        };
        assert_eq!(ranks.dominant_stat(), "speed");
    }
}
