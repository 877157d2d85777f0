//! Stat engine: derives numeric stats from (role, rarity) and classifies
//! each stat against its statistically expected value

use crate::domain::services::rng::{RandomSource, SeededRandom};
use crate::domain::value_objects::{RarityGrade, Role, StatBlock, StatRank, StatRankBlock};

/// Derive stats for a role and rarity, drawing one jitter factor per stat
/// field from `rng`, in hp, atk, def, speed, em order.
///
/// Each field is `round(base * multiplier * jitter)` with jitter drawn
/// independently from Uniform(0.9, 1.1).
pub fn calculate_stats(role: Role, rarity: RarityGrade, rng: &mut dyn RandomSource) -> StatBlock {
    let base = role.base_stats();
    let multiplier = rarity.stat_multiplier();
    let mut jitter = || rng.next_float(0.9, 1.1);

    StatBlock {
        hp: (base.hp * multiplier * jitter()).round() as u32,
        atk: (base.atk * multiplier * jitter()).round() as u32,
        def: (base.def * multiplier * jitter()).round() as u32,
        speed: (base.speed * multiplier * jitter()).round() as u32,
        em: (base.em * multiplier * jitter()).round() as u32,
    }
}

/// Seeded variant: the same seed and (role, rarity) always produce the same
/// stat block.
pub fn calculate_stats_seeded(role: Role, rarity: RarityGrade, seed: u32) -> StatBlock {
    let mut rng = SeededRandom::new(seed);
    calculate_stats(role, rarity, &mut rng)
}

/// Classify one stat against its expected value.
///
/// Pure function of (value, expected); no randomness. Re-derive ranks with
/// this wherever they are displayed so classifications never drift.
pub fn classify_stat(value: u32, expected: f64) -> StatRank {
    let ratio = f64::from(value) / expected;

    if ratio >= 1.12 {
        StatRank::Divine
    } else if ratio >= 1.04 {
        StatRank::Excellent
    } else if ratio >= 0.96 {
        StatRank::Good
    } else if ratio >= 0.88 {
        StatRank::Average
    } else {
        StatRank::BelowAverage
    }
}

/// Rank every field of a stat block for its role and rarity.
pub fn calculate_stat_ranks(stats: &StatBlock, role: Role, rarity: RarityGrade) -> StatRankBlock {
    let base = role.base_stats();
    let multiplier = rarity.stat_multiplier();

    StatRankBlock {
        hp: classify_stat(stats.hp, base.hp * multiplier),
        atk: classify_stat(stats.atk, base.atk * multiplier),
        def: classify_stat(stats.def, base.def * multiplier),
        speed: classify_stat(stats.speed, base.speed * multiplier),
        em: classify_stat(stats.em, base.em * multiplier),
    }
}
