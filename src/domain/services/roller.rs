//! Attribute roller: uniform picks plus the weighted rarity draw

use crate::domain::services::rng::RandomSource;
use crate::domain::services::stat_engine;
use crate::domain::value_objects::{
    Element, RarityGrade, Role, StatBlock, StatRankBlock, WeaponType,
};

/// Attributes produced by a single roll, before narrative generation.
#[derive(Debug, Clone, Copy)]
pub struct RolledAttributes {
    pub element: Element,
    pub weapon_type: WeaponType,
    pub role: Role,
    pub rarity: RarityGrade,
    pub stats: StatBlock,
    pub stat_ranks: StatRankBlock,
}

/// Pick one entry uniformly.
///
/// Panics on an empty table; the canonical attribute tables are fixed and
/// non-empty, so an empty input is a programmer error.
pub fn pick_uniform<T: Copy>(rng: &mut dyn RandomSource, options: &[T]) -> T {
    assert!(!options.is_empty(), "attribute table must not be empty");
    let idx = (rng.next() * options.len() as f64) as usize;
    // next() < 1.0 keeps idx in range; clamp anyway against float edge cases
    options[idx.min(options.len() - 1)]
}

/// Weighted rarity draw over the canonical grade order.
///
/// Draws u ~ Uniform(0, 100) and walks the grades accumulating weights,
/// returning the first grade whose cumulative weight reaches u. The weights
/// sum to exactly 100, so the fallback to C only covers floating-point drift.
pub fn pick_weighted_rarity(rng: &mut dyn RandomSource) -> RarityGrade {
    let u = rng.next() * 100.0;
    let mut cumulative = 0.0;

    for grade in RarityGrade::ALL {
        cumulative += grade.weight();
        if u <= cumulative {
            return grade;
        }
    }

    RarityGrade::C
}

/// Roll a full attribute set: element, weapon, and role uniformly, rarity by
/// weight, then stats and ranks from the stat engine.
///
/// `attr_rng` drives the categorical draws; `stat_seed`, when present, makes
/// the stat jitter reproducible independently of the categorical draws.
pub fn roll_attributes(
    attr_rng: &mut dyn RandomSource,
    stat_seed: Option<u32>,
) -> RolledAttributes {
    let element = pick_uniform(attr_rng, &Element::ALL);
    let weapon_type = pick_uniform(attr_rng, &WeaponType::ALL);
    let role = pick_uniform(attr_rng, &Role::ALL);
    let rarity = pick_weighted_rarity(attr_rng);

    let stats = match stat_seed {
        Some(seed) => stat_engine::calculate_stats_seeded(role, rarity, seed),
        None => stat_engine::calculate_stats(role, rarity, attr_rng),
    };
    let stat_ranks = stat_engine::calculate_stat_ranks(&stats, role, rarity);

    RolledAttributes {
        element,
        weapon_type,
        role,
        rarity,
        stats,
        stat_ranks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::rng::SeededRandom;

    /// Replays a fixed script of unit-interval draws.
    struct ScriptedRandom {
        values: Vec<f64>,
        pos: usize,
    }

    impl ScriptedRandom {
        fn new(values: Vec<f64>) -> Self {
            Self { values, pos: 0 }
        }
    }

    impl RandomSource for ScriptedRandom {
        fn next(&mut self) -> f64 {
            let v = self.values[self.pos % self.values.len()];
            self.pos += 1;
            v
        }
    }

    #[test]
    fn pick_uniform_covers_the_whole_table() {
        let mut rng = ScriptedRandom::new(vec![0.0, 0.5, 0.999]);
        assert_eq!(pick_uniform(&mut rng, &Element::ALL), Element::Fire);
        assert_eq!(pick_uniform(&mut rng, &Element::ALL), Element::Geo);
        assert_eq!(pick_uniform(&mut rng, &Element::ALL), Element::Void);
    }

    #[test]
    #[should_panic(expected = "attribute table must not be empty")]
    fn pick_uniform_rejects_empty_table() {
        let mut rng = ScriptedRandom::new(vec![0.5]);
        pick_uniform::<Element>(&mut rng, &[]);
    }

    #[test]
    fn weighted_rarity_hits_boundary_grades() {
        // Cumulative weights: SS 0.1, S 1.1, A 6.1, B 16.1, C 56.1, D 96.1, E 100
        let cases = [
            (0.0005, RarityGrade::SS),
            (0.005, RarityGrade::S),
            (0.02, RarityGrade::A),
            (0.1, RarityGrade::B),
            (0.3, RarityGrade::C),
            (0.7, RarityGrade::D),
            (0.97, RarityGrade::E),
        ];
        for (draw, expected) in cases {
            let mut rng = ScriptedRandom::new(vec![draw]);
            assert_eq!(pick_weighted_rarity(&mut rng), expected, "draw {draw}");
        }
    }

    #[test]
    fn weighted_rarity_distribution_matches_weights() {
        let mut rng = SeededRandom::new(0xDEAD_BEEF);
        let mut counts = std::collections::HashMap::new();
        let draws = 100_000;
        for _ in 0..draws {
            *counts.entry(pick_weighted_rarity(&mut rng)).or_insert(0u32) += 1;
        }

        for grade in RarityGrade::ALL {
            let observed = f64::from(*counts.get(&grade).unwrap_or(&0)) / draws as f64 * 100.0;
            let expected = grade.weight();
            // sigma of the observed percentage at n=100k; allow 5 sigma
            let sigma = (expected * (100.0 - expected) / draws as f64).sqrt();
            let tolerance = (5.0 * sigma).max(0.05);
            assert!(
                (observed - expected).abs() <= tolerance,
                "{grade}: observed {observed:.3}% expected {expected}% (tol {tolerance:.3})"
            );
        }
    }

    #[test]
    fn roll_attributes_is_internally_consistent() {
        let mut rng = SeededRandom::new(7);
        let rolled = roll_attributes(&mut rng, Some(42));
        let expected =
            crate::domain::services::stat_engine::calculate_stats_seeded(rolled.role, rolled.rarity, 42);
        assert_eq!(rolled.stats, expected);
    }
}
