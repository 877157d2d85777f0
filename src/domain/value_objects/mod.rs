//! Value objects for the character roulette domain

mod attributes;
mod ids;
mod rarity;
mod stats;

pub use attributes::{verify_prefix_uniqueness, Element, PrefixCollision, Role, WeaponType};
pub use ids::CharacterId;
pub use rarity::RarityGrade;
pub use stats::{BaseStats, StatBlock, StatRank, StatRankBlock};
