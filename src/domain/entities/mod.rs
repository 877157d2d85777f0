//! Domain entities

mod character;

pub use character::{Character, NarrativeContent, Skill, SkillSet};
