//! Character entity - a completed roll with narrative content

use serde::{Deserialize, Serialize};

use crate::domain::services::roller::RolledAttributes;
use crate::domain::value_objects::{
    CharacterId, Element, RarityGrade, Role, StatBlock, StatRankBlock, WeaponType,
};

/// One of a character's three abilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub description: String,
}

/// A character's normal attack, signature skill, and burst.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSet {
    pub normal_attack: Skill,
    pub skill: Skill,
    pub burst: Skill,
}

/// Narrative fields produced by the narrative generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeContent {
    pub title: String,
    pub class_name: String,
    pub flavor_text: String,
    pub skills: SkillSet,
}

/// A fully assembled character.
///
/// Constructed in one step from rolled attributes and narrative content, so
/// partially-built characters never exist. The rolled `rarity` is taken from
/// the attributes and never from the narrative merge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    pub element: Element,
    pub weapon_type: WeaponType,
    pub role: Role,
    pub rarity: RarityGrade,
    pub name: String,
    pub title: String,
    pub class_name: String,
    pub flavor_text: String,
    pub skills: SkillSet,
    pub stats: StatBlock,
    pub stat_ranks: StatRankBlock,
    /// Shareable seed token, `RARITY-ELE-WEA-ROL-TIMESTAMP`.
    pub seed: String,
}

impl Character {
    pub fn assemble(
        rolled: RolledAttributes,
        name: impl Into<String>,
        narrative: NarrativeContent,
        seed: String,
    ) -> Self {
        let name = name.into();
        Self {
            id: CharacterId::new(),
            element: rolled.element,
            weapon_type: rolled.weapon_type,
            role: rolled.role,
            rarity: rolled.rarity,
            name: if name.trim().is_empty() {
                "Unnamed Hero".to_string()
            } else {
                name
            },
            title: narrative.title,
            class_name: narrative.class_name,
            flavor_text: narrative.flavor_text,
            skills: narrative.skills,
            stats: rolled.stats,
            stat_ranks: rolled.stat_ranks,
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{StatRank, StatRankBlock};

    fn sample_rolled() -> RolledAttributes {
        RolledAttributes {
            element: Element::Fire,
            weapon_type: WeaponType::Sword,
            role: Role::Dps,
            rarity: RarityGrade::SS,
            stats: StatBlock {
                hp: 200,
                atk: 160,
                def: 100,
                speed: 140,
                em: 120,
            },
            stat_ranks: StatRankBlock {
                hp: StatRank::Good,
                atk: StatRank::Good,
                def: StatRank::Good,
                speed: StatRank::Good,
                em: StatRank::Good,
            },
        }
    }

    fn sample_narrative() -> NarrativeContent {
        NarrativeContent {
            title: "The Mythical Devastating Fire Sovereign".to_string(),
            class_name: "Infernal Blade Supreme".to_string(),
            flavor_text: "A legend.".to_string(),
            skills: SkillSet {
                normal_attack: Skill {
                    name: "Fire Sword Strike".to_string(),
                    description: "A swift strike.".to_string(),
                },
                skill: Skill {
                    name: "Fire Tempest".to_string(),
                    description: "A devastating technique.".to_string(),
                },
                burst: Skill {
                    name: "Ultimate Fire Cataclysm".to_string(),
                    description: "Elemental fury.".to_string(),
                },
            },
        }
    }

    #[test]
    fn rarity_comes_from_the_roll_not_the_narrative() {
        let character = Character::assemble(
            sample_rolled(),
            "Tester",
            sample_narrative(),
            "SS-FIR-SWO-DPS-1700000000000".to_string(),
        );
        assert_eq!(character.rarity, RarityGrade::SS);
    }

    #[test]
    fn blank_names_default_to_unnamed_hero() {
        let character = Character::assemble(
            sample_rolled(),
            "   ",
            sample_narrative(),
            "SS-FIR-SWO-DPS-1700000000000".to_string(),
        );
        assert_eq!(character.name, "Unnamed Hero");
    }

    #[test]
    fn serializes_with_frontend_field_names() {
        let character = Character::assemble(
            sample_rolled(),
            "Tester",
            sample_narrative(),
            "SS-FIR-SWO-DPS-1700000000000".to_string(),
        );
        let json = serde_json::to_value(&character).expect("serializable");
        assert_eq!(json["weaponType"], "Sword");
        assert_eq!(json["role"], "DPS");
        assert_eq!(json["rarity"], "SS");
        assert_eq!(json["statRanks"]["hp"], "good");
        assert!(json["skills"]["normalAttack"].is_object());
    }
}
