//! Local template-based narrative generation
//!
//! Used whenever the external narrative service is unavailable or returns an
//! incomplete response. Titles are keyed by rarity tier and the dominant
//! stat, class names by element/weapon adjective tables, and flavor and skill
//! text by token-substituted templates.

use crate::application::ports::outbound::NarrativeRequest;
use crate::domain::entities::{NarrativeContent, Skill, SkillSet};
use crate::domain::services::rng::RandomSource;
use crate::domain::value_objects::{Element, RarityGrade, Role, StatRankBlock, WeaponType};

/// Generate every narrative field locally.
pub fn generate(request: &NarrativeRequest, rng: &mut dyn RandomSource) -> NarrativeContent {
    NarrativeContent {
        title: generate_title(request.element, request.rarity, &request.stat_ranks, rng),
        class_name: generate_class_name(request.element, request.weapon_type, request.rarity, rng),
        flavor_text: generate_flavor_text(request.element, request.weapon_type, request.role, rng),
        skills: generate_skills(request.element, request.weapon_type),
    }
}

/// Rank-weighted title: rarity-tier phrase + dominant-stat modifier +
/// element noun.
pub fn generate_title(
    element: Element,
    rarity: RarityGrade,
    stat_ranks: &StatRankBlock,
    rng: &mut dyn RandomSource,
) -> String {
    let rank_titles: [&str; 3] = match rarity {
        RarityGrade::SS => ["The Mythical", "The Transcendent", "The Divine"],
        RarityGrade::S => ["The Legendary", "The Supreme", "The Exalted"],
        RarityGrade::A => ["The Epic", "The Renowned", "The Illustrious"],
        RarityGrade::B => ["The Skilled", "The Adept", "The Proficient"],
        RarityGrade::C => ["The Capable", "The Trained", "The Competent"],
        RarityGrade::D => ["The Aspiring", "The Novice", "The Developing"],
        RarityGrade::E => ["The Struggling", "The Untested", "The Fledgling"],
    };

    let stat_modifiers: [&str; 4] = match stat_ranks.dominant_stat() {
        "hp" => ["Enduring", "Resilient", "Undying", "Eternal"],
        "atk" => ["Devastating", "Crushing", "Obliterating", "Annihilating"],
        "def" => ["Unbreakable", "Impenetrable", "Stalwart", "Adamant"],
        "speed" => ["Swift", "Lightning", "Blazing", "Phantom"],
        _ => ["Elemental", "Arcane", "Mystical", "Primordial"],
    };

    let element_nouns = ["Sovereign", "Warden", "Champion", "Master"];

    let rank_title = pick(rng, &rank_titles);
    let modifier = pick(rng, &stat_modifiers);
    let noun = pick(rng, &element_nouns);

    format!("{rank_title} {modifier} {element} {noun}")
}

/// Element adjective + weapon title, with a rank modifier for high rarities.
pub fn generate_class_name(
    element: Element,
    weapon_type: WeaponType,
    rarity: RarityGrade,
    rng: &mut dyn RandomSource,
) -> String {
    let element_adjectives: [&str; 4] = match element {
        Element::Fire => ["Pyroclastic", "Infernal", "Volcanic", "Scorching"],
        Element::Water => ["Torrential", "Tidal", "Aquatic", "Oceanic"],
        Element::Electro => ["Voltaic", "Thunderous", "Galvanic", "Storm-born"],
        Element::Geo => ["Tectonic", "Crystalline", "Terran", "Lithic"],
        Element::Wind => ["Tempestuous", "Zephyr", "Cyclonic", "Aeolian"],
        Element::Ice => ["Cryogenic", "Glacial", "Frost-bound", "Boreal"],
        Element::Void => ["Abyssal", "Shadow-touched", "Void-born", "Umbral"],
    };

    let weapon_titles: [&str; 4] = match weapon_type {
        WeaponType::Sword => ["Blade", "Fencer", "Duelist", "Swordsman"],
        WeaponType::Claymore => ["Berserker", "Crusher", "Titan", "Colossus"],
        WeaponType::Spear => ["Lancer", "Dragoon", "Impaler", "Sentinel"],
        WeaponType::Bow => ["Archer", "Marksman", "Ranger", "Sniper"],
        WeaponType::Catalyst => ["Mage", "Sorcerer", "Arcanist", "Sage"],
    };

    let prefix = pick(rng, &element_adjectives);
    let suffix = pick(rng, &weapon_titles);

    match rarity {
        RarityGrade::SS | RarityGrade::S => format!("{prefix} {suffix} Supreme"),
        RarityGrade::A => format!("Elite {prefix} {suffix}"),
        _ => format!("{prefix} {suffix}"),
    }
}

/// Templated background text substituting element/weapon/role tokens.
pub fn generate_flavor_text(
    element: Element,
    weapon_type: WeaponType,
    role: Role,
    rng: &mut dyn RandomSource,
) -> String {
    let templates = [
        format!(
            "A legendary warrior who harnesses the raw power of {element} through their \
             {weapon_type}. As a {role}, they stand ready to defend the realm against any threat."
        ),
        format!(
            "Blessed by the ancient spirits of {element}, this {role} wields their \
             {weapon_type} with unmatched skill and precision."
        ),
        format!(
            "From the depths of forgotten lands comes a {role} whose mastery over {element} \
             and {weapon_type} is unparalleled in the realm."
        ),
        format!(
            "Trained in the sacred arts of {element} manipulation, this {role} has dedicated \
             their life to perfecting the way of the {weapon_type}."
        ),
        format!(
            "A mysterious figure cloaked in {element} energy, their {weapon_type} strikes \
             fear into the hearts of those who dare oppose them."
        ),
    ];

    pick(rng, &templates).clone()
}

/// The three skills, composed from element and weapon tokens.
pub fn generate_skills(element: Element, weapon_type: WeaponType) -> SkillSet {
    let element_lower = element.as_str().to_lowercase();
    let weapon_lower = weapon_type.as_str().to_lowercase();

    SkillSet {
        normal_attack: Skill {
            name: format!("{element} {weapon_type} Strike"),
            description: format!(
                "Performs a swift {weapon_lower} attack infused with {element_lower} energy, \
                 dealing moderate damage to enemies."
            ),
        },
        skill: Skill {
            name: format!("{element} Tempest"),
            description: format!(
                "Channels the power of {element_lower} to unleash a devastating {weapon_lower} \
                 technique, dealing heavy damage and applying {element_lower} status effects."
            ),
        },
        burst: Skill {
            name: format!("Ultimate {element} Cataclysm"),
            description: format!(
                "Unleashes the full potential of {element_lower} mastery, combining \
                 {weapon_lower} techniques with elemental fury to devastate all enemies in the \
                 area. This legendary technique can turn the tide of any battle."
            ),
        },
    }
}

fn pick<'a, T>(rng: &mut dyn RandomSource, options: &'a [T]) -> &'a T {
    let idx = (rng.next() * options.len() as f64) as usize;
    &options[idx.min(options.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::rng::SeededRandom;
    use crate::domain::value_objects::StatRank;

    fn ranks(dominant: StatRank, rest: StatRank) -> StatRankBlock {
        StatRankBlock {
            hp: rest,
            atk: dominant,
            def: rest,
            speed: rest,
            em: rest,
        }
    }

    #[test]
    fn title_reflects_rarity_tier_and_dominant_stat() {
        let mut rng = SeededRandom::new(3);
        let title = generate_title(
            Element::Fire,
            RarityGrade::SS,
            &ranks(StatRank::Divine, StatRank::Average),
            &mut rng,
        );
        assert!(
            title.starts_with("The Mythical")
                || title.starts_with("The Transcendent")
                || title.starts_with("The Divine"),
            "unexpected title: {title}"
        );
        assert!(title.contains("Fire"), "unexpected title: {title}");
        let atk_modifiers = ["Devastating", "Crushing", "Obliterating", "Annihilating"];
        assert!(
            atk_modifiers.iter().any(|m| title.contains(m)),
            "unexpected title: {title}"
        );
    }

    #[test]
    fn class_name_carries_rank_modifier_for_high_rarities() {
        let mut rng = SeededRandom::new(4);
        let ss = generate_class_name(Element::Ice, WeaponType::Bow, RarityGrade::SS, &mut rng);
        assert!(ss.ends_with("Supreme"), "unexpected class: {ss}");

        let a = generate_class_name(Element::Ice, WeaponType::Bow, RarityGrade::A, &mut rng);
        assert!(a.starts_with("Elite "), "unexpected class: {a}");

        let c = generate_class_name(Element::Ice, WeaponType::Bow, RarityGrade::C, &mut rng);
        assert!(!c.contains("Supreme") && !c.starts_with("Elite "), "unexpected class: {c}");
    }

    #[test]
    fn skills_substitute_element_and_weapon_tokens() {
        let skills = generate_skills(Element::Void, WeaponType::Catalyst);
        assert_eq!(skills.normal_attack.name, "Void Catalyst Strike");
        assert!(skills.skill.description.contains("void"));
        assert!(skills.burst.description.contains("catalyst"));
    }

    #[test]
    fn every_generated_field_is_non_empty() {
        let mut rng = SeededRandom::new(5);
        let request = NarrativeRequest {
            element: Element::Geo,
            weapon_type: WeaponType::Spear,
            role: Role::Control,
            rarity: RarityGrade::D,
            stat_ranks: ranks(StatRank::Good, StatRank::Average),
        };
        let content = generate(&request, &mut rng);
        assert!(!content.title.is_empty());
        assert!(!content.class_name.is_empty());
        assert!(!content.flavor_text.is_empty());
        assert!(!content.skills.normal_attack.name.is_empty());
        assert!(!content.skills.skill.description.is_empty());
        assert!(!content.skills.burst.description.is_empty());
    }
}
