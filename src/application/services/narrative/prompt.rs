//! Prompt construction for the external narrative service

use crate::application::ports::outbound::NarrativeRequest;

/// Build the character-creation prompt sent to the narrative service.
///
/// The response contract is spelled out in the prompt itself: a single JSON
/// object with title, className, flavorText, and three skills.
pub fn build_prompt(request: &NarrativeRequest) -> String {
    let NarrativeRequest {
        element,
        weapon_type,
        role,
        rarity,
        stat_ranks,
    } = request;

    format!(
        r#"Create a unique RPG character with the following attributes:

CORE ATTRIBUTES:
- Rank: {rarity_descriptor}
- Element: {element}
- Weapon: {weapon_type}
- Role: {role}

STAT DISTRIBUTION:
- HP (Health): {hp}
- ATK (Attack/Strength): {atk}
- DEF (Defense): {def}
- SPEED (Agility): {speed}
- EM (Elemental Mastery): {em}

Based on these stats and attributes, provide:

1. TITLE: An epic, unique title that reflects their rank, dominant stats, and element
   (e.g., "The Divine Flame Sovereign" for high EM/ATK fire character)

2. CLASS: A creative class name that combines their weapon and element
   (e.g., "Pyroclastic Blade Master", "Cryogenic Archer")

3. FLAVOR TEXT: 2-3 sentences describing their background and how their stats reflect their fighting style

4. THREE SKILLS that match their element, weapon, and stat distribution:
   - Normal Attack: Basic attack using {weapon_type}
   - Skill: A signature technique (cooldown ability)
   - Burst: Ultimate ability that showcases their strengths

Make each skill reflect their stat distribution. For example:
- High SPEED characters should have quick, multi-hit skills
- High EM characters should have powerful elemental reactions
- High DEF characters should have defensive/counter skills

Return ONLY valid JSON (no markdown code blocks):
{{
  "title": "Character Title",
  "className": "Class Name",
  "flavorText": "Background story...",
  "skills": {{
    "normalAttack": {{
      "name": "Skill Name",
      "description": "What it does..."
    }},
    "skill": {{
      "name": "Skill Name",
      "description": "What it does..."
    }},
    "burst": {{
      "name": "Skill Name",
      "description": "What it does..."
    }}
  }}
}}"#,
        rarity_descriptor = rarity.descriptor(),
        hp = stat_ranks.hp,
        atk = stat_ranks.atk,
        def = stat_ranks.def,
        speed = stat_ranks.speed,
        em = stat_ranks.em,
    )
}
