//! Narrative port - interface to the external text-generation service

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::entities::Skill;
use crate::domain::value_objects::{Element, RarityGrade, Role, StatRankBlock, WeaponType};

/// Inputs the narrative generator needs from a roll.
#[derive(Debug, Clone, Copy)]
pub struct NarrativeRequest {
    pub element: Element,
    pub weapon_type: WeaponType,
    pub role: Role,
    pub rarity: RarityGrade,
    pub stat_ranks: StatRankBlock,
}

/// Whatever narrative fields the external service managed to produce.
///
/// Every field is optional; missing fields are filled individually from the
/// local fallback generator, not as an all-or-nothing replacement.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialNarrative {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub flavor_text: Option<String>,
    #[serde(default)]
    pub skills: Option<PartialSkillSet>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialSkillSet {
    #[serde(default)]
    pub normal_attack: Option<Skill>,
    #[serde(default)]
    pub skill: Option<Skill>,
    #[serde(default)]
    pub burst: Option<Skill>,
}

#[derive(Debug, thiserror::Error)]
pub enum NarrativeError {
    /// No endpoint configured; expected in local setups.
    #[error("narrative service is not configured")]
    NotConfigured,
    #[error("narrative request failed: {0}")]
    Http(String),
    #[error("narrative response could not be parsed: {0}")]
    MalformedResponse(String),
}

/// Outbound port to the narrative text-generation service.
#[async_trait]
pub trait NarrativePort: Send + Sync {
    async fn generate(&self, request: &NarrativeRequest)
        -> Result<PartialNarrative, NarrativeError>;
}
