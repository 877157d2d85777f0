//! Narrative Service - external generation with per-field local fallback
//!
//! Attempts the external narrative call and merges its response with the
//! local template generator field by field: whatever the service produced is
//! kept, everything missing is generated locally. A failed or unconfigured
//! call therefore still yields a fully populated [`NarrativeContent`] and the
//! failure never reaches the caller.

use std::sync::Arc;

use crate::application::ports::outbound::{
    NarrativeError, NarrativePort, NarrativeRequest, PartialNarrative,
};
use crate::application::services::narrative::fallback;
use crate::domain::entities::{NarrativeContent, SkillSet};
use crate::domain::services::rng::EntropyRandom;

/// Service that turns rolled attributes into narrative content.
pub struct NarrativeService {
    port: Arc<dyn NarrativePort>,
}

impl NarrativeService {
    pub fn new(port: Arc<dyn NarrativePort>) -> Self {
        Self { port }
    }

    /// Generate narrative content for a roll. Infallible by contract.
    pub async fn generate(&self, request: &NarrativeRequest) -> NarrativeContent {
        let partial = match self.port.generate(request).await {
            Ok(partial) => partial,
            Err(NarrativeError::NotConfigured) => {
                tracing::debug!("narrative service not configured, using local fallback");
                return fallback::generate(request, &mut EntropyRandom::new());
            }
            Err(e) => {
                tracing::warn!("narrative generation failed, using local fallback: {e}");
                return fallback::generate(request, &mut EntropyRandom::new());
            }
        };

        Self::merge(request, partial)
    }

    /// Fill every missing field of `partial` from the local generator.
    fn merge(request: &NarrativeRequest, partial: PartialNarrative) -> NarrativeContent {
        let mut rng = EntropyRandom::new();
        let partial_skills = partial.skills.unwrap_or_default();

        NarrativeContent {
            title: partial.title.unwrap_or_else(|| {
                fallback::generate_title(
                    request.element,
                    request.rarity,
                    &request.stat_ranks,
                    &mut rng,
                )
            }),
            class_name: partial.class_name.unwrap_or_else(|| {
                fallback::generate_class_name(
                    request.element,
                    request.weapon_type,
                    request.rarity,
                    &mut rng,
                )
            }),
            flavor_text: partial.flavor_text.unwrap_or_else(|| {
                fallback::generate_flavor_text(
                    request.element,
                    request.weapon_type,
                    request.role,
                    &mut rng,
                )
            }),
            skills: {
                let generated = fallback::generate_skills(request.element, request.weapon_type);
                SkillSet {
                    normal_attack: partial_skills
                        .normal_attack
                        .unwrap_or(generated.normal_attack),
                    skill: partial_skills.skill.unwrap_or(generated.skill),
                    burst: partial_skills.burst.unwrap_or(generated.burst),
                }
            },
        }
    }
}
