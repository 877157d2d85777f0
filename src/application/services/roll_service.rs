//! Roll Service - orchestrates the multi-phase roll flow
//!
//! A roll walks a strictly sequential phase machine (element -> weaponType ->
//! role -> rarity -> stats -> generating -> complete) with a configurable
//! pacing delay between phases. The pacing exists purely so the frontend can
//! animate each reel locking in; correctness only depends on the order. A
//! single atomic in-progress flag is the authoritative guard against
//! overlapping rolls.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;

use crate::application::ports::outbound::NarrativeRequest;
use crate::application::services::history_service::HistoryService;
use crate::application::services::narrative_service::NarrativeService;
use crate::domain::entities::Character;
use crate::domain::services::rng::EntropyRandom;
use crate::domain::services::roller::{roll_attributes, RolledAttributes};
use crate::domain::services::{seed_codec, stat_engine};

/// Observable pointer into the roll state machine. Advances monotonically
/// within a single roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RollPhase {
    Idle,
    Element,
    WeaponType,
    Role,
    Rarity,
    Stats,
    Generating,
    Complete,
}

#[derive(Debug, thiserror::Error)]
pub enum RollError {
    #[error("a roll is already in progress")]
    RollInProgress,
}

/// Releases the in-progress flag when dropped, so cancelled and panicked
/// rolls cannot wedge the guard.
struct InProgressGuard<'a>(&'a AtomicBool);

impl Drop for InProgressGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Service running the roll flow end to end.
pub struct RollService {
    narrative: NarrativeService,
    history: Arc<HistoryService>,
    phase_tx: watch::Sender<RollPhase>,
    in_progress: AtomicBool,
    pacing: Duration,
}

impl RollService {
    pub fn new(
        narrative: NarrativeService,
        history: Arc<HistoryService>,
        pacing: Duration,
    ) -> Self {
        let (phase_tx, _) = watch::channel(RollPhase::Idle);
        Self {
            narrative,
            history,
            phase_tx,
            in_progress: AtomicBool::new(false),
            pacing,
        }
    }

    /// Current phase pointer.
    pub fn phase(&self) -> RollPhase {
        *self.phase_tx.borrow()
    }

    /// Subscribe to phase transitions.
    pub fn subscribe(&self) -> watch::Receiver<RollPhase> {
        self.phase_tx.subscribe()
    }

    /// Run a full roll. Rejects the request if another roll is in progress.
    ///
    /// `stat_seed` makes the stat jitter reproducible; the categorical draws
    /// remain entropy-driven either way.
    pub async fn roll(
        &self,
        name: &str,
        stat_seed: Option<u32>,
    ) -> Result<Character, RollError> {
        if self
            .in_progress
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(RollError::RollInProgress);
        }
        // The server drops this future when the client disconnects; the
        // guard's Drop releases the flag on that path too
        let _guard = InProgressGuard(&self.in_progress);

        let character = self.run_roll(name, stat_seed).await;
        Ok(character)
    }

    async fn run_roll(&self, name: &str, stat_seed: Option<u32>) -> Character {
        // Presentation pacing: each reel locks in only after the previous one
        for phase in [
            RollPhase::Element,
            RollPhase::WeaponType,
            RollPhase::Role,
            RollPhase::Rarity,
            RollPhase::Stats,
        ] {
            self.phase_tx.send_replace(phase);
            tokio::time::sleep(self.pacing).await;
        }

        // ThreadRng is not Send; keep it out of scope across the await below
        let rolled = {
            let mut rng = EntropyRandom::new();
            roll_attributes(&mut rng, stat_seed)
        };
        tracing::debug!(
            "rolled {} {} {} {}",
            rolled.rarity,
            rolled.element,
            rolled.weapon_type,
            rolled.role
        );

        self.phase_tx.send_replace(RollPhase::Generating);
        let character = self.assemble(rolled, name, None).await;
        self.history.record(character.clone());

        self.phase_tx.send_replace(RollPhase::Complete);
        tracing::info!("roll complete: {} ({})", character.name, character.seed);
        character
    }

    /// Regenerate a character from a shared seed token.
    ///
    /// The token's embedded timestamp doubles as the stat seed, so a shared
    /// link reproduces the same stats everywhere. The result becomes the
    /// current character but is not inserted into history.
    pub async fn rehydrate_from_seed(&self, token: &str) -> Option<Character> {
        let parsed = seed_codec::decode(token)?;

        let stats =
            stat_engine::calculate_stats_seeded(parsed.role, parsed.rarity, parsed.timestamp as u32);
        let stat_ranks = stat_engine::calculate_stat_ranks(&stats, parsed.role, parsed.rarity);
        let rolled = RolledAttributes {
            element: parsed.element,
            weapon_type: parsed.weapon_type,
            role: parsed.role,
            rarity: parsed.rarity,
            stats,
            stat_ranks,
        };

        let character = self.assemble(rolled, "", Some(token.to_string())).await;
        self.history.set_current(character.clone());
        tracing::info!("rehydrated character from seed {token}");
        Some(character)
    }

    /// Pure assembly: narrative content merged onto rolled attributes. The
    /// character exists fully formed before any ledger mutation.
    async fn assemble(
        &self,
        rolled: RolledAttributes,
        name: &str,
        seed_token: Option<String>,
    ) -> Character {
        let request = NarrativeRequest {
            element: rolled.element,
            weapon_type: rolled.weapon_type,
            role: rolled.role,
            rarity: rolled.rarity,
            stat_ranks: rolled.stat_ranks,
        };
        let narrative = self.narrative.generate(&request).await;

        let seed = seed_token.unwrap_or_else(|| {
            seed_codec::encode(
                rolled.rarity,
                rolled.element,
                rolled.weapon_type,
                rolled.role,
                chrono::Utc::now().timestamp_millis(),
            )
        });

        Character::assemble(rolled, name, narrative, seed)
    }
}
