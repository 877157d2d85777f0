//! History Service - bounded, newest-first ledger of completed characters
//!
//! Backed by two key-value slots (current character and history list), both
//! JSON. Corrupt or missing persisted data degrades to empty state; the
//! ledger itself is the source of truth while the process runs.

use std::sync::{Arc, Mutex};

use crate::application::ports::outbound::KeyValueStorePort;
use crate::domain::entities::Character;
use crate::domain::value_objects::CharacterId;

/// Maximum number of characters retained in history.
pub const HISTORY_LIMIT: usize = 10;

const HISTORY_KEY: &str = "history";
const CURRENT_KEY: &str = "current_character";

struct LedgerState {
    history: Vec<Character>,
    current: Option<Character>,
}

/// Insertion-ordered character ledger, newest first, capped at
/// [`HISTORY_LIMIT`] entries.
pub struct HistoryService {
    store: Arc<dyn KeyValueStorePort>,
    state: Mutex<LedgerState>,
}

impl HistoryService {
    /// Load persisted state from the store, tolerating corrupt slots.
    pub fn load(store: Arc<dyn KeyValueStorePort>) -> Self {
        let history = match store.get(HISTORY_KEY) {
            Some(raw) => match serde_json::from_str::<Vec<Character>>(&raw) {
                Ok(mut history) => {
                    history.truncate(HISTORY_LIMIT);
                    history
                }
                Err(e) => {
                    tracing::warn!("ignoring corrupt history slot: {e}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        let current = match store.get(CURRENT_KEY) {
            Some(raw) => match serde_json::from_str::<Character>(&raw) {
                Ok(character) => Some(character),
                Err(e) => {
                    tracing::warn!("ignoring corrupt current-character slot: {e}");
                    None
                }
            },
            None => None,
        };

        Self {
            store,
            state: Mutex::new(LedgerState { history, current }),
        }
    }

    /// Record a completed roll: becomes the current character and the newest
    /// history entry, evicting the oldest entry past the cap.
    pub fn record(&self, character: Character) {
        let mut state = self.lock();
        state.history.insert(0, character.clone());
        state.history.truncate(HISTORY_LIMIT);
        state.current = Some(character);
        self.persist(&state);
    }

    /// Replace the current character without touching history. Used for
    /// deep-link rehydration.
    pub fn set_current(&self, character: Character) {
        let mut state = self.lock();
        state.current = Some(character);
        self.persist(&state);
    }

    pub fn history(&self) -> Vec<Character> {
        self.lock().history.clone()
    }

    pub fn current(&self) -> Option<Character> {
        self.lock().current.clone()
    }

    pub fn find(&self, id: CharacterId) -> Option<Character> {
        let state = self.lock();
        state
            .history
            .iter()
            .find(|c| c.id == id)
            .or(state.current.as_ref().filter(|c| c.id == id))
            .cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LedgerState> {
        // Lock poisoning would mean a panic while holding the guard; the
        // ledger data itself is still coherent, so keep going.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn persist(&self, state: &LedgerState) {
        match serde_json::to_string(&state.history) {
            Ok(json) => self.store.set(HISTORY_KEY, &json),
            Err(e) => tracing::warn!("failed to serialize history: {e}"),
        }
        if let Some(current) = &state.current {
            match serde_json::to_string(current) {
                Ok(json) => self.store.set(CURRENT_KEY, &json),
                Err(e) => tracing::warn!("failed to serialize current character: {e}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{NarrativeContent, Skill, SkillSet};
    use crate::domain::services::roller::RolledAttributes;
    use crate::domain::value_objects::{
        Element, RarityGrade, Role, StatBlock, StatRank, StatRankBlock, WeaponType,
    };
    use crate::infrastructure::persistence::InMemoryStore;

    fn character(name: &str) -> Character {
        let rolled = RolledAttributes {
            element: Element::Water,
            weapon_type: WeaponType::Bow,
            role: Role::Support,
            rarity: RarityGrade::C,
            stats: StatBlock {
                hp: 121,
                atk: 44,
                def: 77,
                speed: 71,
                em: 82,
            },
            stat_ranks: StatRankBlock {
                hp: StatRank::Good,
                atk: StatRank::Good,
                def: StatRank::Good,
                speed: StatRank::Good,
                em: StatRank::Good,
            },
        };
        let skill = Skill {
            name: "Test".to_string(),
            description: "Test".to_string(),
        };
        Character::assemble(
            rolled,
            name,
            NarrativeContent {
                title: "Title".to_string(),
                class_name: "Class".to_string(),
                flavor_text: "Flavor".to_string(),
                skills: SkillSet {
                    normal_attack: skill.clone(),
                    skill: skill.clone(),
                    burst: skill,
                },
            },
            "C-WAT-BOW-SUP-1700000000000".to_string(),
        )
    }

    #[test]
    fn history_caps_at_ten_entries_newest_first() {
        let service = HistoryService::load(Arc::new(InMemoryStore::new()));
        for i in 0..11 {
            service.record(character(&format!("hero-{i}")));
        }
        let history = service.history();
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history[0].name, "hero-10");
        assert_eq!(history[9].name, "hero-1");
        assert!(history.iter().all(|c| c.name != "hero-0"), "oldest evicted");
    }

    #[test]
    fn find_locates_characters_by_id() {
        let service = HistoryService::load(Arc::new(InMemoryStore::new()));
        let recorded = character("findable");
        let id = recorded.id;
        service.record(recorded);
        assert_eq!(service.find(id).map(|c| c.name), Some("findable".to_string()));
        assert!(service.find(CharacterId::new()).is_none());
    }

    #[test]
    fn set_current_does_not_touch_history() {
        let service = HistoryService::load(Arc::new(InMemoryStore::new()));
        let rehydrated = character("rehydrated");
        let id = rehydrated.id;
        service.set_current(rehydrated);
        assert!(service.history().is_empty());
        assert_eq!(service.current().map(|c| c.id), Some(id));
        // current character is still findable by id
        assert!(service.find(id).is_some());
    }

    #[test]
    fn state_survives_a_reload_through_the_store() {
        let store: Arc<dyn KeyValueStorePort> = Arc::new(InMemoryStore::new());
        {
            let service = HistoryService::load(store.clone());
            service.record(character("persisted"));
        }
        let reloaded = HistoryService::load(store);
        assert_eq!(reloaded.history().len(), 1);
        assert_eq!(reloaded.current().map(|c| c.name), Some("persisted".to_string()));
    }

    #[test]
    fn corrupt_slots_degrade_to_empty_state() {
        let store = Arc::new(InMemoryStore::new());
        store.set(HISTORY_KEY, "{not json");
        store.set(CURRENT_KEY, "[05");
        let service = HistoryService::load(store);
        assert!(service.history().is_empty());
        assert!(service.current().is_none());
    }
}
