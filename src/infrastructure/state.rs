//! Shared application state

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use crate::application::services::{HistoryService, NarrativeService, RollService};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::llm::NarrativeClient;
use crate::infrastructure::persistence::FileStore;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub roll_service: RollService,
    pub history_service: Arc<HistoryService>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let store = Arc::new(FileStore::new(&config.data_dir)?);
        let history_service = Arc::new(HistoryService::load(store));

        let narrative_client = NarrativeClient::new(
            config.narrative_base_url.as_deref(),
            &config.narrative_model,
            Duration::from_secs(config.narrative_timeout_secs),
        )?;
        let narrative_service = NarrativeService::new(Arc::new(narrative_client));

        let roll_service = RollService::new(
            narrative_service,
            history_service.clone(),
            Duration::from_millis(config.roll_pacing_ms),
        );

        Ok(Self {
            config,
            roll_service,
            history_service,
        })
    }
}
