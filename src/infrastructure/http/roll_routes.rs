//! Roll API routes

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::services::{RollError, RollPhase};
use crate::domain::entities::Character;
use crate::infrastructure::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RollRequestDto {
    /// Display name for the character; blank defaults to "Unnamed Hero"
    #[serde(default)]
    pub name: Option<String>,
    /// Optional numeric seed for reproducible stat jitter
    #[serde(default)]
    pub seed: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct PhaseResponseDto {
    pub phase: RollPhase,
}

/// Run a full roll
pub async fn roll(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RollRequestDto>,
) -> Result<Json<Character>, (StatusCode, String)> {
    let name = req.name.unwrap_or_default();

    let character = state
        .roll_service
        .roll(&name, req.seed)
        .await
        .map_err(|e| match e {
            RollError::RollInProgress => (StatusCode::CONFLICT, e.to_string()),
        })?;

    Ok(Json(character))
}

/// Current roll phase pointer
pub async fn get_phase(State(state): State<Arc<AppState>>) -> Json<PhaseResponseDto> {
    Json(PhaseResponseDto {
        phase: state.roll_service.phase(),
    })
}
