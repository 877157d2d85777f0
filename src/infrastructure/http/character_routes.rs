//! Character API routes

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::Character;
use crate::domain::value_objects::CharacterId;
use crate::infrastructure::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CharacterQuery {
    /// Seed token from a shared deep link, used when the id is unknown here
    #[serde(default)]
    pub seed: Option<String>,
}

/// Get the current character
pub async fn get_current(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Character>, (StatusCode, String)> {
    state
        .history_service
        .current()
        .map(Json)
        .ok_or_else(|| (StatusCode::NOT_FOUND, "No current character".to_string()))
}

/// Get a character by ID, rehydrating from a seed token when the id is not
/// known locally
pub async fn get_character(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<CharacterQuery>,
) -> Result<Json<Character>, (StatusCode, String)> {
    let uuid = Uuid::parse_str(&id)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid character ID".to_string()))?;

    if let Some(character) = state.history_service.find(CharacterId::from_uuid(uuid)) {
        return Ok(Json(character));
    }

    if let Some(token) = query.seed {
        if let Some(character) = state.roll_service.rehydrate_from_seed(&token).await {
            return Ok(Json(character));
        }
    }

    Err((StatusCode::NOT_FOUND, "Character not found".to_string()))
}
