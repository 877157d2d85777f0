//! History API routes

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::domain::entities::Character;
use crate::infrastructure::state::AppState;

/// List rolled characters, newest first
pub async fn list_history(State(state): State<Arc<AppState>>) -> Json<Vec<Character>> {
    Json(state.history_service.history())
}
