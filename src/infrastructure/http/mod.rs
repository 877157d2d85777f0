//! HTTP REST API routes

mod character_routes;
mod history_routes;
mod roll_routes;
mod seed_routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

pub use character_routes::*;
pub use history_routes::*;
pub use roll_routes::*;
pub use seed_routes::*;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Roll routes
        .route("/api/roll", post(roll_routes::roll))
        .route("/api/roll/phase", get(roll_routes::get_phase))
        // Character routes
        .route(
            "/api/characters/current",
            get(character_routes::get_current),
        )
        .route("/api/characters/{id}", get(character_routes::get_character))
        // History routes
        .route("/api/history", get(history_routes::list_history))
        // Seed routes
        .route("/api/seed/{token}", get(seed_routes::decode_seed))
}
