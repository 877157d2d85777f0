//! Seed token API routes

use axum::{extract::Path, http::StatusCode, Json};

use crate::domain::services::seed_codec::{self, ParsedSeed};

/// Decode a seed token back into attributes
pub async fn decode_seed(
    Path(token): Path<String>,
) -> Result<Json<ParsedSeed>, (StatusCode, String)> {
    seed_codec::decode(&token)
        .map(Json)
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Unrecognized seed token".to_string()))
}
