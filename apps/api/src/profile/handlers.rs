use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::catalog::signs::{self, SignId, ZodiacSign};
use crate::errors::AppError;
use crate::models::profile::{PersistedProfile, UserProfile};
use crate::profile::compatibility::{self, CompatibilityResult};
use crate::profile::engine;
use crate::state::AppState;
use crate::storage::get_or_create_session_id;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub raw_text: String,
    /// Omitted on the first request of a browsing session; the minted id is
    /// returned on the profile and must be echoed back on later requests.
    pub session_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct SignRequest {
    pub sign_id: SignId,
    pub session_id: Uuid,
}

/// POST /api/v1/profile/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<UserProfile>, AppError> {
    if req.raw_text.trim().is_empty() {
        return Err(AppError::Validation("raw_text must not be empty".to_string()));
    }
    let session_id = get_or_create_session_id(req.session_id, state.ids.as_ref());
    let profile =
        engine::analyze_from_text(&state.store, state.rng.as_ref(), &req.raw_text, session_id)
            .await?;
    Ok(Json(profile))
}

/// POST /api/v1/profile/sign
pub async fn handle_analyze_sign(
    State(state): State<AppState>,
    Json(req): Json<SignRequest>,
) -> Result<Json<UserProfile>, AppError> {
    let profile =
        engine::analyze_from_sign(&state.store, state.rng.as_ref(), req.sign_id, req.session_id)
            .await?;
    Ok(Json(profile))
}

/// GET /api/v1/profile/:session_id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<PersistedProfile>, AppError> {
    state
        .store
        .load(session_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No profile for session {session_id}")))
}

/// DELETE /api/v1/profile/:session_id
pub async fn handle_clear_profile(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    engine::clear_profile(&state.store, session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/signs
pub async fn handle_list_signs() -> Json<&'static [ZodiacSign; 12]> {
    Json(signs::all())
}

/// GET /api/v1/signs/:id
pub async fn handle_get_sign(Path(id): Path<SignId>) -> Json<&'static ZodiacSign> {
    Json(signs::get(id))
}

/// GET /api/v1/signs/:a/compatibility/:b
pub async fn handle_compatibility(
    Path((a, b)): Path<(SignId, SignId)>,
) -> Json<CompatibilityResult> {
    Json(compatibility::score_pair(a, b))
}
