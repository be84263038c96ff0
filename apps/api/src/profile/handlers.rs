use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::{AppError, AppJson};
use crate::models::engagement::{ActionKind, UserAction};
use crate::models::profile::ProfileRecord;
use crate::profile::validation::{validate_profile, ProfileInput};
use crate::state::AppState;

/// PUT /api/v1/profiles/:user_id
pub async fn handle_upsert_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    AppJson(input): AppJson<ProfileInput>,
) -> Result<Json<ProfileRecord>, AppError> {
    let resume_uploaded = input.resume_uploaded;
    let profile = validate_profile(input).map_err(AppError::validation_list)?;

    let record = state
        .profiles
        .upsert(&user_id, profile, resume_uploaded)
        .await?;

    state
        .engagement
        .log_action(UserAction::new(&user_id, ActionKind::ProfileComplete, None))
        .await?;

    Ok(Json(record))
}

/// GET /api/v1/profiles/:user_id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ProfileRecord>, AppError> {
    let record = state
        .profiles
        .get(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile for user {user_id} not found")))?;
    Ok(Json(record))
}
