use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppJson};
use crate::models::engagement::{ActionKind, Feedback, Rating, UserAction};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub user_id: String,
    pub rating: Rating,
}

#[derive(Debug, Serialize)]
pub struct SavedListResponse {
    pub user_id: String,
    pub internship_ids: Vec<String>,
}

/// POST /api/v1/internships/:id/feedback
pub async fn handle_feedback(
    State(state): State<AppState>,
    Path(internship_id): Path<String>,
    AppJson(req): AppJson<FeedbackRequest>,
) -> Result<Json<Feedback>, AppError> {
    if req.user_id.trim().is_empty() {
        return Err(AppError::Validation("user_id cannot be empty".to_string()));
    }
    ensure_posting_exists(&state, &internship_id).await?;

    let feedback = state
        .engagement
        .record_feedback(&req.user_id, &internship_id, req.rating)
        .await?;

    state
        .engagement
        .log_action(UserAction::new(
            &req.user_id,
            ActionKind::Feedback,
            Some(internship_id.as_str()),
        ))
        .await?;

    Ok(Json(feedback))
}

/// PUT /api/v1/profiles/:user_id/saved/:internship_id
pub async fn handle_save(
    State(state): State<AppState>,
    Path((user_id, internship_id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    ensure_posting_exists(&state, &internship_id).await?;

    let created = state
        .engagement
        .save_internship(&user_id, &internship_id)
        .await?;

    if created {
        state
            .engagement
            .log_action(UserAction::new(
                &user_id,
                ActionKind::SaveInternship,
                Some(internship_id.as_str()),
            ))
            .await?;
        Ok(StatusCode::CREATED)
    } else {
        Ok(StatusCode::OK)
    }
}

/// DELETE /api/v1/profiles/:user_id/saved/:internship_id
pub async fn handle_unsave(
    State(state): State<AppState>,
    Path((user_id, internship_id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let removed = state
        .engagement
        .unsave_internship(&user_id, &internship_id)
        .await?;

    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!(
            "Internship {internship_id} is not saved for user {user_id}"
        )))
    }
}

/// GET /api/v1/profiles/:user_id/saved
pub async fn handle_list_saved(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<SavedListResponse>, AppError> {
    let internship_ids = state.engagement.saved_internships(&user_id).await?;
    Ok(Json(SavedListResponse {
        user_id,
        internship_ids,
    }))
}

async fn ensure_posting_exists(state: &AppState, internship_id: &str) -> Result<(), AppError> {
    state
        .catalog
        .find(internship_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| AppError::NotFound(format!("Internship {internship_id} not found")))
}
