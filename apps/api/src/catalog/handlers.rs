use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::engagement::{ActionKind, UserAction};
use crate::models::internship::InternshipPosting;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ViewerQuery {
    pub user_id: Option<String>,
}

/// GET /api/v1/internships
pub async fn handle_list_internships(
    State(state): State<AppState>,
) -> Result<Json<Vec<InternshipPosting>>, AppError> {
    Ok(Json(state.catalog.list_active().await?))
}

/// GET /api/v1/internships/:id
///
/// Counts as a view for analytics when the caller identifies the user.
pub async fn handle_get_internship(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(viewer): Query<ViewerQuery>,
) -> Result<Json<InternshipPosting>, AppError> {
    let posting = state
        .catalog
        .find(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Internship {id} not found")))?;

    if let Some(user_id) = viewer.user_id.as_deref() {
        state
            .engagement
            .log_action(UserAction::new(user_id, ActionKind::ViewInternship, Some(id.as_str())))
            .await?;
    }

    Ok(Json(posting))
}
