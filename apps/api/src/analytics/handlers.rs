use axum::{extract::State, Json};

use crate::analytics::report::{compute_analytics, AnalyticsReport};
use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/v1/admin/analytics
pub async fn handle_analytics(
    State(state): State<AppState>,
) -> Result<Json<AnalyticsReport>, AppError> {
    let profiles = state.profiles.list().await?;
    let engagement = state.engagement.snapshot().await?;
    let postings = state.catalog.list_active().await?;

    Ok(Json(compute_analytics(&profiles, &engagement, &postings)))
}
