//! Axum route handlers for the Recommendation API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use crate::errors::{AppError, AppJson};
use crate::models::engagement::{ActionKind, UserAction};
use crate::models::profile::UserProfile;
use crate::recommendation::recommender::ScoredPosting;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub user_id: Option<String>,
    pub recommendations: Vec<ScoredPosting>,
}

/// GET /api/v1/profiles/:user_id/recommendations
///
/// Ranks the catalog against the user's stored profile.
pub async fn handle_profile_recommendations(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let record = state
        .profiles
        .get(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile for user {user_id} not found")))?;

    let recommendations = rank(&state, &record.profile).await?;

    let shown: Vec<&str> = recommendations.iter().map(|r| r.posting.id.as_str()).collect();
    state
        .engagement
        .log_action(
            UserAction::new(&user_id, ActionKind::ViewRecommendations, None)
                .with_metadata(json!({ "internship_ids": shown })),
        )
        .await?;

    Ok(Json(RecommendationsResponse {
        user_id: Some(user_id),
        recommendations,
    }))
}

/// POST /api/v1/recommendations
///
/// Scores an ad-hoc profile without storing it. Missing fields score as empty.
pub async fn handle_preview_recommendations(
    State(state): State<AppState>,
    AppJson(profile): AppJson<UserProfile>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let recommendations = rank(&state, &profile).await?;
    Ok(Json(RecommendationsResponse {
        user_id: None,
        recommendations,
    }))
}

async fn rank(state: &AppState, profile: &UserProfile) -> Result<Vec<ScoredPosting>, AppError> {
    let postings = state.catalog.list_active().await?;
    let ranked = state.recommender.recommend(profile, &postings);
    debug!(
        "Ranked {} postings, returning {} (top score {:?})",
        postings.len(),
        ranked.len(),
        ranked.first().map(|r| r.match_score)
    );
    Ok(ranked)
}
