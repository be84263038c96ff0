pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::analytics::handlers as analytics;
use crate::catalog::handlers as internships;
use crate::engagement::handlers as engagement;
use crate::profile::handlers as profiles;
use crate::recommendation::handlers as recommendations;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog
        .route("/api/v1/internships", get(internships::handle_list_internships))
        .route("/api/v1/internships/:id", get(internships::handle_get_internship))
        .route(
            "/api/v1/internships/:id/feedback",
            post(engagement::handle_feedback),
        )
        // Profiles
        .route(
            "/api/v1/profiles/:user_id",
            put(profiles::handle_upsert_profile).get(profiles::handle_get_profile),
        )
        .route(
            "/api/v1/profiles/:user_id/recommendations",
            get(recommendations::handle_profile_recommendations),
        )
        .route(
            "/api/v1/profiles/:user_id/saved",
            get(engagement::handle_list_saved),
        )
        .route(
            "/api/v1/profiles/:user_id/saved/:internship_id",
            put(engagement::handle_save).delete(engagement::handle_unsave),
        )
        // Recommendations
        .route(
            "/api/v1/recommendations",
            post(recommendations::handle_preview_recommendations),
        )
        // Admin
        .route("/api/v1/admin/analytics", get(analytics::handle_analytics))
        .with_state(state)
}
