use std::sync::Arc;

use crate::catalog::InternshipCatalog;
use crate::config::Config;
use crate::engagement::store::{EngagementStore, InMemoryEngagementStore};
use crate::profile::store::{InMemoryProfileStore, ProfileStore};
use crate::recommendation::recommender::{Recommender, WeightedRecommender};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Kept for handlers that need runtime settings; none read it yet.
    #[allow(dead_code)]
    pub config: Config,
    /// Source of postings. Default: StaticCatalog. Swap via CATALOG_PATH.
    pub catalog: Arc<dyn InternshipCatalog>,
    pub profiles: Arc<dyn ProfileStore>,
    pub engagement: Arc<dyn EngagementStore>,
    pub recommender: Arc<dyn Recommender>,
}

impl AppState {
    /// In-memory stores around the given catalog.
    pub fn in_memory(config: Config, catalog: Arc<dyn InternshipCatalog>) -> Self {
        Self {
            config,
            catalog,
            profiles: Arc::new(InMemoryProfileStore::new()),
            engagement: Arc::new(InMemoryEngagementStore::new()),
            recommender: Arc::new(WeightedRecommender::default()),
        }
    }
}

#[cfg(test)]
pub fn test_state() -> AppState {
    let config = Config {
        port: 0,
        rust_log: "debug".to_string(),
        catalog_path: None,
    };
    AppState::in_memory(config, Arc::new(crate::catalog::StaticCatalog::new()))
}
