use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use crate::models::profile::{ProfileRecord, UserProfile};

/// Profile persistence, keyed by an opaque user id.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Inserts or replaces the user's profile. Stored profiles are always complete.
    async fn upsert(
        &self,
        user_id: &str,
        profile: UserProfile,
        resume_uploaded: bool,
    ) -> Result<ProfileRecord>;
    async fn get(&self, user_id: &str) -> Result<Option<ProfileRecord>>;
    /// All stored profiles, in first-insert order.
    async fn list(&self) -> Result<Vec<ProfileRecord>>;
}

#[derive(Default)]
struct ProfileTable {
    order: Vec<String>,
    records: HashMap<String, ProfileRecord>,
}

/// In-memory store for development and tests.
#[derive(Clone, Default)]
pub struct InMemoryProfileStore {
    inner: Arc<RwLock<ProfileTable>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn upsert(
        &self,
        user_id: &str,
        profile: UserProfile,
        resume_uploaded: bool,
    ) -> Result<ProfileRecord> {
        let record = ProfileRecord {
            user_id: user_id.to_string(),
            profile,
            resume_uploaded,
            profile_completed: true,
            updated_at: Utc::now(),
        };

        let mut table = self.inner.write().await;
        if table
            .records
            .insert(user_id.to_string(), record.clone())
            .is_none()
        {
            table.order.push(user_id.to_string());
            info!("Created profile for user {user_id}");
        } else {
            info!("Replaced profile for user {user_id}");
        }

        Ok(record)
    }

    async fn get(&self, user_id: &str) -> Result<Option<ProfileRecord>> {
        Ok(self.inner.read().await.records.get(user_id).cloned())
    }

    async fn list(&self) -> Result<Vec<ProfileRecord>> {
        let table = self.inner.read().await;
        Ok(table
            .order
            .iter()
            .filter_map(|id| table.records.get(id).cloned())
            .collect())
    }
}
