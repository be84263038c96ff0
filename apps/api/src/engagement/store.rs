use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::engagement::{Feedback, Rating, SavedInternship, UserAction};

/// Read-only copy of everything the engagement store holds.
#[derive(Debug, Clone, Default)]
pub struct EngagementSnapshot {
    pub feedback: Vec<Feedback>,
    pub saved: Vec<SavedInternship>,
    pub actions: Vec<UserAction>,
}

/// Feedback, bookmarks and the user action log.
#[async_trait]
pub trait EngagementStore: Send + Sync {
    /// One rating per (user, internship); a new rating replaces the old one.
    async fn record_feedback(
        &self,
        user_id: &str,
        internship_id: &str,
        rating: Rating,
    ) -> Result<Feedback>;
    /// Idempotent. Returns false when the posting was already saved.
    async fn save_internship(&self, user_id: &str, internship_id: &str) -> Result<bool>;
    /// Returns false when nothing was saved for the pair.
    async fn unsave_internship(&self, user_id: &str, internship_id: &str) -> Result<bool>;
    /// Saved internship ids in save order.
    async fn saved_internships(&self, user_id: &str) -> Result<Vec<String>>;
    async fn log_action(&self, action: UserAction) -> Result<()>;
    async fn snapshot(&self) -> Result<EngagementSnapshot>;
}

/// In-memory store for development and tests.
#[derive(Clone, Default)]
pub struct InMemoryEngagementStore {
    inner: Arc<RwLock<EngagementSnapshot>>,
}

impl InMemoryEngagementStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EngagementStore for InMemoryEngagementStore {
    async fn record_feedback(
        &self,
        user_id: &str,
        internship_id: &str,
        rating: Rating,
    ) -> Result<Feedback> {
        let feedback = Feedback {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            internship_id: internship_id.to_string(),
            rating,
            created_at: Utc::now(),
        };

        let mut data = self.inner.write().await;
        data.feedback
            .retain(|f| !(f.user_id == user_id && f.internship_id == internship_id));
        data.feedback.push(feedback.clone());
        Ok(feedback)
    }

    async fn save_internship(&self, user_id: &str, internship_id: &str) -> Result<bool> {
        let mut data = self.inner.write().await;
        let exists = data
            .saved
            .iter()
            .any(|s| s.user_id == user_id && s.internship_id == internship_id);
        if exists {
            return Ok(false);
        }
        data.saved.push(SavedInternship {
            user_id: user_id.to_string(),
            internship_id: internship_id.to_string(),
            created_at: Utc::now(),
        });
        Ok(true)
    }

    async fn unsave_internship(&self, user_id: &str, internship_id: &str) -> Result<bool> {
        let mut data = self.inner.write().await;
        let before = data.saved.len();
        data.saved
            .retain(|s| !(s.user_id == user_id && s.internship_id == internship_id));
        Ok(data.saved.len() != before)
    }

    async fn saved_internships(&self, user_id: &str) -> Result<Vec<String>> {
        Ok(self
            .inner
            .read()
            .await
            .saved
            .iter()
            .filter(|s| s.user_id == user_id)
            .map(|s| s.internship_id.clone())
            .collect())
    }

    async fn log_action(&self, action: UserAction) -> Result<()> {
        self.inner.write().await.actions.push(action);
        Ok(())
    }

    async fn snapshot(&self) -> Result<EngagementSnapshot> {
        Ok(self.inner.read().await.clone())
    }
}
