use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Up,
    Down,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub id: Uuid,
    pub user_id: String,
    pub internship_id: String,
    pub rating: Rating,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedInternship {
    pub user_id: String,
    pub internship_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    ProfileComplete,
    ViewRecommendations,
    ViewInternship,
    SaveInternship,
    Feedback,
}

/// One entry in the append-only user action log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAction {
    pub id: Uuid,
    pub user_id: String,
    pub action: ActionKind,
    pub internship_id: Option<String>,
    pub metadata: Value,
    pub created_at: DateTime<Utc>,
}

impl UserAction {
    pub fn new(user_id: &str, action: ActionKind, internship_id: Option<&str>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            action,
            internship_id: internship_id.map(str::to_string),
            metadata: Value::Object(Default::default()),
            created_at: Utc::now(),
        }
    }

    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = metadata;
        self
    }
}
