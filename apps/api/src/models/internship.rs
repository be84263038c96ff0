use serde::{Deserialize, Serialize};

/// A single internship posting as exposed by a catalog source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternshipPosting {
    pub id: String,
    pub title: String,
    pub organization: String,
    pub sector: String,
    pub location: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub education_requirement: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}
