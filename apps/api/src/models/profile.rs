use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The four fields the recommender reads. Every field falls back to an empty
/// value so a partially-formed profile still scores; required-field checks
/// live at the HTTP boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub education_level: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub sectors: Vec<String>,
    #[serde(default)]
    pub location_preference: String,
}

/// A stored profile, keyed by an opaque user id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub user_id: String,
    pub profile: UserProfile,
    pub resume_uploaded: bool,
    pub profile_completed: bool,
    pub updated_at: DateTime<Utc>,
}

/// Education levels known to the ordinal scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationLevel {
    Other,
    Diploma,
    Undergraduate,
    Postgraduate,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 4] = [
        EducationLevel::Other,
        EducationLevel::Diploma,
        EducationLevel::Undergraduate,
        EducationLevel::Postgraduate,
    ];

    /// The label used by profiles and postings.
    pub fn label(&self) -> &'static str {
        match self {
            EducationLevel::Other => "Other",
            EducationLevel::Diploma => "Diploma",
            EducationLevel::Undergraduate => "UG (Undergraduate)",
            EducationLevel::Postgraduate => "PG (Postgraduate)",
        }
    }

    /// Exact label lookup. No trimming or case folding.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.label() == label)
    }

    pub fn ordinal(&self) -> u8 {
        match self {
            EducationLevel::Other => 1,
            EducationLevel::Diploma => 2,
            EducationLevel::Undergraduate => 3,
            EducationLevel::Postgraduate => 4,
        }
    }

    /// Ordinal for an arbitrary label; unknown labels rank with `Other`.
    pub fn ordinal_of(label: &str) -> u8 {
        Self::from_label(label)
            .map(|level| level.ordinal())
            .unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_to_levels() {
        for level in EducationLevel::ALL {
            assert_eq!(EducationLevel::from_label(level.label()), Some(level));
        }
    }

    #[test]
    fn test_unknown_label_ranks_as_other() {
        assert_eq!(EducationLevel::ordinal_of("PhD"), 1);
        assert_eq!(EducationLevel::ordinal_of(""), 1);
        assert_eq!(EducationLevel::ordinal_of("ug (undergraduate)"), 1);
    }

    #[test]
    fn test_ordinals_are_increasing() {
        let ordinals: Vec<u8> = EducationLevel::ALL.iter().map(|l| l.ordinal()).collect();
        assert_eq!(ordinals, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_missing_profile_fields_default_to_empty() {
        let profile: UserProfile = serde_json::from_str(r#"{"skills": ["Rust"]}"#).unwrap();
        assert_eq!(profile.education_level, "");
        assert_eq!(profile.location_preference, "");
        assert!(profile.sectors.is_empty());
        assert_eq!(profile.skills, vec!["Rust".to_string()]);
    }
}
