#![allow(dead_code)]

use serde::{Deserialize, Serialize};

use crate::models::profile::EducationLevel;

/// Weights of the four criteria. The defaults sum to exactly 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: f64,
    pub education: f64,
    pub sector: f64,
    pub location: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.4,
            education: 0.2,
            sector: 0.2,
            location: 0.2,
        }
    }
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.skills + self.education + self.sector + self.location
    }
}

pub const EDUCATION_OVERQUALIFIED: f64 = 0.8;
pub const EDUCATION_FLOOR: f64 = 0.3;
pub const LOCATION_MISMATCH: f64 = 0.3;

/// Bidirectional, case-insensitive, literal substring test.
///
/// Either side containing the other counts. An empty skill is contained in
/// every string, so it matches everything.
pub fn skills_overlap(user_skill: &str, required_skill: &str) -> bool {
    let user = user_skill.to_lowercase();
    let required = required_skill.to_lowercase();
    required.contains(&user) || user.contains(&required)
}

/// User skills that match at least one required skill, in user order.
/// Duplicates in the user's list are kept.
pub fn matched_skills<'a>(user_skills: &'a [String], required_skills: &[String]) -> Vec<&'a String> {
    user_skills
        .iter()
        .filter(|skill| required_skills.iter().any(|req| skills_overlap(skill, req)))
        .collect()
}

/// Required skills no user skill matches, in posting order.
pub fn gap_skills<'a>(user_skills: &[String], required_skills: &'a [String]) -> Vec<&'a String> {
    required_skills
        .iter()
        .filter(|req| !user_skills.iter().any(|skill| skills_overlap(skill, req)))
        .collect()
}

/// |matched user skills| / |required skills|, 0 when nothing is required.
/// Capped at 1.0 since duplicate user skills each count as a match.
pub fn skills_score(user_skills: &[String], required_skills: &[String]) -> f64 {
    if required_skills.is_empty() {
        return 0.0;
    }
    let matched = matched_skills(user_skills, required_skills).len();
    (matched as f64 / required_skills.len() as f64).min(1.0)
}

/// Exact label match → 1.0, meeting or exceeding the requirement → 0.8,
/// falling short → user/required with a 0.3 floor.
pub fn education_score(user_level: &str, required_level: &str) -> f64 {
    if user_level == required_level {
        return 1.0;
    }

    let user = EducationLevel::ordinal_of(user_level);
    let required = EducationLevel::ordinal_of(required_level);

    if user >= required {
        EDUCATION_OVERQUALIFIED
    } else {
        (user as f64 / required as f64).max(EDUCATION_FLOOR)
    }
}

pub fn sector_score(user_sectors: &[String], posting_sector: &str) -> f64 {
    if user_sectors.iter().any(|s| s == posting_sector) {
        1.0
    } else {
        0.0
    }
}

pub fn location_score(preference: &str, posting_location: &str) -> f64 {
    if preference == posting_location {
        1.0
    } else {
        LOCATION_MISMATCH
    }
}

/// Weighted sum of the four sub-scores, clamped to [0, 1].
pub fn compute_match_score(
    skills: f64,
    education: f64,
    sector: f64,
    location: f64,
    weights: &ScoringWeights,
) -> f64 {
    (skills * weights.skills
        + education * weights.education
        + sector * weights.sector
        + location * weights.location)
        .clamp(0.0, 1.0)
}
