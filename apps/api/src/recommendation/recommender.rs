#![allow(dead_code)]

//! Recommender: pluggable, trait-based ranking of catalog postings for a profile.
//!
//! Default: `WeightedRecommender` (pure, deterministic, no I/O).
//!
//! `AppState` holds an `Arc<dyn Recommender>`, chosen at startup.

use serde::{Deserialize, Serialize};

use crate::models::internship::InternshipPosting;
use crate::models::profile::UserProfile;
use crate::recommendation::scoring::{
    compute_match_score, education_score, gap_skills, location_score, matched_skills,
    sector_score, skills_score, ScoringWeights,
};

/// Maximum number of postings returned per request.
pub const DEFAULT_LIMIT: usize = 5;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// The four sub-scores behind a match score, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills: f64,
    pub education: f64,
    pub sector: f64,
    pub location: f64,
}

/// A posting annotated for one profile. Built per request, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPosting {
    #[serde(flatten)]
    pub posting: InternshipPosting,
    pub match_score: f64,
    pub skills_matched: Vec<String>,
    pub skills_gap: Vec<String>,
    pub breakdown: ScoreBreakdown,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Ranks postings for a profile. Implementations must be pure: same input,
/// same output, no shared mutable state.
pub trait Recommender: Send + Sync {
    fn recommend(&self, profile: &UserProfile, postings: &[InternshipPosting]) -> Vec<ScoredPosting>;
}

// ────────────────────────────────────────────────────────────────────────────
// WeightedRecommender (default) implementation
// ────────────────────────────────────────────────────────────────────────────

/// Multi-criteria weighted-sum ranker.
///
/// Algorithm:
/// 1. Score every posting on skills, education, sector and location.
/// 2. match_score = Σ(weight × sub-score), clamped to [0, 1]
/// 3. Stable sort by match_score descending (ties keep catalog order).
/// 4. Keep the first `limit` entries. Zero scores are not filtered out.
#[derive(Debug, Clone)]
pub struct WeightedRecommender {
    pub weights: ScoringWeights,
    pub limit: usize,
}

impl Default for WeightedRecommender {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Recommender for WeightedRecommender {
    fn recommend(&self, profile: &UserProfile, postings: &[InternshipPosting]) -> Vec<ScoredPosting> {
        let mut scored: Vec<ScoredPosting> = postings
            .iter()
            .map(|posting| score_posting(profile, posting, &self.weights))
            .collect();

        // `sort_by` is stable, so equal scores stay in catalog order.
        scored.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
        scored.truncate(self.limit);
        scored
    }
}

/// Ranks `postings` for `profile` with the default weights and limit.
pub fn recommend(profile: &UserProfile, postings: &[InternshipPosting]) -> Vec<ScoredPosting> {
    WeightedRecommender::default().recommend(profile, postings)
}

/// Scores a single posting without ranking.
pub fn score_posting(
    profile: &UserProfile,
    posting: &InternshipPosting,
    weights: &ScoringWeights,
) -> ScoredPosting {
    let breakdown = ScoreBreakdown {
        skills: skills_score(&profile.skills, &posting.required_skills),
        education: education_score(&profile.education_level, &posting.education_requirement),
        sector: sector_score(&profile.sectors, &posting.sector),
        location: location_score(&profile.location_preference, &posting.location),
    };

    let match_score = compute_match_score(
        breakdown.skills,
        breakdown.education,
        breakdown.sector,
        breakdown.location,
        weights,
    );

    let skills_matched = matched_skills(&profile.skills, &posting.required_skills)
        .into_iter()
        .cloned()
        .collect();
    let skills_gap = gap_skills(&profile.skills, &posting.required_skills)
        .into_iter()
        .cloned()
        .collect();

    ScoredPosting {
        posting: posting.clone(),
        match_score,
        skills_matched,
        skills_gap,
        breakdown,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin::builtin_postings;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn web_developer() -> UserProfile {
        UserProfile {
            education_level: "UG (Undergraduate)".to_string(),
            skills: strings(&["JavaScript", "React", "Node.js", "HTML", "CSS"]),
            sectors: strings(&["Technology & IT"]),
            location_preference: "Karnataka".to_string(),
        }
    }

    fn posting(id: &str, sector: &str, location: &str, skills: &[&str]) -> InternshipPosting {
        InternshipPosting {
            id: id.to_string(),
            title: format!("Intern {id}"),
            organization: "Org".to_string(),
            sector: sector.to_string(),
            location: location.to_string(),
            description: String::new(),
            required_skills: strings(skills),
            education_requirement: "UG (Undergraduate)".to_string(),
            is_active: true,
        }
    }

    fn catalog_entry(id: &str) -> InternshipPosting {
        builtin_postings()
            .into_iter()
            .find(|p| p.id == id)
            .unwrap()
    }

    #[test]
    fn test_perfect_profile_scores_one_with_no_gap() {
        let scored = score_posting(&web_developer(), &catalog_entry("1"), &ScoringWeights::default());
        assert_eq!(scored.breakdown.skills, 1.0);
        assert_eq!(scored.breakdown.education, 1.0);
        assert_eq!(scored.breakdown.sector, 1.0);
        assert_eq!(scored.breakdown.location, 1.0);
        assert_eq!(scored.match_score, 1.0);
        assert!(scored.skills_gap.is_empty());
        assert_eq!(scored.skills_matched.len(), 5);
    }

    #[test]
    fn test_unrelated_posting_scores_education_and_location_only() {
        let scored = score_posting(&web_developer(), &catalog_entry("6"), &ScoringWeights::default());
        assert_eq!(scored.breakdown.skills, 0.0);
        assert_eq!(scored.breakdown.education, 1.0);
        assert_eq!(scored.breakdown.sector, 0.0);
        assert_eq!(scored.breakdown.location, 0.3);
        assert!((scored.match_score - 0.26).abs() < 1e-9, "Score was {}", scored.match_score);
        assert!(scored.skills_matched.is_empty());
        assert_eq!(scored.skills_gap, catalog_entry("6").required_skills);
    }

    #[test]
    fn test_empty_skills_and_sectors_leave_education_and_location() {
        let profile = UserProfile {
            education_level: "Diploma".to_string(),
            skills: vec![],
            sectors: vec![],
            location_preference: "Delhi".to_string(),
        };
        let weights = ScoringWeights::default();
        for p in builtin_postings() {
            let scored = score_posting(&profile, &p, &weights);
            assert_eq!(scored.breakdown.skills, 0.0);
            assert_eq!(scored.breakdown.sector, 0.0);
            let expected = 0.2 * scored.breakdown.education + 0.2 * scored.breakdown.location;
            assert!((scored.match_score - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_postgraduate_applying_to_undergraduate_role_gets_point_eight() {
        let profile = UserProfile {
            education_level: "PG (Postgraduate)".to_string(),
            ..web_developer()
        };
        let scored = score_posting(&profile, &catalog_entry("1"), &ScoringWeights::default());
        assert_eq!(scored.breakdown.education, 0.8);
        assert!((scored.match_score - 0.96).abs() < 1e-9);
    }

    #[test]
    fn test_results_sorted_descending_and_truncated_to_five() {
        let results = recommend(&web_developer(), &builtin_postings());
        assert_eq!(results.len(), 5);
        assert_eq!(results[0].posting.id, "1");
        for pair in results.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
    }

    #[test]
    fn test_ranking_for_web_developer_profile() {
        // #1 = 1.0, #3 = 0.6 (sector + location + education), #10 = 0.4 (location + education).
        // The rest tie at 0.26 except #8 (PG required), so #2 and #4 fill the last slots.
        let ids: Vec<String> = recommend(&web_developer(), &builtin_postings())
            .into_iter()
            .map(|s| s.posting.id)
            .collect();
        assert_eq!(ids[0], "1");
        assert_eq!(ids[1], "3");
        assert_eq!(ids[2], "10");
        assert_eq!(&ids[3..], &["2".to_string(), "4".to_string()]);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let postings = vec![
            posting("a", "X", "Nowhere", &["Welding"]),
            posting("b", "X", "Nowhere", &["Pottery"]),
            posting("c", "X", "Nowhere", &["Sailing"]),
        ];
        let ids: Vec<String> = recommend(&web_developer(), &postings)
            .into_iter()
            .map(|s| s.posting.id)
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_zero_scores_are_not_filtered() {
        let weights = ScoringWeights {
            skills: 1.0,
            education: 0.0,
            sector: 0.0,
            location: 0.0,
        };
        let recommender = WeightedRecommender { weights, limit: 5 };
        let postings = vec![posting("a", "X", "Y", &["Welding"])];
        let results = recommender.recommend(&web_developer(), &postings);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].match_score, 0.0);
    }

    #[test]
    fn test_empty_catalog_returns_empty() {
        assert!(recommend(&web_developer(), &[]).is_empty());
    }

    #[test]
    fn test_recommend_is_deterministic() {
        let postings = builtin_postings();
        let first = recommend(&web_developer(), &postings);
        let second = recommend(&web_developer(), &postings);
        let project = |r: &[ScoredPosting]| -> Vec<(String, f64)> {
            r.iter().map(|s| (s.posting.id.clone(), s.match_score)).collect()
        };
        assert_eq!(project(&first), project(&second));
    }

    #[test]
    fn test_scores_bounded_for_degenerate_profiles() {
        let profiles = vec![
            UserProfile::default(),
            UserProfile {
                skills: strings(&["", "a", "a", "e", "Communication", "Communication"]),
                sectors: strings(&["Education", "Education"]),
                education_level: "PhD".to_string(),
                location_preference: "Delhi".to_string(),
            },
        ];
        for profile in &profiles {
            for scored in recommend(profile, &builtin_postings()) {
                assert!((0.0..=1.0).contains(&scored.match_score));
            }
        }
    }

    #[test]
    fn test_custom_limit_is_respected() {
        let recommender = WeightedRecommender {
            limit: 2,
            ..WeightedRecommender::default()
        };
        assert_eq!(recommender.recommend(&web_developer(), &builtin_postings()).len(), 2);
    }

    #[test]
    fn test_scored_posting_serializes_flat() {
        let scored = score_posting(&web_developer(), &catalog_entry("1"), &ScoringWeights::default());
        let value = serde_json::to_value(&scored).unwrap();
        assert_eq!(value["id"], "1");
        assert_eq!(value["title"], "Software Development Intern");
        assert_eq!(value["match_score"], 1.0);
        assert_eq!(value["breakdown"]["location"], 1.0);
    }
}
