use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::engagement::store::EngagementSnapshot;
use crate::models::engagement::{ActionKind, Rating};
use crate::models::internship::InternshipPosting;
use crate::models::profile::ProfileRecord;

pub const COMMON_SKILLS_LIMIT: usize = 8;
pub const TOP_INTERNSHIPS_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternshipEngagement {
    pub id: String,
    pub title: String,
    pub views: usize,
    pub saves: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub total_users: usize,
    pub resumes_uploaded: usize,
    pub total_feedback: usize,
    pub positive_feedback: usize,
    pub negative_feedback: usize,
    pub common_skills: Vec<SkillCount>,
    pub top_internships: Vec<InternshipEngagement>,
}

/// Aggregates the admin dashboard numbers. Pure; callers gather the inputs.
pub fn compute_analytics(
    profiles: &[ProfileRecord],
    engagement: &EngagementSnapshot,
    postings: &[InternshipPosting],
) -> AnalyticsReport {
    let positive_feedback = engagement
        .feedback
        .iter()
        .filter(|f| f.rating == Rating::Up)
        .count();
    let negative_feedback = engagement.feedback.len() - positive_feedback;

    AnalyticsReport {
        total_users: profiles.len(),
        resumes_uploaded: profiles.iter().filter(|p| p.resume_uploaded).count(),
        total_feedback: engagement.feedback.len(),
        positive_feedback,
        negative_feedback,
        common_skills: common_skills(profiles, COMMON_SKILLS_LIMIT),
        top_internships: top_internships(engagement, postings, TOP_INTERNSHIPS_LIMIT),
    }
}

/// Skill frequency across profiles, most common first. Skills are counted
/// verbatim; ties keep first-seen order.
fn common_skills(profiles: &[ProfileRecord], limit: usize) -> Vec<SkillCount> {
    let mut counts: Vec<SkillCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for skill in profiles.iter().flat_map(|p| p.profile.skills.iter()) {
        match index.get(skill.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(skill.as_str(), counts.len());
                counts.push(SkillCount {
                    skill: skill.clone(),
                    count: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

/// Postings ranked by views, then saves; ties keep catalog order.
fn top_internships(
    engagement: &EngagementSnapshot,
    postings: &[InternshipPosting],
    limit: usize,
) -> Vec<InternshipEngagement> {
    let mut views: HashMap<&str, usize> = HashMap::new();
    for action in &engagement.actions {
        if action.action != ActionKind::ViewInternship {
            continue;
        }
        if let Some(id) = action.internship_id.as_deref() {
            *views.entry(id).or_default() += 1;
        }
    }

    let mut saves: HashMap<&str, usize> = HashMap::new();
    for saved in &engagement.saved {
        *saves.entry(saved.internship_id.as_str()).or_default() += 1;
    }

    let mut ranked: Vec<InternshipEngagement> = postings
        .iter()
        .map(|p| InternshipEngagement {
            id: p.id.clone(),
            title: p.title.clone(),
            views: views.get(p.id.as_str()).copied().unwrap_or(0),
            saves: saves.get(p.id.as_str()).copied().unwrap_or(0),
        })
        .collect();

    ranked.sort_by(|a, b| b.views.cmp(&a.views).then(b.saves.cmp(&a.saves)));
    ranked.truncate(limit);
    ranked
}
