use serde::Deserialize;

use crate::models::profile::UserProfile;

pub const MAX_SKILLS: usize = 50;
pub const MAX_SECTORS: usize = 20;
pub const MAX_ENTRY_LEN: usize = 100;

/// Profile wizard submission. Every field is optional on the wire so that a
/// missing field is reported by name instead of as a JSON shape error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileInput {
    pub education_level: Option<String>,
    pub skills: Option<Vec<String>>,
    pub sectors: Option<Vec<String>>,
    pub location_preference: Option<String>,
    #[serde(default)]
    pub resume_uploaded: bool,
}

/// Checks a submission and turns it into a scoreable profile.
///
/// Collects every problem before failing so the caller can fix the form in one pass.
/// Values are stored as given: no trimming, no case folding, since the scorer
/// compares labels exactly.
pub fn validate_profile(input: ProfileInput) -> Result<UserProfile, Vec<String>> {
    let mut problems = Vec::new();

    let education_level = required_text(input.education_level, "education_level", &mut problems);
    let location_preference =
        required_text(input.location_preference, "location_preference", &mut problems);
    let skills = bounded_list(input.skills, "skills", MAX_SKILLS, &mut problems);
    let sectors = bounded_list(input.sectors, "sectors", MAX_SECTORS, &mut problems);

    if !problems.is_empty() {
        return Err(problems);
    }

    Ok(UserProfile {
        education_level,
        skills,
        sectors,
        location_preference,
    })
}

fn required_text(value: Option<String>, field: &str, problems: &mut Vec<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => {
            if v.chars().count() > MAX_ENTRY_LEN {
                problems.push(format!("{field} must be at most {MAX_ENTRY_LEN} characters"));
            }
            v
        }
        _ => {
            problems.push(format!("{field} is required"));
            String::new()
        }
    }
}

fn bounded_list(
    value: Option<Vec<String>>,
    field: &str,
    max_len: usize,
    problems: &mut Vec<String>,
) -> Vec<String> {
    let Some(items) = value else {
        problems.push(format!("{field} is required"));
        return Vec::new();
    };

    if items.len() > max_len {
        problems.push(format!("{field} accepts at most {max_len} entries"));
    }
    // A blank entry is a substring of every skill and would match all postings.
    if items.iter().any(|s| s.trim().is_empty()) {
        problems.push(format!("{field} entries cannot be blank"));
    }
    if let Some(long) = items.iter().find(|s| s.chars().count() > MAX_ENTRY_LEN) {
        problems.push(format!(
            "{field} entry '{}…' exceeds {MAX_ENTRY_LEN} characters",
            long.chars().take(20).collect::<String>()
        ));
    }
    items
}
