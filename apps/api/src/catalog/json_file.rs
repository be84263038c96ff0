use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::info;

use crate::catalog::InternshipCatalog;
use crate::models::internship::InternshipPosting;

/// Catalog loaded once from a JSON array of postings.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    postings: Vec<InternshipPosting>,
}

impl JsonFileCatalog {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file {}", path.display()))?;
        let postings = Self::parse(&raw)
            .with_context(|| format!("failed to parse catalog file {}", path.display()))?;

        info!("Loaded {} postings from {}", postings.len(), path.display());
        Ok(Self { postings })
    }

    fn parse(raw: &str) -> Result<Vec<InternshipPosting>> {
        let postings: Vec<InternshipPosting> = serde_json::from_str(raw)?;

        let mut seen = std::collections::HashSet::new();
        for posting in &postings {
            if !seen.insert(posting.id.as_str()) {
                anyhow::bail!("duplicate posting id '{}'", posting.id);
            }
        }
        Ok(postings)
    }
}

#[async_trait]
impl InternshipCatalog for JsonFileCatalog {
    async fn list_active(&self) -> Result<Vec<InternshipPosting>> {
        Ok(self
            .postings
            .iter()
            .filter(|posting| posting.is_active)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TWO_POSTINGS: &str = r#"[
        {
            "id": "a",
            "title": "Backend Intern",
            "organization": "Acme",
            "sector": "Technology & IT",
            "location": "Karnataka",
            "description": "APIs",
            "required_skills": ["Rust", "SQL"],
            "education_requirement": "UG (Undergraduate)"
        },
        {
            "id": "b",
            "title": "Archived Intern",
            "organization": "Acme",
            "sector": "Technology & IT",
            "location": "Delhi",
            "description": "Old",
            "required_skills": [],
            "education_requirement": "Diploma",
            "is_active": false
        }
    ]"#;

    #[tokio::test]
    async fn test_load_from_file_filters_inactive() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TWO_POSTINGS.as_bytes()).unwrap();

        let catalog = JsonFileCatalog::load(file.path()).unwrap();
        let active = catalog.list_active().await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "a");
        assert!(active[0].is_active);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonFileCatalog::load(dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read catalog file"));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let raw = TWO_POSTINGS.replace("\"id\": \"b\"", "\"id\": \"a\"");
        let err = JsonFileCatalog::parse(&raw).unwrap_err();
        assert!(err.to_string().contains("duplicate posting id 'a'"));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(JsonFileCatalog::parse("{not json").is_err());
    }
}
