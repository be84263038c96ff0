use anyhow::Result;
use async_trait::async_trait;

use crate::catalog::InternshipCatalog;
use crate::models::internship::InternshipPosting;

struct PostingSeed {
    id: &'static str,
    title: &'static str,
    organization: &'static str,
    sector: &'static str,
    location: &'static str,
    description: &'static str,
    required_skills: [&'static str; 5],
    education_requirement: &'static str,
}

const UG: &str = "UG (Undergraduate)";
const PG: &str = "PG (Postgraduate)";

const SEEDS: &[PostingSeed] = &[
    PostingSeed {
        id: "1",
        title: "Software Development Intern",
        organization: "TechCorp India",
        sector: "Technology & IT",
        location: "Karnataka",
        description: "Work on web applications using modern JavaScript frameworks. Learn full-stack development and agile methodologies.",
        required_skills: ["JavaScript", "React", "Node.js", "HTML", "CSS"],
        education_requirement: UG,
    },
    PostingSeed {
        id: "2",
        title: "Digital Marketing Intern",
        organization: "Marketing Solutions Ltd",
        sector: "Media & Communications",
        location: "Maharashtra",
        description: "Assist in creating digital marketing campaigns, social media management, and content creation.",
        required_skills: [
            "Digital Marketing",
            "Social Media",
            "Content Writing",
            "Analytics",
            "Communication",
        ],
        education_requirement: UG,
    },
    PostingSeed {
        id: "3",
        title: "Data Analysis Intern",
        organization: "DataTech Solutions",
        sector: "Technology & IT",
        location: "Karnataka",
        description: "Analyze business data, create reports, and support data-driven decision making using Python and SQL.",
        required_skills: ["Python", "SQL", "Data Analysis", "Excel", "Statistics"],
        education_requirement: UG,
    },
    PostingSeed {
        id: "4",
        title: "Healthcare Administration Intern",
        organization: "City General Hospital",
        sector: "Healthcare",
        location: "Tamil Nadu",
        description: "Support hospital administration, patient records management, and healthcare operations.",
        required_skills: [
            "Administration",
            "Communication",
            "Healthcare Knowledge",
            "Computer Skills",
            "Organization",
        ],
        education_requirement: UG,
    },
    PostingSeed {
        id: "5",
        title: "Financial Analysis Intern",
        organization: "National Bank",
        sector: "Finance & Banking",
        location: "Maharashtra",
        description: "Assist in financial analysis, risk assessment, and investment research for banking operations.",
        required_skills: ["Finance", "Excel", "Analysis", "Mathematics", "Communication"],
        education_requirement: UG,
    },
    PostingSeed {
        id: "6",
        title: "Teaching Assistant Intern",
        organization: "State Education Board",
        sector: "Education",
        location: "Delhi",
        description: "Support teachers in classroom activities, curriculum development, and student assessment.",
        required_skills: [
            "Teaching",
            "Communication",
            "Subject Knowledge",
            "Patience",
            "Organization",
        ],
        education_requirement: UG,
    },
    PostingSeed {
        id: "7",
        title: "Manufacturing Process Intern",
        organization: "Industrial Manufacturing Co",
        sector: "Manufacturing",
        location: "Gujarat",
        description: "Learn manufacturing processes, quality control, and production optimization techniques.",
        required_skills: [
            "Engineering",
            "Quality Control",
            "Process Improvement",
            "Technical Skills",
            "Problem Solving",
        ],
        education_requirement: UG,
    },
    PostingSeed {
        id: "8",
        title: "Government Policy Research Intern",
        organization: "Ministry of Rural Development",
        sector: "Government",
        location: "Delhi",
        description: "Research policy impacts, analyze government programs, and support policy development initiatives.",
        required_skills: [
            "Research",
            "Policy Analysis",
            "Writing",
            "Communication",
            "Critical Thinking",
        ],
        education_requirement: PG,
    },
    PostingSeed {
        id: "9",
        title: "NGO Program Coordinator Intern",
        organization: "Rural Development Foundation",
        sector: "Non-Profit",
        location: "Rajasthan",
        description: "Coordinate community development programs, organize events, and support rural development initiatives.",
        required_skills: [
            "Project Management",
            "Communication",
            "Community Work",
            "Organization",
            "Leadership",
        ],
        education_requirement: UG,
    },
    PostingSeed {
        id: "10",
        title: "E-commerce Operations Intern",
        organization: "Online Retail Hub",
        sector: "Retail & E-commerce",
        location: "Karnataka",
        description: "Support online store operations, inventory management, and customer service for e-commerce platform.",
        required_skills: [
            "E-commerce",
            "Customer Service",
            "Inventory Management",
            "Computer Skills",
            "Communication",
        ],
        education_requirement: UG,
    },
];

impl PostingSeed {
    fn to_posting(&self) -> InternshipPosting {
        InternshipPosting {
            id: self.id.to_string(),
            title: self.title.to_string(),
            organization: self.organization.to_string(),
            sector: self.sector.to_string(),
            location: self.location.to_string(),
            description: self.description.to_string(),
            required_skills: self.required_skills.iter().map(|s| s.to_string()).collect(),
            education_requirement: self.education_requirement.to_string(),
            is_active: true,
        }
    }
}

/// The ten postings that ship with the service.
pub fn builtin_postings() -> Vec<InternshipPosting> {
    SEEDS.iter().map(PostingSeed::to_posting).collect()
}

/// Catalog backed by the built-in postings. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    postings: Vec<InternshipPosting>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::from_postings(builtin_postings())
    }

    /// Fixture catalogs for tests and alternative seeds.
    pub fn from_postings(postings: Vec<InternshipPosting>) -> Self {
        Self { postings }
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InternshipCatalog for StaticCatalog {
    async fn list_active(&self) -> Result<Vec<InternshipPosting>> {
        Ok(self
            .postings
            .iter()
            .filter(|posting| posting.is_active)
            .cloned()
            .collect())
    }
}
