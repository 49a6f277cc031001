use serde::{Deserialize, Serialize};

/// Identifier wrapper for platform users owning a professional profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Identifier wrapper for job openings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

/// Declared skill; only the name takes part in matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Skill {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: None,
            category: None,
        }
    }
}

/// Work history entry. Dates are kept as the free text handed over by the data layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationRecord {
    pub degree: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_of_study: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_on: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub code: String,
    pub label: String,
}

/// Result of a platform assessment, scored on a 0-100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub test_title: String,
    pub score: f64,
}

/// Fully assembled professional profile as supplied by the data-access layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub user_id: UserId,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<EducationRecord>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub badges: Vec<Badge>,
    #[serde(default)]
    pub test_results: Vec<TestResult>,
}

impl CandidateProfile {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: UserId(user_id.into()),
            skills: Vec::new(),
            experiences: Vec::new(),
            education: Vec::new(),
            certifications: Vec::new(),
            badges: Vec::new(),
            test_results: Vec::new(),
        }
    }
}

/// Seniority bucket derived from accumulated months of experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceTier {
    Junior,
    Mid,
    Senior,
}

impl ExperienceTier {
    pub const ALL: [ExperienceTier; 3] = [
        ExperienceTier::Junior,
        ExperienceTier::Mid,
        ExperienceTier::Senior,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ExperienceTier::Junior => "junior",
            ExperienceTier::Mid => "mid",
            ExperienceTier::Senior => "senior",
        }
    }
}

/// French degree ladder used by job postings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EducationTier {
    #[serde(rename = "bac")]
    Bac,
    #[serde(rename = "bac+2")]
    Bac2,
    #[serde(rename = "bac+3")]
    Bac3,
    #[serde(rename = "bac+5")]
    Bac5,
    #[serde(rename = "doctorat")]
    Doctorat,
}

impl EducationTier {
    pub const ALL: [EducationTier; 5] = [
        EducationTier::Bac,
        EducationTier::Bac2,
        EducationTier::Bac3,
        EducationTier::Bac5,
        EducationTier::Doctorat,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            EducationTier::Bac => "bac",
            EducationTier::Bac2 => "bac+2",
            EducationTier::Bac3 => "bac+3",
            EducationTier::Bac5 => "bac+5",
            EducationTier::Doctorat => "doctorat",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    #[default]
    Cdi,
    Cdd,
    Freelance,
    Internship,
    Apprenticeship,
    Other,
}

/// Requirements of a single job opening. Contract, location and remote flags are carried
/// through for the caller and never scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRequirement {
    pub id: JobId,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub required_experience_tier: Option<ExperienceTier>,
    #[serde(default)]
    pub required_education_tier: Option<EducationTier>,
    #[serde(default)]
    pub contract_type: ContractType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_allowed: Option<bool>,
}

impl JobRequirement {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: JobId(id.into()),
            required_skills: Vec::new(),
            required_experience_tier: None,
            required_education_tier: None,
            contract_type: ContractType::default(),
            location: None,
            remote_allowed: None,
        }
    }
}
