use chrono::NaiveDate;

use crate::matching::domain::{
    Badge, CandidateProfile, ContractType, EducationRecord, EducationTier, Experience,
    ExperienceTier, JobRequirement, Skill, TestResult,
};
use crate::matching::{MatchEngine, MatchingConfig};

pub(super) fn evaluated_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date")
}

pub(super) fn engine() -> MatchEngine {
    MatchEngine::new(MatchingConfig::default()).with_reference_date(evaluated_on())
}

pub(super) fn skills(names: &[&str]) -> Vec<Skill> {
    names.iter().map(|name| Skill::named(*name)).collect()
}

pub(super) fn experience(start: &str, end: Option<&str>, is_current: bool) -> Experience {
    Experience {
        title: "Développeur".to_string(),
        company: "Studio Lumière".to_string(),
        start_date: Some(start.to_string()),
        end_date: end.map(str::to_string),
        is_current,
    }
}

pub(super) fn degree(text: &str) -> EducationRecord {
    EducationRecord {
        degree: text.to_string(),
        field_of_study: None,
        end_date: None,
    }
}

pub(super) fn badges(count: usize) -> Vec<Badge> {
    (0..count)
        .map(|index| Badge {
            code: format!("badge-{index}"),
            label: format!("Badge {index}"),
        })
        .collect()
}

pub(super) fn test_results(scores: &[f64]) -> Vec<TestResult> {
    scores
        .iter()
        .enumerate()
        .map(|(index, score)| TestResult {
            test_title: format!("Quiz {index}"),
            score: *score,
        })
        .collect()
}

/// Profile used by the reference scenarios: partial skill coverage, four years of experience,
/// a BTS, three badges and two passing tests out of three.
pub(super) fn reference_profile(user_id: &str) -> CandidateProfile {
    let mut profile = CandidateProfile::new(user_id);
    profile.skills = skills(&["React", "Node.js"]);
    profile.experiences = vec![experience("2020-01-01", None, true)];
    profile.education = vec![degree("BTS Commerce")];
    profile.badges = badges(3);
    profile.test_results = test_results(&[80.0, 60.0, 90.0]);
    profile
}

pub(super) fn frontend_job() -> JobRequirement {
    JobRequirement {
        required_skills: vec!["react".to_string(), "typescript".to_string()],
        required_experience_tier: Some(ExperienceTier::Mid),
        required_education_tier: Some(EducationTier::Bac3),
        contract_type: ContractType::Cdi,
        location: Some("Lyon".to_string()),
        remote_allowed: Some(true),
        ..JobRequirement::new("job-frontend")
    }
}
