use serde::{Deserialize, Serialize};

use super::domain::Skill;

/// Outcome of comparing a candidate's skills with a job's required skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub score: f64,
    /// Candidate skill names that satisfied a requirement, one entry per satisfied requirement.
    pub matched: Vec<String>,
    /// Required skills no candidate skill satisfied.
    pub missing: Vec<String>,
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Two normalized names match when either one contains the other.
fn contains_either(candidate: &str, required: &str) -> bool {
    candidate.contains(required) || required.contains(candidate)
}

/// Bidirectional containment matching of required skills against the candidate's skills.
///
/// Blank entries on either side are ignored; when no non-blank requirement remains the job is
/// treated as unconstrained and scores 100.
pub fn match_skills(candidate_skills: &[Skill], required_skills: &[String]) -> SkillMatch {
    let requirements: Vec<(&String, String)> = required_skills
        .iter()
        .map(|required| (required, normalize(required)))
        .filter(|(_, normalized)| !normalized.is_empty())
        .collect();

    if requirements.is_empty() {
        return SkillMatch {
            score: 100.0,
            matched: Vec::new(),
            missing: Vec::new(),
        };
    }

    let candidates: Vec<(&Skill, String)> = candidate_skills
        .iter()
        .map(|skill| (skill, normalize(&skill.name)))
        .filter(|(_, normalized)| !normalized.is_empty())
        .collect();

    if candidates.is_empty() {
        return SkillMatch {
            score: 0.0,
            matched: Vec::new(),
            missing: requirements
                .into_iter()
                .map(|(required, _)| required.clone())
                .collect(),
        };
    }

    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for (required, normalized_required) in &requirements {
        let satisfied_by = candidates
            .iter()
            .find(|(_, normalized)| contains_either(normalized, normalized_required));

        match satisfied_by {
            Some((skill, _)) => matched.push(skill.name.clone()),
            None => missing.push((*required).clone()),
        }
    }

    let score = matched.len() as f64 / requirements.len() as f64 * 100.0;

    SkillMatch {
        score,
        matched,
        missing,
    }
}
