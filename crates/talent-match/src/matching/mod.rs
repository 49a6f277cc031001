//! Candidate-to-job matching: four independent analyzers feed a weighted aggregator, and a
//! stable ranker orders candidate pools for a single job.

mod bonus;
pub mod config;
pub mod domain;
mod education;
mod experience;
mod ranking;
pub mod report;
mod scoring;
mod skills;

#[cfg(test)]
mod tests;

use chrono::{Local, NaiveDate};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub use bonus::{compute_bonus, BonusScore};
pub use config::{
    BonusPolicy, EducationHierarchy, EducationKeyword, EducationLevel, ExperienceLadder,
    ExperienceStep, MatchingConfig, MatchingConfigError, RoundingDiscipline, TierScoring,
};
pub use domain::{
    Badge, CandidateProfile, Certification, ContractType, EducationRecord, EducationTier,
    Experience, ExperienceTier, JobId, JobRequirement, Skill, TestResult, UserId,
};
pub use education::{derive_education_tier, match_education, EducationSummary};
pub use experience::{
    derive_experience_tier, match_experience, months_between, parse_date, ExperienceSummary,
};
pub use ranking::{rank, RankedMatch};
pub use scoring::{aggregate, weighted_total, ScoreWeights, SubScores};
pub use skills::{match_skills, SkillMatch};

/// Factor contributing to the match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchFactor {
    Skills,
    Experience,
    Education,
    Bonus,
}

/// Discrete contribution to a match, kept so recruiters can see why a score came out as it did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: MatchFactor,
    pub weight: f64,
    pub score: f64,
    pub contribution: f64,
    pub notes: String,
}

/// Compatibility of one candidate with one job opening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub user_id: UserId,
    pub job_id: JobId,
    pub match_score: u8,
    pub skills_score: f64,
    pub experience_score: f64,
    pub education_score: f64,
    pub bonus_score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub derived_experience_tier: ExperienceTier,
    pub total_experience_months: u32,
    pub derived_education_tier: Option<EducationTier>,
    pub education_rank: u8,
    pub badge_count: usize,
    pub test_result_count: usize,
    pub components: Vec<ScoreComponent>,
}

/// Stateless scorer applying an immutable [`MatchingConfig`].
///
/// Experience durations are measured up to a reference date: a fixed one when configured,
/// otherwise today's local date, resolved once per call so a batch shares a single "now".
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    config: MatchingConfig,
    as_of: Option<NaiveDate>,
}

impl MatchEngine {
    pub fn new(config: MatchingConfig) -> Self {
        Self {
            config,
            as_of: None,
        }
    }

    pub fn with_reference_date(mut self, as_of: NaiveDate) -> Self {
        self.as_of = Some(as_of);
        self
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn compute_match(&self, profile: &CandidateProfile, job: &JobRequirement) -> MatchResult {
        self.evaluate(profile, job, self.reference_date())
    }

    /// Scores every profile against `job`, in parallel, returning results in input order.
    pub fn score_pool(
        &self,
        job: &JobRequirement,
        profiles: &[CandidateProfile],
    ) -> Vec<MatchResult> {
        let as_of = self.reference_date();
        info!(job_id = %job.id.0, pool = profiles.len(), %as_of, "scoring candidate pool");
        profiles
            .par_iter()
            .map(|profile| self.evaluate(profile, job, as_of))
            .collect()
    }

    /// Scores one candidate against many jobs, in parallel, returning results in input order.
    pub fn match_jobs(
        &self,
        profile: &CandidateProfile,
        jobs: &[JobRequirement],
    ) -> Vec<MatchResult> {
        let as_of = self.reference_date();
        info!(user_id = %profile.user_id.0, jobs = jobs.len(), %as_of, "scoring job openings");
        jobs.par_iter()
            .map(|job| self.evaluate(profile, job, as_of))
            .collect()
    }

    /// Scores and ranks a candidate pool for `job`, best matches first.
    pub fn rank_matches(
        &self,
        job: &JobRequirement,
        profiles: &[CandidateProfile],
    ) -> Vec<RankedMatch> {
        let results = self.score_pool(job, profiles);
        let entries = profiles
            .iter()
            .cloned()
            .zip(results.into_iter().map(Some))
            .collect();
        rank(job, entries)
    }

    fn evaluate(
        &self,
        profile: &CandidateProfile,
        job: &JobRequirement,
        as_of: NaiveDate,
    ) -> MatchResult {
        let config = &self.config;

        let skills = match_skills(&profile.skills, &job.required_skills);
        let experience = derive_experience_tier(&profile.experiences, as_of, &config.experience);
        let experience_score = match_experience(
            experience.tier,
            job.required_experience_tier,
            &config.experience,
            &config.tiers,
        );
        let education = derive_education_tier(&profile.education, &config.education);
        let education_score = match_education(
            education.rank,
            job.required_education_tier,
            &config.education,
            &config.tiers,
        );
        let bonus = compute_bonus(profile.badges.len(), &profile.test_results, &config.bonus);

        let sub_scores = SubScores {
            skills: skills.score,
            experience: experience_score,
            education: education_score,
            bonus: bonus.score,
        };
        let match_score = aggregate(&sub_scores, &config.weights, config.rounding);

        let components = build_components(
            job,
            &sub_scores.for_discipline(config.rounding),
            &config.weights,
            &skills,
            &experience,
            &education,
            &bonus,
        );

        debug!(
            user_id = %profile.user_id.0,
            job_id = %job.id.0,
            match_score,
            skills = skills.score,
            experience = experience_score,
            education = education_score,
            bonus = bonus.score,
            "match computed"
        );

        MatchResult {
            user_id: profile.user_id.clone(),
            job_id: job.id.clone(),
            match_score,
            skills_score: skills.score,
            experience_score,
            education_score,
            bonus_score: bonus.score,
            matched_skills: skills.matched,
            missing_skills: skills.missing,
            derived_experience_tier: experience.tier,
            total_experience_months: experience.total_months,
            derived_education_tier: education.tier,
            education_rank: education.rank,
            badge_count: profile.badges.len(),
            test_result_count: profile.test_results.len(),
            components,
        }
    }
}

fn build_components(
    job: &JobRequirement,
    scores: &SubScores,
    weights: &ScoreWeights,
    skills: &SkillMatch,
    experience: &ExperienceSummary,
    education: &EducationSummary,
    bonus: &BonusScore,
) -> Vec<ScoreComponent> {
    let skills_notes = if skills.matched.is_empty() && skills.missing.is_empty() {
        "no required skills".to_string()
    } else {
        format!(
            "{} of {} required skills covered",
            skills.matched.len(),
            skills.matched.len() + skills.missing.len()
        )
    };

    let experience_notes = match job.required_experience_tier {
        Some(required) => format!(
            "{} months ({}) against required {}",
            experience.total_months,
            experience.tier.label(),
            required.label()
        ),
        None => format!(
            "{} months ({}), no experience requirement",
            experience.total_months,
            experience.tier.label()
        ),
    };

    let candidate_degree = education.tier.map(EducationTier::label).unwrap_or("none");
    let education_notes = match job.required_education_tier {
        Some(required) => format!(
            "highest degree {candidate_degree} against required {}",
            required.label()
        ),
        None => format!("highest degree {candidate_degree}, no education requirement"),
    };

    let bonus_notes = format!(
        "{} badge point(s), {} passing test(s) of which {} counted",
        bonus.badge_points, bonus.qualifying_tests, bonus.test_points
    );

    [
        (MatchFactor::Skills, weights.skills(), scores.skills, skills_notes),
        (
            MatchFactor::Experience,
            weights.experience(),
            scores.experience,
            experience_notes,
        ),
        (
            MatchFactor::Education,
            weights.education(),
            scores.education,
            education_notes,
        ),
        (MatchFactor::Bonus, weights.bonus(), scores.bonus, bonus_notes),
    ]
    .into_iter()
    .map(|(factor, weight, score, notes)| ScoreComponent {
        factor,
        weight,
        score,
        contribution: score * weight,
        notes,
    })
    .collect()
}

/// Scores `profile` against `job` with the default configuration, measured up to today.
pub fn compute_match(profile: &CandidateProfile, job: &JobRequirement) -> MatchResult {
    MatchEngine::default().compute_match(profile, job)
}

/// Ranks `profiles` for `job` with the default configuration, measured up to today.
pub fn rank_matches(job: &JobRequirement, profiles: &[CandidateProfile]) -> Vec<RankedMatch> {
    MatchEngine::default().rank_matches(job, profiles)
}
