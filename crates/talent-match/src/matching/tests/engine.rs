use super::common::*;
use crate::matching::domain::{EducationTier, ExperienceTier, JobRequirement};
use crate::matching::{
    MatchEngine, MatchFactor, MatchingConfig, RoundingDiscipline, ScoreWeights,
};

#[test]
fn reference_profile_scores_sixty_nine() {
    let engine = engine();
    let profile = reference_profile("cand-ref");

    let result = engine.compute_match(&profile, &frontend_job());

    assert_eq!(result.matched_skills, vec!["React"]);
    assert_eq!(result.missing_skills, vec!["typescript"]);
    assert_eq!(result.skills_score, 50.0);
    assert_eq!(result.total_experience_months, 48);
    assert_eq!(result.derived_experience_tier, ExperienceTier::Senior);
    assert_eq!(result.experience_score, 100.0);
    assert_eq!(result.education_rank, 2);
    assert_eq!(result.derived_education_tier, Some(EducationTier::Bac2));
    assert_eq!(result.education_score, 70.0);
    assert_eq!(result.bonus_score, 50.0);
    assert_eq!(result.match_score, 69);
    assert_eq!(result.badge_count, 3);
    assert_eq!(result.test_result_count, 3);
    assert_eq!(result.job_id, frontend_job().id);
    assert_eq!(result.user_id, profile.user_id);
}

#[test]
fn components_explain_each_factor() {
    let result = engine().compute_match(&reference_profile("cand-ref"), &frontend_job());

    let factors: Vec<MatchFactor> = result
        .components
        .iter()
        .map(|component| component.factor)
        .collect();
    assert_eq!(
        factors,
        vec![
            MatchFactor::Skills,
            MatchFactor::Experience,
            MatchFactor::Education,
            MatchFactor::Bonus
        ]
    );

    let contributions: f64 = result
        .components
        .iter()
        .map(|component| component.contribution)
        .sum();
    assert_eq!(contributions.round() as u8, result.match_score);

    let experience = &result.components[1];
    assert!(experience.notes.contains("48 months"));
    assert!(experience.notes.contains("required mid"));
    assert!(result.components[0].notes.contains("1 of 2"));
}

#[test]
fn unconstrained_job_gives_full_requirement_scores() {
    let engine = engine();
    let profile = crate::matching::domain::CandidateProfile::new("cand-empty");
    let job = JobRequirement::new("job-open");

    let result = engine.compute_match(&profile, &job);

    assert_eq!(result.skills_score, 100.0);
    assert_eq!(result.experience_score, 100.0);
    assert_eq!(result.education_score, 100.0);
    assert_eq!(result.bonus_score, 0.0);
    assert_eq!(result.derived_experience_tier, ExperienceTier::Junior);
    assert_eq!(result.derived_education_tier, None);
    assert_eq!(result.match_score, 90);
}

#[test]
fn empty_skill_list_misses_every_requirement() {
    let engine = engine();
    let mut profile = reference_profile("cand-no-skills");
    profile.skills.clear();

    let result = engine.compute_match(&profile, &frontend_job());

    assert_eq!(result.skills_score, 0.0);
    assert!(result.matched_skills.is_empty());
    assert_eq!(result.missing_skills, frontend_job().required_skills);
}

#[test]
fn computing_twice_yields_identical_results() {
    let engine = engine();
    let profile = reference_profile("cand-ref");
    let job = frontend_job();

    assert_eq!(
        engine.compute_match(&profile, &job),
        engine.compute_match(&profile, &job)
    );
}

#[test]
fn custom_weights_flow_into_the_score() {
    let config = MatchingConfig {
        weights: ScoreWeights::new(1.0, 0.0, 0.0, 0.0).expect("valid weights"),
        ..MatchingConfig::default()
    };
    let engine = MatchEngine::new(config).with_reference_date(evaluated_on());

    let result = engine.compute_match(&reference_profile("cand-ref"), &frontend_job());

    assert_eq!(result.match_score, 50);
}

#[test]
fn rounding_discipline_is_applied_from_config() {
    let mut profile = reference_profile("cand-rounding");
    profile.skills = skills(&["b1", "b2", "b3", "b4"]);
    profile.badges.clear();
    profile.test_results.clear();
    let mut job = JobRequirement::new("job-eleven");
    job.required_skills = ["b1x", "b2x", "b3x", "b4x"]
        .into_iter()
        .map(str::to_string)
        .chain((5..=11).map(|index| format!("c{index}")))
        .collect();

    let final_only = MatchEngine::new(MatchingConfig::default())
        .with_reference_date(evaluated_on())
        .compute_match(&profile, &job);
    let per_component = MatchEngine::new(MatchingConfig {
        rounding: RoundingDiscipline::PerComponent,
        ..MatchingConfig::default()
    })
    .with_reference_date(evaluated_on())
    .compute_match(&profile, &job);

    // 4 of 11: 36.36 * 0.4 + 50 = 64.55, whereas 36 * 0.4 + 50 = 64.4.
    assert_eq!(final_only.matched_skills.len(), 4);
    assert_eq!(final_only.match_score, 65);
    assert_eq!(per_component.match_score, 64);
    assert_eq!(final_only.skills_score, per_component.skills_score);
}

#[test]
fn components_add_up_to_the_score_under_each_rounding_discipline() {
    let mut profile = reference_profile("cand-components");
    profile.skills = skills(&["b1", "b2", "b3", "b4"]);
    profile.badges.clear();
    profile.test_results.clear();
    let mut job = JobRequirement::new("job-eleven");
    job.required_skills = (1..=4)
        .map(|index| format!("b{index}x"))
        .chain((5..=11).map(|index| format!("c{index}")))
        .collect();

    for (rounding, expected_total) in [
        (RoundingDiscipline::FinalOnly, 400.0 / 11.0 * 0.4 + 50.0),
        (RoundingDiscipline::PerComponent, 36.0 * 0.4 + 50.0),
    ] {
        let result = MatchEngine::new(MatchingConfig {
            rounding,
            ..MatchingConfig::default()
        })
        .with_reference_date(evaluated_on())
        .compute_match(&profile, &job);

        let total: f64 = result
            .components
            .iter()
            .map(|component| component.contribution)
            .sum();
        assert!(
            (total - expected_total).abs() < 1e-9,
            "{rounding:?}: contributions sum to {total}"
        );
        assert_eq!(total.round() as u8, result.match_score, "{rounding:?}");
    }
}

#[test]
fn one_candidate_against_many_jobs_keeps_job_order() {
    let engine = engine();
    let profile = reference_profile("cand-ref");
    let mut backend = JobRequirement::new("job-backend");
    backend.required_skills = vec!["node".to_string()];
    let jobs = vec![frontend_job(), backend, JobRequirement::new("job-open")];

    let results = engine.match_jobs(&profile, &jobs);

    let ids: Vec<&str> = results.iter().map(|result| result.job_id.0.as_str()).collect();
    assert_eq!(ids, vec!["job-frontend", "job-backend", "job-open"]);
    assert_eq!(results[1].matched_skills, vec!["Node.js"]);
}
