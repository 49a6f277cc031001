use serde::{Deserialize, Serialize};

use super::config::BonusPolicy;
use super::domain::TestResult;

/// Breadth bonus: one point per badge and per passing test, each side capped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BonusScore {
    pub badge_points: u32,
    pub qualifying_tests: u32,
    pub test_points: u32,
    pub score: f64,
}

pub fn compute_bonus(
    badge_count: usize,
    test_results: &[TestResult],
    policy: &BonusPolicy,
) -> BonusScore {
    let badge_points = u32::try_from(badge_count)
        .unwrap_or(u32::MAX)
        .min(policy.badge_cap);
    let qualifying_tests = u32::try_from(
        test_results
            .iter()
            .filter(|result| result.score >= policy.passing_test_score)
            .count(),
    )
    .unwrap_or(u32::MAX);
    let test_points = qualifying_tests.min(policy.test_cap);

    let score = (f64::from(badge_points) + f64::from(test_points)) * policy.points_per_item;

    BonusScore {
        badge_points,
        qualifying_tests,
        test_points,
        score: score.clamp(0.0, 100.0),
    }
}
