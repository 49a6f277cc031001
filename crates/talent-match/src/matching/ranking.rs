use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::domain::{CandidateProfile, JobRequirement};
use super::MatchResult;

/// A candidate's place in a job's ranking. Unscored candidates carry no position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
    pub position: Option<usize>,
    pub profile: CandidateProfile,
    pub result: Option<MatchResult>,
}

impl RankedMatch {
    pub fn match_score(&self) -> Option<u8> {
        self.position
            .and(self.result.as_ref())
            .map(|result| result.match_score)
    }
}

/// Score usable for ranking against `job`; results computed for another job do not count.
fn ranking_score(job: &JobRequirement, result: Option<&MatchResult>) -> Option<u8> {
    result
        .filter(|result| result.job_id == job.id)
        .map(|result| result.match_score)
}

/// Orders candidates best-first for one job.
///
/// Scored entries come first by descending match score, unscored entries follow, and ties keep
/// their input order.
pub fn rank(
    job: &JobRequirement,
    entries: Vec<(CandidateProfile, Option<MatchResult>)>,
) -> Vec<RankedMatch> {
    let mut keyed: Vec<(Option<u8>, CandidateProfile, Option<MatchResult>)> = entries
        .into_iter()
        .map(|(profile, result)| (ranking_score(job, result.as_ref()), profile, result))
        .collect();

    // `sort_by` is stable, which keeps equal scores in submission order.
    keyed.sort_by(|(left, _, _), (right, _, _)| match (left, right) {
        (Some(left), Some(right)) => right.cmp(left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    keyed
        .into_iter()
        .enumerate()
        .map(|(index, (score, profile, result))| RankedMatch {
            position: score.map(|_| index + 1),
            profile,
            result,
        })
        .collect()
}
