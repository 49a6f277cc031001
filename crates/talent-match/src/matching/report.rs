use std::io::Write;

use serde::Serialize;

use super::RankedMatch;

/// Flat, recruiter-facing view of one ranking entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingRow {
    pub position: Option<usize>,
    pub user_id: String,
    pub match_score: Option<u8>,
    pub skills_score: Option<f64>,
    pub experience_score: Option<f64>,
    pub education_score: Option<f64>,
    pub bonus_score: Option<f64>,
    pub matched_skills: String,
    pub missing_skills: String,
}

impl From<&RankedMatch> for RankingRow {
    fn from(entry: &RankedMatch) -> Self {
        let result = entry.position.and(entry.result.as_ref());
        Self {
            position: entry.position,
            user_id: entry.profile.user_id.0.clone(),
            match_score: result.map(|result| result.match_score),
            skills_score: result.map(|result| round_tenths(result.skills_score)),
            experience_score: result.map(|result| round_tenths(result.experience_score)),
            education_score: result.map(|result| round_tenths(result.education_score)),
            bonus_score: result.map(|result| round_tenths(result.bonus_score)),
            matched_skills: result
                .map(|result| result.matched_skills.join("; "))
                .unwrap_or_default(),
            missing_skills: result
                .map(|result| result.missing_skills.join("; "))
                .unwrap_or_default(),
        }
    }
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn ranking_rows(ranking: &[RankedMatch]) -> Vec<RankingRow> {
    ranking.iter().map(RankingRow::from).collect()
}

/// Writes the ranking as CSV with a header row. Unscored entries leave score columns empty.
pub fn write_ranking_csv<W: Write>(writer: W, ranking: &[RankedMatch]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in ranking_rows(ranking) {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
