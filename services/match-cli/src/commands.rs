use crate::infra::{parse_date, read_json, with_reference_date};
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use talent_match::error::AppError;
use talent_match::matching::report::write_ranking_csv;
use talent_match::matching::{
    CandidateProfile, JobId, JobRequirement, MatchEngine, MatchResult, RankedMatch, UserId,
};
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Candidate profile JSON file
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Job requirement JSON file
    #[arg(long)]
    pub(crate) job: PathBuf,
    /// Measure experience up to this date (YYYY-MM-DD) instead of today
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Json,
    Csv,
}

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// Job requirement JSON file
    #[arg(long)]
    pub(crate) job: PathBuf,
    /// JSON array of candidate profiles
    #[arg(long)]
    pub(crate) candidates: PathBuf,
    /// Measure experience up to this date (YYYY-MM-DD) instead of today
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Output format for the ranking
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub(crate) format: OutputFormat,
    /// Only print the first N entries
    #[arg(long)]
    pub(crate) limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RankingEntryView<'a> {
    pub(crate) position: Option<usize>,
    pub(crate) user_id: &'a UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) result: Option<&'a MatchResult>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RankingResponse<'a> {
    pub(crate) job_id: &'a JobId,
    pub(crate) evaluated_on: NaiveDate,
    pub(crate) candidates: usize,
    pub(crate) ranking: Vec<RankingEntryView<'a>>,
}

pub(crate) fn run_score(engine: MatchEngine, args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        profile,
        job,
        as_of,
    } = args;

    let engine = with_reference_date(engine, as_of);
    let profile: CandidateProfile = read_json(&profile)?;
    let job: JobRequirement = read_json(&job)?;

    let result = engine.compute_match(&profile, &job);
    info!(
        user_id = %result.user_id.0,
        job_id = %result.job_id.0,
        match_score = result.match_score,
        "candidate scored"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &result)?;
    writeln!(out)?;
    Ok(())
}

pub(crate) fn run_rank(engine: MatchEngine, args: RankArgs) -> Result<(), AppError> {
    let RankArgs {
        job,
        candidates,
        as_of,
        format,
        limit,
    } = args;

    let engine = with_reference_date(engine, as_of);
    let job: JobRequirement = read_json(&job)?;
    let profiles: Vec<CandidateProfile> = read_json(&candidates)?;

    let ranking = engine.rank_matches(&job, &profiles);
    render_ranking(&job, &ranking, engine.reference_date(), format, limit)
}

pub(crate) fn render_ranking(
    job: &JobRequirement,
    ranking: &[RankedMatch],
    evaluated_on: NaiveDate,
    format: OutputFormat,
    limit: Option<usize>,
) -> Result<(), AppError> {
    let shown = &ranking[..limit.unwrap_or(ranking.len()).min(ranking.len())];
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Csv => write_ranking_csv(&mut out, shown)?,
        OutputFormat::Json => {
            let response = RankingResponse {
                job_id: &job.id,
                evaluated_on,
                candidates: ranking.len(),
                ranking: shown
                    .iter()
                    .map(|entry| RankingEntryView {
                        position: entry.position,
                        user_id: &entry.profile.user_id,
                        result: entry.result.as_ref(),
                    })
                    .collect(),
            };
            serde_json::to_writer_pretty(&mut out, &response)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
