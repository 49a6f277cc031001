use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use talent_match::config::AppConfig;
use talent_match::error::AppError;
use talent_match::matching::MatchEngine;
use talent_match::telemetry;
use tracing::debug;

/// Loads configuration, installs tracing, and builds the engine shared by every command.
pub(crate) fn engine_from_env() -> Result<MatchEngine, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let mut engine = MatchEngine::new(config.matching_config());
    if let Some(as_of) = config.matching.as_of {
        engine = engine.with_reference_date(as_of);
    }
    debug!(?config.environment, rounding = ?config.matching.rounding, "matching engine configured");

    Ok(engine)
}

/// Applies a command-line reference date on top of the configured one.
pub(crate) fn with_reference_date(engine: MatchEngine, as_of: Option<NaiveDate>) -> MatchEngine {
    match as_of {
        Some(date) => engine.with_reference_date(date),
        None => engine,
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let file = File::open(path)?;
    let value = serde_json::from_reader(BufReader::new(file))?;
    Ok(value)
}
