use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::config::{ExperienceLadder, TierScoring};
use super::domain::{Experience, ExperienceTier};

/// Accumulated work history and the tier it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceSummary {
    pub tier: ExperienceTier,
    pub total_months: u32,
}

/// Parses the date shapes the data layer hands over; anything else is treated as unknown.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.date_naive());
    }
    if let Ok(timestamp) = DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Some(timestamp.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, format) {
            return Some(timestamp.date());
        }
    }
    NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d").ok()
}

/// Whole-month difference; the day of month is deliberately ignored.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let years = i64::from(end.year()) - i64::from(start.year());
    let months = i64::from(end.month()) - i64::from(start.month());
    years * 12 + months
}

/// Months contributed by one entry. Unknown start dates and malformed end dates count as zero,
/// as do entries ending before they start.
fn entry_months(entry: &Experience, as_of: NaiveDate) -> u32 {
    let Some(start) = entry.start_date.as_deref().and_then(parse_date) else {
        return 0;
    };

    let end = if entry.is_current {
        as_of
    } else {
        match entry.end_date.as_deref() {
            None => as_of,
            Some(text) if text.trim().is_empty() => as_of,
            Some(text) => match parse_date(text) {
                Some(end) => end,
                None => return 0,
            },
        }
    };

    u32::try_from(months_between(start, end).max(0)).unwrap_or(u32::MAX)
}

pub fn derive_experience_tier(
    experiences: &[Experience],
    as_of: NaiveDate,
    ladder: &ExperienceLadder,
) -> ExperienceSummary {
    let total_months = experiences
        .iter()
        .map(|entry| entry_months(entry, as_of))
        .fold(0u32, u32::saturating_add);

    ExperienceSummary {
        tier: ladder.step_for(total_months).tier,
        total_months,
    }
}

pub fn match_experience(
    candidate: ExperienceTier,
    required: Option<ExperienceTier>,
    ladder: &ExperienceLadder,
    scoring: &TierScoring,
) -> f64 {
    scoring.score(
        ladder.rank_of(candidate),
        required.map(|tier| ladder.rank_of(tier)),
    )
}
