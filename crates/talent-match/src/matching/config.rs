use serde::{Deserialize, Serialize};

use super::domain::{EducationTier, ExperienceTier};
use super::scoring::ScoreWeights;

/// Validation errors raised while assembling matching configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatchingConfigError {
    #[error("weight for {factor} must be a finite, non-negative number (found {value})")]
    InvalidWeight { factor: &'static str, value: f64 },
    #[error("score weights must sum to 1.0 (found {sum:.6})")]
    WeightSum { sum: f64 },
    #[error("experience ladder must contain at least one step")]
    EmptyLadder,
    #[error("experience ladder must start at 0 months and ascend in months and rank")]
    UnorderedLadder,
    #[error("experience ladder has no step for tier '{}'", .tier.label())]
    MissingExperienceTier { tier: ExperienceTier },
    #[error("education hierarchy has no level for tier '{}'", .tier.label())]
    MissingEducationTier { tier: EducationTier },
    #[error("education ranks must be positive and ascend from bac to doctorat")]
    UnorderedHierarchy,
    #[error("tier score '{field}' must be a finite number between 0 and 100 (found {value})")]
    InvalidTierScore { field: &'static str, value: f64 },
    #[error("education hierarchy keyword must not be blank")]
    BlankKeyword,
}

/// Whether sub-scores are rounded before weighting or only the combined value is rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingDiscipline {
    #[default]
    FinalOnly,
    PerComponent,
}

impl RoundingDiscipline {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "final" | "final_only" => Some(Self::FinalOnly),
            "per_component" | "component" => Some(Self::PerComponent),
            _ => None,
        }
    }
}

/// One rung of the experience ladder: candidates with at least `min_months` reach `tier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceStep {
    pub tier: ExperienceTier,
    pub min_months: u32,
    pub rank: u8,
}

/// Ordered month thresholds mapping accumulated experience to a tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ExperienceStep>", into = "Vec<ExperienceStep>")]
pub struct ExperienceLadder {
    steps: Vec<ExperienceStep>,
}

impl ExperienceLadder {
    pub fn new(steps: Vec<ExperienceStep>) -> Result<Self, MatchingConfigError> {
        let first = steps.first().ok_or(MatchingConfigError::EmptyLadder)?;
        if first.min_months != 0 {
            return Err(MatchingConfigError::UnorderedLadder);
        }
        let ascending = steps
            .windows(2)
            .all(|pair| pair[0].min_months < pair[1].min_months && pair[0].rank < pair[1].rank);
        if first.rank == 0 || !ascending {
            return Err(MatchingConfigError::UnorderedLadder);
        }
        // `rank_of` falls back to 0 for a tier without a step.
        if let Some(tier) = ExperienceTier::ALL
            .into_iter()
            .find(|tier| !steps.iter().any(|step| step.tier == *tier))
        {
            return Err(MatchingConfigError::MissingExperienceTier { tier });
        }
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[ExperienceStep] {
        &self.steps
    }

    /// Highest step whose threshold is reached. Steps are ascending, so this never decreases as
    /// `months` grows.
    pub fn step_for(&self, months: u32) -> ExperienceStep {
        self.steps
            .iter()
            .rev()
            .find(|step| months >= step.min_months)
            .copied()
            .unwrap_or_else(|| self.steps[0])
    }

    pub fn rank_of(&self, tier: ExperienceTier) -> u8 {
        self.steps
            .iter()
            .find(|step| step.tier == tier)
            .map(|step| step.rank)
            .unwrap_or(0)
    }
}

impl TryFrom<Vec<ExperienceStep>> for ExperienceLadder {
    type Error = MatchingConfigError;

    fn try_from(steps: Vec<ExperienceStep>) -> Result<Self, Self::Error> {
        Self::new(steps)
    }
}

impl From<ExperienceLadder> for Vec<ExperienceStep> {
    fn from(ladder: ExperienceLadder) -> Self {
        ladder.steps
    }
}

impl Default for ExperienceLadder {
    fn default() -> Self {
        Self {
            steps: vec![
                ExperienceStep {
                    tier: ExperienceTier::Junior,
                    min_months: 0,
                    rank: 1,
                },
                ExperienceStep {
                    tier: ExperienceTier::Mid,
                    min_months: 12,
                    rank: 2,
                },
                ExperienceStep {
                    tier: ExperienceTier::Senior,
                    min_months: 36,
                    rank: 3,
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationLevel {
    pub tier: EducationTier,
    pub rank: u8,
}

/// Keyword scanned for in free-text degree fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationKeyword {
    pub keyword: String,
    pub tier: EducationTier,
}

/// Rank table for degree tiers plus the ordered keyword table used to recognise them.
///
/// Ranks only need to be ordered; the default table leaves 4 unassigned between `bac+3` and
/// `bac+5` and that gap is kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEducationHierarchy")]
pub struct EducationHierarchy {
    levels: Vec<EducationLevel>,
    keywords: Vec<EducationKeyword>,
}

#[derive(Deserialize)]
struct RawEducationHierarchy {
    levels: Vec<EducationLevel>,
    keywords: Vec<EducationKeyword>,
}

impl TryFrom<RawEducationHierarchy> for EducationHierarchy {
    type Error = MatchingConfigError;

    fn try_from(raw: RawEducationHierarchy) -> Result<Self, Self::Error> {
        Self::new(raw.levels, raw.keywords)
    }
}

impl EducationHierarchy {
    pub fn new(
        levels: Vec<EducationLevel>,
        keywords: Vec<EducationKeyword>,
    ) -> Result<Self, MatchingConfigError> {
        let mut previous_rank = 0;
        for tier in EducationTier::ALL {
            let rank = levels
                .iter()
                .find(|level| level.tier == tier)
                .map(|level| level.rank)
                .ok_or(MatchingConfigError::MissingEducationTier { tier })?;
            if rank <= previous_rank {
                return Err(MatchingConfigError::UnorderedHierarchy);
            }
            previous_rank = rank;
        }

        let mut normalized = Vec::with_capacity(keywords.len());
        for entry in keywords {
            let keyword = entry.keyword.trim().to_lowercase();
            if keyword.is_empty() {
                return Err(MatchingConfigError::BlankKeyword);
            }
            normalized.push(EducationKeyword {
                keyword,
                tier: entry.tier,
            });
        }

        Ok(Self {
            levels,
            keywords: normalized,
        })
    }

    pub fn keywords(&self) -> &[EducationKeyword] {
        &self.keywords
    }

    pub fn rank_of(&self, tier: EducationTier) -> u8 {
        self.levels
            .iter()
            .find(|level| level.tier == tier)
            .map(|level| level.rank)
            .unwrap_or(0)
    }

    /// Highest tier whose rank does not exceed `rank`; `None` for rank 0.
    pub fn tier_for_rank(&self, rank: u8) -> Option<EducationTier> {
        self.levels
            .iter()
            .filter(|level| level.rank > 0 && level.rank <= rank)
            .max_by_key(|level| level.rank)
            .map(|level| level.tier)
    }

    /// Highest rank among keywords contained in `text` (compared lowercase), 0 when none match.
    pub fn scan(&self, text: &str) -> u8 {
        let haystack = text.to_lowercase();
        self.keywords
            .iter()
            .filter(|entry| haystack.contains(entry.keyword.as_str()))
            .map(|entry| self.rank_of(entry.tier))
            .max()
            .unwrap_or(0)
    }
}

impl Default for EducationHierarchy {
    fn default() -> Self {
        let levels = vec![
            EducationLevel {
                tier: EducationTier::Bac,
                rank: 1,
            },
            EducationLevel {
                tier: EducationTier::Bac2,
                rank: 2,
            },
            EducationLevel {
                tier: EducationTier::Bac3,
                rank: 3,
            },
            EducationLevel {
                tier: EducationTier::Bac5,
                rank: 5,
            },
            EducationLevel {
                tier: EducationTier::Doctorat,
                rank: 6,
            },
        ];
        let keywords = [
            ("doctorat", EducationTier::Doctorat),
            ("phd", EducationTier::Doctorat),
            ("master", EducationTier::Bac5),
            ("bac+5", EducationTier::Bac5),
            ("licence", EducationTier::Bac3),
            ("bac+3", EducationTier::Bac3),
            ("bts", EducationTier::Bac2),
            ("dut", EducationTier::Bac2),
            ("bac+2", EducationTier::Bac2),
            ("bac", EducationTier::Bac),
        ]
        .into_iter()
        .map(|(keyword, tier)| EducationKeyword {
            keyword: keyword.to_string(),
            tier,
        })
        .collect();

        Self { levels, keywords }
    }
}

/// Scores awarded by the tiered comparison shared by experience and education. Every value lies
/// in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTierScoring")]
pub struct TierScoring {
    unconstrained: f64,
    met: f64,
    one_below: f64,
    below: f64,
}

#[derive(Deserialize)]
struct RawTierScoring {
    unconstrained: f64,
    met: f64,
    one_below: f64,
    below: f64,
}

impl TryFrom<RawTierScoring> for TierScoring {
    type Error = MatchingConfigError;

    fn try_from(raw: RawTierScoring) -> Result<Self, Self::Error> {
        Self::new(raw.unconstrained, raw.met, raw.one_below, raw.below)
    }
}

impl TierScoring {
    pub fn new(
        unconstrained: f64,
        met: f64,
        one_below: f64,
        below: f64,
    ) -> Result<Self, MatchingConfigError> {
        for (field, value) in [
            ("unconstrained", unconstrained),
            ("met", met),
            ("one_below", one_below),
            ("below", below),
        ] {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(MatchingConfigError::InvalidTierScore { field, value });
            }
        }
        Ok(Self {
            unconstrained,
            met,
            one_below,
            below,
        })
    }

    pub fn unconstrained(&self) -> f64 {
        self.unconstrained
    }

    pub fn met(&self) -> f64 {
        self.met
    }

    pub fn one_below(&self) -> f64 {
        self.one_below
    }

    pub fn below(&self) -> f64 {
        self.below
    }

    pub fn score(&self, candidate_rank: u8, required_rank: Option<u8>) -> f64 {
        match required_rank {
            None => self.unconstrained,
            Some(required) if candidate_rank >= required => self.met,
            Some(required) if candidate_rank.saturating_add(1) == required => self.one_below,
            Some(_) => self.below,
        }
    }
}

impl Default for TierScoring {
    fn default() -> Self {
        Self {
            unconstrained: 100.0,
            met: 100.0,
            one_below: 70.0,
            below: 40.0,
        }
    }
}

/// Caps and thresholds for the badge/test bonus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BonusPolicy {
    pub badge_cap: u32,
    pub test_cap: u32,
    pub passing_test_score: f64,
    pub points_per_item: f64,
}

impl Default for BonusPolicy {
    fn default() -> Self {
        Self {
            badge_cap: 5,
            test_cap: 5,
            passing_test_score: 70.0,
            points_per_item: 10.0,
        }
    }
}

/// Immutable configuration consumed by every analyzer of the matching engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub weights: ScoreWeights,
    pub rounding: RoundingDiscipline,
    pub experience: ExperienceLadder,
    pub education: EducationHierarchy,
    pub tiers: TierScoring,
    pub bonus: BonusPolicy,
}
