use serde::{Deserialize, Serialize};

use super::config::{MatchingConfigError, RoundingDiscipline};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Relative weight of each factor in the final match score. Validated on construction and never
/// renormalized afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWeights")]
pub struct ScoreWeights {
    skills: f64,
    experience: f64,
    education: f64,
    bonus: f64,
}

#[derive(Deserialize)]
struct RawWeights {
    skills: f64,
    experience: f64,
    education: f64,
    bonus: f64,
}

impl TryFrom<RawWeights> for ScoreWeights {
    type Error = MatchingConfigError;

    fn try_from(raw: RawWeights) -> Result<Self, Self::Error> {
        Self::new(raw.skills, raw.experience, raw.education, raw.bonus)
    }
}

impl ScoreWeights {
    pub const DEFAULT: ScoreWeights = ScoreWeights {
        skills: 0.4,
        experience: 0.3,
        education: 0.2,
        bonus: 0.1,
    };

    pub fn new(
        skills: f64,
        experience: f64,
        education: f64,
        bonus: f64,
    ) -> Result<Self, MatchingConfigError> {
        for (factor, value) in [
            ("skills", skills),
            ("experience", experience),
            ("education", education),
            ("bonus", bonus),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(MatchingConfigError::InvalidWeight { factor, value });
            }
        }

        let weights = Self {
            skills,
            experience,
            education,
            bonus,
        };
        let sum = weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(MatchingConfigError::WeightSum { sum });
        }
        Ok(weights)
    }

    pub fn skills(&self) -> f64 {
        self.skills
    }

    pub fn experience(&self) -> f64 {
        self.experience
    }

    pub fn education(&self) -> f64 {
        self.education
    }

    pub fn bonus(&self) -> f64 {
        self.bonus
    }

    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.education + self.bonus
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The four factor scores, each on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub bonus: f64,
}

impl SubScores {
    /// The values that actually enter the weighted sum under `rounding`.
    pub fn for_discipline(self, rounding: RoundingDiscipline) -> Self {
        match rounding {
            RoundingDiscipline::FinalOnly => self,
            RoundingDiscipline::PerComponent => Self {
                skills: self.skills.round(),
                experience: self.experience.round(),
                education: self.education.round(),
                bonus: self.bonus.round(),
            },
        }
    }
}

/// Weighted sum before the final rounding step.
pub fn weighted_total(scores: &SubScores, weights: &ScoreWeights) -> f64 {
    scores.skills * weights.skills
        + scores.experience * weights.experience
        + scores.education * weights.education
        + scores.bonus * weights.bonus
}

/// Combines the factor scores into an integral match score in `[0, 100]`.
pub fn aggregate(scores: &SubScores, weights: &ScoreWeights, rounding: RoundingDiscipline) -> u8 {
    let scores = scores.for_discipline(rounding);
    let total = weighted_total(&scores, weights);
    if !total.is_finite() {
        return 0;
    }
    total.round().clamp(0.0, 100.0) as u8
}
