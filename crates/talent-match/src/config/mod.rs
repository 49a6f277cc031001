use std::env;
use std::fmt;

use chrono::NaiveDate;

use crate::matching::{MatchingConfig, MatchingConfigError, RoundingDiscipline, ScoreWeights};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the matching tools.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub matching: MatchingSettings,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let defaults = ScoreWeights::default();
        let weights = ScoreWeights::new(
            weight_var("MATCH_WEIGHT_SKILLS", defaults.skills())?,
            weight_var("MATCH_WEIGHT_EXPERIENCE", defaults.experience())?,
            weight_var("MATCH_WEIGHT_EDUCATION", defaults.education())?,
            weight_var("MATCH_WEIGHT_BONUS", defaults.bonus())?,
        )?;

        let rounding = match env::var("MATCH_ROUNDING") {
            Ok(value) => {
                RoundingDiscipline::parse(&value).ok_or(ConfigError::InvalidRounding { value })?
            }
            Err(_) => RoundingDiscipline::default(),
        };

        let as_of = match env::var("MATCH_AS_OF") {
            Ok(value) if !value.trim().is_empty() => Some(
                NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
                    .map_err(|source| ConfigError::InvalidReferenceDate { value, source })?,
            ),
            _ => None,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            matching: MatchingSettings {
                weights,
                rounding,
                as_of,
            },
        })
    }

    pub fn matching_config(&self) -> MatchingConfig {
        MatchingConfig {
            weights: self.matching.weights,
            rounding: self.matching.rounding,
            ..MatchingConfig::default()
        }
    }
}

fn weight_var(name: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<f64>()
            .map_err(|_| ConfigError::InvalidWeight { name, value }),
        Err(_) => Ok(default),
    }
}

/// Scoring dials that may be tuned per deployment.
#[derive(Debug, Clone)]
pub struct MatchingSettings {
    pub weights: ScoreWeights,
    pub rounding: RoundingDiscipline,
    pub as_of: Option<NaiveDate>,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidWeight {
        name: &'static str,
        value: String,
    },
    Weights(MatchingConfigError),
    InvalidRounding {
        value: String,
    },
    InvalidReferenceDate {
        value: String,
        source: chrono::ParseError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidWeight { name, value } => {
                write!(f, "{name} must be a decimal number (found '{value}')")
            }
            ConfigError::Weights(err) => write!(f, "invalid score weights: {err}"),
            ConfigError::InvalidRounding { value } => write!(
                f,
                "MATCH_ROUNDING must be 'final' or 'per_component' (found '{value}')"
            ),
            ConfigError::InvalidReferenceDate { value, .. } => {
                write!(f, "MATCH_AS_OF must be a YYYY-MM-DD date (found '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidWeight { .. } | ConfigError::InvalidRounding { .. } => None,
            ConfigError::Weights(err) => Some(err),
            ConfigError::InvalidReferenceDate { source, .. } => Some(source),
        }
    }
}

impl From<MatchingConfigError> for ConfigError {
    fn from(value: MatchingConfigError) -> Self {
        Self::Weights(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for name in [
            "APP_ENV",
            "APP_LOG_LEVEL",
            "MATCH_WEIGHT_SKILLS",
            "MATCH_WEIGHT_EXPERIENCE",
            "MATCH_WEIGHT_EDUCATION",
            "MATCH_WEIGHT_BONUS",
            "MATCH_ROUNDING",
            "MATCH_AS_OF",
        ] {
            env::remove_var(name);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.matching.weights, ScoreWeights::default());
        assert_eq!(config.matching.rounding, RoundingDiscipline::FinalOnly);
        assert_eq!(config.matching.as_of, None);
    }

    #[test]
    fn reads_weight_overrides_and_reference_date() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "ci");
        env::set_var("MATCH_WEIGHT_SKILLS", "0.5");
        env::set_var("MATCH_WEIGHT_EXPERIENCE", "0.2");
        env::set_var("MATCH_ROUNDING", "per_component");
        env::set_var("MATCH_AS_OF", "2024-01-15");

        let config = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(config.matching.weights.skills(), 0.5);
        assert_eq!(config.matching.weights.experience(), 0.2);
        assert_eq!(config.matching.rounding, RoundingDiscipline::PerComponent);
        assert_eq!(
            config.matching.as_of,
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(config.matching_config().weights.skills(), 0.5);
    }

    #[test]
    fn rejects_weights_that_do_not_sum_to_one() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("MATCH_WEIGHT_BONUS", "0.3");

        let err = AppConfig::load().expect_err("weights sum to 1.2");
        reset_env();

        assert!(matches!(
            err,
            ConfigError::Weights(MatchingConfigError::WeightSum { .. })
        ));
    }

    #[test]
    fn rejects_malformed_values() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("MATCH_WEIGHT_SKILLS", "forty");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidWeight {
                name: "MATCH_WEIGHT_SKILLS",
                ..
            })
        ));

        reset_env();
        env::set_var("MATCH_ROUNDING", "bankers");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidRounding { .. })
        ));

        reset_env();
        env::set_var("MATCH_AS_OF", "15/01/2024");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidReferenceDate { .. })
        ));
        reset_env();
    }
}
