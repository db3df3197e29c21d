use std::env;
use std::fmt;
use std::str::FromStr;

use crate::fit::{FitPolicy, PolicyError};

/// Distinguishes runtime behavior for different stages of the tool.
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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub policy: FitPolicy,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );
        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let mut policy = FitPolicy::default();
        policy.composite.disc = read_number("FIT_DISC_WEIGHT", policy.composite.disc)?;
        policy.composite.mbti = read_number("FIT_MBTI_WEIGHT", policy.composite.mbti)?;
        policy.consolidation.role = read_number("FIT_ROLE_WEIGHT", policy.consolidation.role)?;
        policy.consolidation.leader =
            read_number("FIT_LEADER_WEIGHT", policy.consolidation.leader)?;
        policy.type_match_bonus = read_number("FIT_TYPE_MATCH_BONUS", policy.type_match_bonus)?;
        policy.tiers.high = read_number("FIT_TIER_HIGH", policy.tiers.high)?;
        policy.tiers.medium = read_number("FIT_TIER_MEDIUM", policy.tiers.medium)?;
        policy.validate().map_err(ConfigError::InvalidPolicy)?;

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            policy,
        })
    }
}

fn read_number<T: FromStr>(variable: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(variable) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber {
                variable,
                value: raw,
            }),
        Err(_) => Ok(default),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber {
        variable: &'static str,
        value: String,
    },
    InvalidPolicy(PolicyError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { variable, value } => {
                write!(f, "{variable} must be numeric, got '{value}'")
            }
            ConfigError::InvalidPolicy(err) => write!(f, "fit policy is inconsistent: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidNumber { .. } => None,
            ConfigError::InvalidPolicy(err) => Some(err),
        }
    }
}
