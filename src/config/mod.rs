use crate::assessment::{AssessmentKind, CatalogError};
use std::env;
use std::fmt;

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

/// Top-level configuration for the CLI.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    /// Which questionnaire to score when the caller does not say.
    pub default_assessment: AssessmentKind,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let default_assessment = match env::var("APP_ASSESSMENT") {
            Ok(value) => AssessmentKind::parse(&value)
                .map_err(|source| ConfigError::InvalidAssessment { source })?,
            Err(_) => AssessmentKind::AiReadiness,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            default_assessment,
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidAssessment { source: CatalogError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidAssessment { .. } => {
                write!(f, "APP_ASSESSMENT must name a known assessment kind")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidAssessment { source } => Some(source),
        }
    }
}
