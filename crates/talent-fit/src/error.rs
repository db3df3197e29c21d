use crate::config::ConfigError;
use crate::fit::batch::BatchError;
use crate::fit::service::FitAnalysisError;
use crate::fit::FitError;
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Json(serde_json::Error),
    Fit(FitError),
    Analysis(FitAnalysisError),
    Batch(BatchError),
    InvalidInput(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Json(err) => write!(f, "malformed json: {}", err),
            AppError::Fit(err) => write!(f, "fit error: {}", err),
            AppError::Analysis(err) => write!(f, "analysis error: {}", err),
            AppError::Batch(err) => write!(f, "batch error: {}", err),
            AppError::InvalidInput(message) => write!(f, "invalid input: {}", message),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Json(err) => Some(err),
            AppError::Fit(err) => Some(err),
            AppError::Analysis(err) => Some(err),
            AppError::Batch(err) => Some(err),
            AppError::InvalidInput(_) => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<FitError> for AppError {
    fn from(value: FitError) -> Self {
        Self::Fit(value)
    }
}

impl From<crate::fit::InvalidProfileError> for AppError {
    fn from(value: crate::fit::InvalidProfileError) -> Self {
        Self::Fit(FitError::InvalidProfile(value))
    }
}

impl From<FitAnalysisError> for AppError {
    fn from(value: FitAnalysisError) -> Self {
        Self::Analysis(value)
    }
}

impl From<BatchError> for AppError {
    fn from(value: BatchError) -> Self {
        Self::Batch(value)
    }
}
