use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("coordinate out of range: lon {lon}, lat {lat}")]
    CoordinateOutOfRange { lon: f64, lat: f64 },

    #[error("polyline needs at least 2 points, got {0}")]
    TooFewPoints(usize),

    #[error("sample count must be at least 1, got {0}")]
    InvalidSampleCount(usize),
}

/// Errors raised while loading [`crate::AppConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
