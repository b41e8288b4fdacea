use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid factor: {0} (expected a finite value in [0, 1])")]
    InvalidFactor(f64),

    #[error("invalid multiplier: {0} (expected a finite value > 1)")]
    InvalidMultiplier(f64),

    #[error("invalid interval: {0}")]
    InvalidInterval(String),

    #[error("failed to parse backoff config: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type ModelResult<T> = Result<T, ModelError>;
