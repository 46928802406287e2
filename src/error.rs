use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvotuneError {
    #[error("Chromosome shape mismatch: expected {expected} genes, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Invalid parameter domain: {0}")]
    InvalidDomain(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Evolver error: {0}")]
    Evolver(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EvotuneError>;
