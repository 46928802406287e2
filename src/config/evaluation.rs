use super::traits::ConfigSection;
use crate::error::EvotuneError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Cross-validation folds. None falls back to scoring on the
    /// training set, a distinct and more optimistic evaluation mode.
    pub n_folds: Option<usize>,
    /// Wall-clock budget per evaluation in seconds; over-budget
    /// evaluations count as failed fits
    pub fit_timeout_secs: Option<u64>,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            n_folds: Some(5),
            fit_timeout_secs: None,
        }
    }
}

impl ConfigSection for EvaluationConfig {
    fn section_name() -> &'static str {
        "evaluation"
    }

    fn validate(&self) -> Result<(), EvotuneError> {
        if let Some(n_folds) = self.n_folds {
            if n_folds < 2 {
                return Err(EvotuneError::Configuration(
                    "Cross-validation requires at least 2 folds".to_string(),
                ));
            }
        }
        if self.fit_timeout_secs == Some(0) {
            return Err(EvotuneError::Configuration(
                "Fit timeout must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
