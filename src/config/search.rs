use super::traits::ConfigSection;
use crate::error::EvotuneError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Generations to run before reporting the best candidate
    pub generations: usize,
    /// Fixed seed makes the whole run reproducible
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            generations: 10,
            seed: None,
        }
    }
}

impl ConfigSection for SearchConfig {
    fn section_name() -> &'static str {
        "search"
    }

    fn validate(&self) -> Result<(), EvotuneError> {
        if self.generations == 0 {
            return Err(EvotuneError::Configuration(
                "Generation count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
