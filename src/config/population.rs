use super::traits::ConfigSection;
use crate::error::EvotuneError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationConfig {
    pub population_size: usize,
    /// Independent sub-populations evolved side by side
    pub num_populations: usize,
    /// Share of each population carried over unchanged
    pub elite_fraction: f64,
    /// Share of each population replaced by fresh random chromosomes
    pub mutant_fraction: f64,
    /// Probability that an offspring gene comes from the elite parent
    pub elite_inherit_prob: f64,
    /// Local-search steps per elite per generation; 0 disables
    pub local_search_steps: usize,
    /// Gene radius for elite local-search perturbations
    pub local_search_radius: f64,
    /// Reseed non-elites when a population's diversity drops below this
    pub diversity_restart_threshold: Option<f64>,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            num_populations: 2,
            elite_fraction: 0.2,
            mutant_fraction: 0.15,
            elite_inherit_prob: 0.7,
            local_search_steps: 3,
            local_search_radius: 0.1,
            diversity_restart_threshold: None,
        }
    }
}

impl ConfigSection for PopulationConfig {
    fn section_name() -> &'static str {
        "population"
    }

    fn validate(&self) -> Result<(), EvotuneError> {
        if self.population_size < 10 {
            return Err(EvotuneError::Configuration(
                "Population size must be at least 10".to_string(),
            ));
        }
        if self.num_populations == 0 {
            return Err(EvotuneError::Configuration(
                "At least one population is required".to_string(),
            ));
        }
        if self.elite_fraction <= 0.0 || self.elite_fraction >= 1.0 {
            return Err(EvotuneError::Configuration(
                "Elite fraction must be between 0 and 1".to_string(),
            ));
        }
        if self.mutant_fraction < 0.0 || self.mutant_fraction >= 1.0 {
            return Err(EvotuneError::Configuration(
                "Mutant fraction must be between 0 and 1".to_string(),
            ));
        }
        if self.elite_fraction + self.mutant_fraction >= 1.0 {
            return Err(EvotuneError::Configuration(
                "Elite and mutant fractions must leave room for offspring".to_string(),
            ));
        }
        if self.elite_inherit_prob <= 0.0 || self.elite_inherit_prob >= 1.0 {
            return Err(EvotuneError::Configuration(
                "Elite inherit probability must be between 0 and 1".to_string(),
            ));
        }
        if let Some(threshold) = self.diversity_restart_threshold {
            if threshold <= 0.0 {
                return Err(EvotuneError::Configuration(
                    "Diversity restart threshold must be positive".to_string(),
                ));
            }
        }
        Ok(())
    }
}
