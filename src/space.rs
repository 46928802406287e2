use crate::error::{EvotuneError, Result};
use serde::{Deserialize, Serialize};

/// Domain of a single hyperparameter.
///
/// The kind is fixed when the space is declared, so the decoder only
/// matches on a tag instead of inspecting value types per gene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ParamDomain {
    /// Ordered list of named choices
    Categorical(Vec<String>),
    /// Ordered list of integer choices; must hold more than two values.
    /// A two-element integer list is a continuous range and has to be
    /// declared as `Range`.
    DiscreteInt(Vec<i64>),
    /// Ordered list of boolean values
    Boolean(Vec<bool>),
    /// Continuous interval, both ends finite
    Range { low: f64, high: f64 },
}

impl ParamDomain {
    pub fn validate(&self, name: &str) -> Result<()> {
        match self {
            ParamDomain::Categorical(values) => {
                if values.is_empty() {
                    return Err(EvotuneError::InvalidDomain(format!(
                        "categorical parameter '{}' has no values",
                        name
                    )));
                }
            }
            ParamDomain::DiscreteInt(values) => {
                if values.len() <= 2 {
                    return Err(EvotuneError::InvalidDomain(format!(
                        "discrete parameter '{}' needs more than two values; declare a two-element list as a Range",
                        name
                    )));
                }
            }
            ParamDomain::Boolean(values) => {
                if values.is_empty() {
                    return Err(EvotuneError::InvalidDomain(format!(
                        "boolean parameter '{}' has no values",
                        name
                    )));
                }
            }
            ParamDomain::Range { low, high } => {
                if !low.is_finite() || !high.is_finite() {
                    return Err(EvotuneError::InvalidDomain(format!(
                        "range parameter '{}' has non-finite bounds",
                        name
                    )));
                }
                if low >= high {
                    return Err(EvotuneError::InvalidDomain(format!(
                        "range parameter '{}' requires low < high, got [{}, {}]",
                        name, low, high
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Ordered hyperparameter search space.
///
/// Declaration order is the gene order: gene `i` of every chromosome
/// always maps to the `i`-th declared parameter. The space is built
/// once at search setup and never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParamSpace {
    params: Vec<(String, ParamDomain)>,
}

impl ParamSpace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a parameter. Fails on duplicate names.
    pub fn add(&mut self, name: &str, domain: ParamDomain) -> Result<()> {
        if self.params.iter().any(|(n, _)| n == name) {
            return Err(EvotuneError::InvalidDomain(format!(
                "parameter '{}' declared twice",
                name
            )));
        }
        self.params.push((name.to_string(), domain));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ParamDomain> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, d)| d)
    }

    /// Parameters in gene order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamDomain)> {
        self.params.iter().map(|(n, d)| (n.as_str(), d))
    }

    /// Run once before any decoding happens
    pub fn validate(&self) -> Result<()> {
        if self.params.is_empty() {
            return Err(EvotuneError::InvalidDomain(
                "parameter space is empty".to_string(),
            ));
        }
        for (name, domain) in &self.params {
            domain.validate(name)?;
        }
        Ok(())
    }
}
