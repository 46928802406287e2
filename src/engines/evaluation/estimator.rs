use crate::engines::evaluation::dataset::Dataset;
use crate::types::ParamConfig;

/// Model states an estimator rejects: an unknown or out-of-range
/// parameter, or a parameter combination the fit cannot honor.
///
/// These are per-candidate conditions, absorbed by the evaluator;
/// they never abort the search.
#[derive(Debug, Clone)]
pub struct EstimatorError(pub String);

impl std::fmt::Display for EstimatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for EstimatorError {}

/// Model-fitting collaborator boundary.
///
/// The search holds one unconfigured prototype and clones it for every
/// evaluation; implementations must never share fitted state between
/// clones.
pub trait Estimator: Send + Sync {
    /// Fresh unfitted copy of this estimator with the same defaults
    fn clone_unfitted(&self) -> Box<dyn Estimator>;

    /// Apply a decoded configuration. Rejecting a value here counts as
    /// a fit failure for the candidate, not a fatal error.
    fn set_params(&mut self, params: &ParamConfig) -> Result<(), EstimatorError>;

    fn fit(&mut self, data: &Dataset) -> Result<(), EstimatorError>;

    /// Score of the fitted model on `data` (higher is better)
    fn score(&self, data: &Dataset) -> f64;
}
