pub mod dataset;
pub mod estimator;
pub mod evaluator;
pub mod folds;

pub use dataset::Dataset;
pub use estimator::{Estimator, EstimatorError};
pub use evaluator::{EvaluationMode, FitnessEvaluator};
pub use folds::{FoldSplit, KFoldPlan};
