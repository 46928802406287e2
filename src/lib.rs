//! Genetic-algorithm hyperparameter search.
//!
//! A candidate is a chromosome of reals in [0,1), one gene per
//! declared parameter. Each generation the evolver breeds and scores a
//! population; scoring decodes the chromosome into a concrete
//! configuration and cross-validates a freshly fitted estimator. The
//! driver tracks the best candidate across generations and reports it
//! with its score and elapsed time.

pub mod config;
pub mod engines;
pub mod error;
pub mod models;
pub mod space;
pub mod tuner;
pub mod types;

pub use engines::decoding::{Chromosome, Decoder};
pub use engines::evaluation::{Dataset, Estimator, EstimatorError, FitnessEvaluator};
pub use engines::search::{CancelToken, Evolver, SearchDriver};
pub use error::{EvotuneError, Result};
pub use space::{ParamDomain, ParamSpace};
pub use tuner::HyperSearch;
pub use types::{FitOutcome, ParamConfig, ParamValue, SearchResult, SENTINEL_FITNESS};
