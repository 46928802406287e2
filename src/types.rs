use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Concrete value of a single hyperparameter after decoding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Float(f64),
}

impl ParamValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(v) => Some(*v),
            ParamValue::Float(v) => Some(*v as i64),
            ParamValue::Str(_) => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            ParamValue::Float(v) => Some(*v),
            ParamValue::Int(v) => Some(*v as f64),
            ParamValue::Str(_) => None,
        }
    }
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Str(s) => write!(f, "{}", s),
            ParamValue::Int(v) => write!(f, "{}", v),
            ParamValue::Float(v) => write!(f, "{}", v),
        }
    }
}

/// Decoded hyperparameter configuration, one entry per declared parameter.
/// Produced fresh by each decode call and owned by the caller.
pub type ParamConfig = HashMap<String, ParamValue>;

/// Outcome of a single fitness evaluation.
///
/// A configuration the estimator rejects is a `Failed`, not an error:
/// the search must keep moving past bad individuals. The numeric floor
/// only appears when the outcome is collapsed for the evolver via
/// [`FitOutcome::fitness`], so "genuinely scored 0.0" and "failed to
/// fit" stay distinguishable everywhere else.
#[derive(Debug, Clone, PartialEq)]
pub enum FitOutcome {
    Scored(f64),
    Failed(String),
}

/// Fitness assigned to configurations that never produce a fitted model
pub const SENTINEL_FITNESS: f64 = 0.0;

impl FitOutcome {
    /// Collapse to the evolver-facing scalar. Never NaN.
    pub fn fitness(&self) -> f64 {
        match self {
            FitOutcome::Scored(s) if s.is_nan() => SENTINEL_FITNESS,
            FitOutcome::Scored(s) => *s,
            FitOutcome::Failed(_) => SENTINEL_FITNESS,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FitOutcome::Failed(_))
    }
}

/// Best candidate discovered so far: chromosome snapshot, its decoding,
/// the fitness that earned it the slot, and when it was found.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestRecord {
    pub chromosome: Vec<f64>,
    pub params: ParamConfig,
    pub fitness: f64,
    pub found_at: DateTime<Utc>,
    pub generation: usize,
}

/// Final payload of a completed search.
///
/// A `best_score` equal to the sentinel floor means no sampled
/// configuration ever produced a fitted model; callers must read it as
/// "no viable configuration found", not as a success at 0.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub best_params: ParamConfig,
    pub best_score: f64,
    pub best_chromosome: Vec<f64>,
    pub total_time_seconds: f64,
    pub generations_run: usize,
    pub fit_failures: usize,
    pub cancelled: bool,
}
