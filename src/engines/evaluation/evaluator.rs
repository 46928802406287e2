use crate::engines::evaluation::{dataset::Dataset, estimator::Estimator, folds::KFoldPlan};
use crate::types::{FitOutcome, ParamConfig};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How a fitted candidate is scored.
///
/// The two paths are deliberately distinct: the training-score fallback
/// only applies when no fold plan was supplied, and it can overstate
/// fitness relative to the cross-validated path.
#[derive(Debug, Clone)]
pub enum EvaluationMode {
    CrossValidated(KFoldPlan),
    TrainingScore,
}

/// Scores decoded configurations against a fixed dataset.
///
/// Every evaluation clones the shared prototype, applies the
/// configuration and fits from scratch; nothing is cached between
/// calls, and the prototype and dataset are never mutated. Safe to
/// call concurrently from the evolver's worker threads.
pub struct FitnessEvaluator {
    prototype: Arc<dyn Estimator>,
    dataset: Arc<Dataset>,
    mode: EvaluationMode,
    fit_budget: Option<Duration>,
    failures: AtomicUsize,
}

impl FitnessEvaluator {
    pub fn new(
        prototype: Arc<dyn Estimator>,
        dataset: Arc<Dataset>,
        mode: EvaluationMode,
    ) -> Self {
        Self {
            prototype,
            dataset,
            mode,
            fit_budget: None,
            failures: AtomicUsize::new(0),
        }
    }

    /// Wall-clock budget per evaluation. Checked after the fit returns
    /// (a stuck fit cannot be preempted); an over-budget evaluation is
    /// treated exactly like a failed fit.
    pub fn with_fit_budget(mut self, budget: Option<Duration>) -> Self {
        self.fit_budget = budget;
        self
    }

    /// Evaluations absorbed as failures so far
    pub fn fit_failures(&self) -> usize {
        self.failures.load(Ordering::Relaxed)
    }

    /// Score one configuration. Invalid configurations come back as
    /// `FitOutcome::Failed`; this call never errors and never panics on
    /// a bad candidate, so the generational loop always moves forward.
    pub fn evaluate(&self, params: &ParamConfig) -> FitOutcome {
        let started = Instant::now();
        let mut outcome = self.try_evaluate(params);

        if let Some(budget) = self.fit_budget {
            if !outcome.is_failed() && started.elapsed() > budget {
                outcome = FitOutcome::Failed(format!(
                    "evaluation exceeded budget of {:.1}s",
                    budget.as_secs_f64()
                ));
            }
        }

        if let FitOutcome::Failed(reason) = &outcome {
            self.failures.fetch_add(1, Ordering::Relaxed);
            log::debug!("candidate rejected: {}", reason);
        }
        outcome
    }

    fn try_evaluate(&self, params: &ParamConfig) -> FitOutcome {
        let mut model = self.prototype.clone_unfitted();
        if let Err(e) = model.set_params(params) {
            return FitOutcome::Failed(e.0);
        }
        if let Err(e) = model.fit(&self.dataset) {
            return FitOutcome::Failed(e.0);
        }

        match &self.mode {
            EvaluationMode::TrainingScore => FitOutcome::Scored(model.score(&self.dataset)),
            EvaluationMode::CrossValidated(plan) => {
                let splits = match plan.split(self.dataset.n_samples()) {
                    Ok(splits) => splits,
                    Err(e) => return FitOutcome::Failed(e.to_string()),
                };

                let mut total = 0.0;
                for split in &splits {
                    let train = self.dataset.subset(&split.train);
                    let test = self.dataset.subset(&split.test);

                    let mut fold_model = self.prototype.clone_unfitted();
                    if let Err(e) = fold_model.set_params(params) {
                        return FitOutcome::Failed(e.0);
                    }
                    if let Err(e) = fold_model.fit(&train) {
                        return FitOutcome::Failed(format!(
                            "fold {}: {}",
                            split.fold_num, e.0
                        ));
                    }
                    total += fold_model.score(&test);
                }

                FitOutcome::Scored(total / splits.len() as f64)
            }
        }
    }
}
