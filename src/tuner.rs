use crate::config::AppConfig;
use crate::engines::decoding::{Chromosome, Decoder};
use crate::engines::evaluation::{
    Dataset, EvaluationMode, Estimator, FitnessEvaluator, KFoldPlan,
};
use crate::engines::search::{
    CancelToken, ElitePerturbation, LocalSearch, LogProgress, NoRefinement, Objective,
    RandomKeyGa, SearchDriver,
};
use crate::error::Result;
use crate::space::ParamSpace;
use crate::types::SearchResult;
use std::sync::Arc;
use std::time::Duration;

/// Top-level hyperparameter search.
///
/// Wires the parameter space, decoder, fitness evaluator and evolver
/// together and runs the generational loop. Single-shot: `fit`
/// consumes the search; a new run needs a new instance.
pub struct HyperSearch {
    evaluator: Arc<FitnessEvaluator>,
    decoder: Decoder,
    config: AppConfig,
    cancel: Option<CancelToken>,
}

impl HyperSearch {
    /// Validates the space and configuration up front; nothing is
    /// decoded or fitted before both pass.
    pub fn new(
        estimator: Arc<dyn Estimator>,
        space: ParamSpace,
        dataset: Dataset,
        config: AppConfig,
    ) -> Result<Self> {
        space.validate()?;
        config.validate()?;

        let mode = match config.evaluation.n_folds {
            Some(n_folds) => EvaluationMode::CrossValidated(KFoldPlan::new(n_folds)?),
            None => EvaluationMode::TrainingScore,
        };

        let evaluator = FitnessEvaluator::new(estimator, Arc::new(dataset), mode)
            .with_fit_budget(config.evaluation.fit_timeout_secs.map(Duration::from_secs));

        Ok(Self {
            evaluator: Arc::new(evaluator),
            decoder: Decoder::new(space),
            config,
            cancel: None,
        })
    }

    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Run the full search and report the best configuration found.
    ///
    /// A best score at the sentinel floor means no sampled
    /// configuration ever fitted successfully.
    pub fn fit(self) -> Result<SearchResult> {
        let decoder = self.decoder.clone();
        let evaluator = Arc::clone(&self.evaluator);
        let objective: Arc<Objective> = Arc::new(move |chromosome: &Chromosome| {
            let params = decoder.decode(chromosome)?;
            Ok(evaluator.evaluate(&params).fitness())
        });

        let local_search: Box<dyn LocalSearch> = if self.config.population.local_search_steps > 0 {
            Box::new(ElitePerturbation::new(
                self.config.population.local_search_steps,
                self.config.population.local_search_radius,
            ))
        } else {
            Box::new(NoRefinement)
        };

        let evolver = RandomKeyGa::new(
            self.config.population.clone(),
            self.decoder.chromosome_len(),
            objective,
            local_search,
            self.config.search.seed,
        );

        let mut driver = SearchDriver::new(evolver, self.decoder, self.config.search.generations);
        if let Some(token) = self.cancel {
            driver = driver.with_cancel_token(token);
        }

        let report = driver.run(LogProgress)?;

        log::info!(
            "search finished: best score {:.4} after {} generations in {:.2}s",
            report.best.fitness,
            report.generations_run,
            report.total_time_seconds
        );

        Ok(SearchResult {
            best_params: report.best.params,
            best_score: report.best.fitness,
            best_chromosome: report.best.chromosome,
            total_time_seconds: report.total_time_seconds,
            generations_run: report.generations_run,
            fit_failures: self.evaluator.fit_failures(),
            cancelled: report.cancelled,
        })
    }
}
