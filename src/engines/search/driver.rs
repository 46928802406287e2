use crate::engines::decoding::Decoder;
use crate::engines::search::evolver::Evolver;
use crate::engines::search::progress::ProgressCallback;
use crate::error::{EvotuneError, Result};
use crate::types::BestRecord;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Cooperative cancellation handle, checked between generations only.
/// A partially evolved generation is never observed.
#[derive(Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// What the generational loop hands back to the caller
#[derive(Debug, Clone)]
pub struct DriverReport {
    pub best: BestRecord,
    pub generations_run: usize,
    pub total_time_seconds: f64,
    pub cancelled: bool,
}

/// Drives the evolver for a bounded number of generations and owns the
/// best-so-far record.
///
/// The record is the only state mutated across generations, and it is
/// only touched here, at the generation barrier, after the evolver has
/// fully scored its populations. A driver is single-shot: `run`
/// consumes it, and a fresh search needs a fresh evolver and driver.
pub struct SearchDriver<E: Evolver> {
    evolver: E,
    decoder: Decoder,
    generations: usize,
    cancel: Option<CancelToken>,
}

impl<E: Evolver> SearchDriver<E> {
    pub fn new(evolver: E, decoder: Decoder, generations: usize) -> Self {
        Self {
            evolver,
            decoder,
            generations,
            cancel: None,
        }
    }

    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Run the search to completion (or cancellation).
    ///
    /// Fatal conditions — a decode shape mismatch or the evolver
    /// reporting an unrecoverable state — abort with an error and no
    /// partial report. Per-candidate fit failures never reach this
    /// layer; they arrive pre-flattened into the fitness scores.
    pub fn run<C: ProgressCallback>(mut self, mut callback: C) -> Result<DriverReport> {
        let started = Instant::now();

        self.evolver.initialize()?;

        let mut best: Option<BestRecord> = None;
        let mut generations_run = 0;
        let mut cancelled = false;

        for generation in 0..self.generations {
            if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
                log::info!("search cancelled after {} generations", generations_run);
                cancelled = true;
                break;
            }

            callback.on_generation_start(generation);

            self.evolver.evolve_one_generation()?;

            let mut diversity_sum = 0.0;
            let num_populations = self.evolver.num_populations();
            for pop_idx in 0..num_populations {
                let diversity = self.evolver.population_diversity(pop_idx)?;
                log::debug!(
                    "generation {}: population {} diversity = {:.4}",
                    generation + 1,
                    pop_idx,
                    diversity
                );
                diversity_sum += diversity;
            }
            let mean_diversity = if num_populations > 0 {
                diversity_sum / num_populations as f64
            } else {
                0.0
            };

            let generation_best = self.evolver.best_fitness()?;

            // Strict improvement only; ties keep the earlier discovery
            if best.as_ref().map_or(true, |b| generation_best > b.fitness) {
                let chromosome = self.evolver.best_chromosome()?;
                let params = self.decoder.decode(&chromosome)?;
                log::debug!(
                    "generation {}: new best fitness {:.4}",
                    generation + 1,
                    generation_best
                );
                best = Some(BestRecord {
                    chromosome,
                    params,
                    fitness: generation_best,
                    found_at: Utc::now(),
                    generation,
                });
            }

            generations_run += 1;
            callback.on_generation_complete(generation, generation_best, mean_diversity);
        }

        let best = best.ok_or_else(|| {
            EvotuneError::Evolver("search ended before any generation completed".to_string())
        })?;

        Ok(DriverReport {
            best,
            generations_run,
            total_time_seconds: started.elapsed().as_secs_f64(),
            cancelled,
        })
    }
}
