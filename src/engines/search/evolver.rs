use crate::engines::decoding::Chromosome;
use crate::error::Result;

/// Objective evaluated by the evolver for every candidate chromosome.
/// Errors are construction bugs (e.g. a shape mismatch) and abort the
/// run; per-candidate fit failures arrive as the sentinel floor, not
/// as errors.
pub type Objective = dyn Fn(&Chromosome) -> Result<f64> + Send + Sync;

/// Narrow boundary to the evolutionary engine.
///
/// The driver only needs these operations, so it can be exercised
/// against a scripted stub just as well as the real GA.
pub trait Evolver {
    /// Build and score the starting population(s). First call only.
    fn initialize(&mut self) -> Result<()>;

    /// Advance every sub-population by one generation. Returns only
    /// once the whole generation is scored; the caller may rely on
    /// that barrier.
    fn evolve_one_generation(&mut self) -> Result<()>;

    /// Best fitness across all sub-populations
    fn best_fitness(&self) -> Result<f64>;

    /// Chromosome holding the best fitness
    fn best_chromosome(&self) -> Result<Chromosome>;

    fn num_populations(&self) -> usize;

    /// Diagnostic spread measure for one sub-population. Observability
    /// only; never feeds back into control flow at the driver level.
    fn population_diversity(&self, pop_idx: usize) -> Result<f64>;
}
