use crate::engines::decoding::Chromosome;
use crate::engines::search::evolver::Objective;
use crate::error::Result;
use rand::rngs::StdRng;
use rand::Rng;

/// Elite-refinement hook applied inside the evolver after each
/// generation. Stands in for heavier exploitation methods (the
/// surrounding system plugs a Bayesian optimizer in here); the
/// contract is only that the returned candidate is at least as fit as
/// the one passed in.
pub trait LocalSearch: Send {
    fn refine(
        &self,
        chromosome: &Chromosome,
        fitness: f64,
        objective: &Objective,
        rng: &mut StdRng,
    ) -> Result<(Chromosome, f64)>;
}

/// Leaves elites untouched
pub struct NoRefinement;

impl LocalSearch for NoRefinement {
    fn refine(
        &self,
        chromosome: &Chromosome,
        fitness: f64,
        _objective: &Objective,
        _rng: &mut StdRng,
    ) -> Result<(Chromosome, f64)> {
        Ok((chromosome.clone(), fitness))
    }
}

/// Stochastic hill climb around an elite: perturb one gene at a time
/// within `radius` and keep strict improvements.
pub struct ElitePerturbation {
    pub steps: usize,
    pub radius: f64,
}

impl ElitePerturbation {
    pub fn new(steps: usize, radius: f64) -> Self {
        Self { steps, radius }
    }
}

impl LocalSearch for ElitePerturbation {
    fn refine(
        &self,
        chromosome: &Chromosome,
        fitness: f64,
        objective: &Objective,
        rng: &mut StdRng,
    ) -> Result<(Chromosome, f64)> {
        let mut best = chromosome.clone();
        let mut best_fitness = fitness;

        for _ in 0..self.steps {
            let gene_idx = rng.gen_range(0..best.len());
            let delta = (rng.gen::<f64>() * 2.0 - 1.0) * self.radius;

            let mut candidate = best.clone();
            // Genes stay in [0,1)
            candidate[gene_idx] = (candidate[gene_idx] + delta).clamp(0.0, 1.0 - f64::EPSILON);

            let candidate_fitness = objective(&candidate)?;
            if candidate_fitness > best_fitness {
                best = candidate;
                best_fitness = candidate_fitness;
            }
        }

        Ok((best, best_fitness))
    }
}
