use crate::config::population::PopulationConfig;
use crate::engines::decoding::Chromosome;
use crate::engines::search::evolver::{Evolver, Objective};
use crate::engines::search::local_search::LocalSearch;
use crate::error::{EvotuneError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::sync::Arc;

#[derive(Debug, Clone)]
struct Individual {
    chromosome: Chromosome,
    fitness: f64,
}

/// One sub-population, kept sorted by descending fitness
struct Population {
    members: Vec<Individual>,
}

impl Population {
    fn sort(&mut self) {
        self.members.sort_by(|a, b| {
            b.fitness
                .partial_cmp(&a.fitness)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    fn best(&self) -> Option<&Individual> {
        self.members.first()
    }
}

/// Biased random-key genetic algorithm over chromosomes in [0,1)^n.
///
/// Each sub-population is partitioned into an elite set, a mutant set
/// of fresh random chromosomes, and offspring bred by parameterized
/// uniform crossover: every gene comes from the elite parent with
/// probability `elite_inherit_prob`. Newly bred candidates are scored
/// in parallel across the population; `evolve_one_generation` returns
/// only once all of them are scored.
pub struct RandomKeyGa {
    config: PopulationConfig,
    chromosome_len: usize,
    objective: Arc<Objective>,
    local_search: Box<dyn LocalSearch>,
    populations: Vec<Population>,
    rng: StdRng,
    initialized: bool,
}

impl RandomKeyGa {
    pub fn new(
        config: PopulationConfig,
        chromosome_len: usize,
        objective: Arc<Objective>,
        local_search: Box<dyn LocalSearch>,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            chromosome_len,
            objective,
            local_search,
            populations: Vec::new(),
            rng,
            initialized: false,
        }
    }

    fn elite_count(&self) -> usize {
        ((self.config.population_size as f64 * self.config.elite_fraction) as usize).max(1)
    }

    fn mutant_count(&self) -> usize {
        (self.config.population_size as f64 * self.config.mutant_fraction) as usize
    }

    fn random_chromosome(&mut self) -> Chromosome {
        (0..self.chromosome_len)
            .map(|_| self.rng.gen::<f64>())
            .collect()
    }

    /// Score a batch of chromosomes in parallel. Objective errors
    /// (shape bugs) propagate and abort the run.
    fn score_batch(&self, chromosomes: Vec<Chromosome>) -> Result<Vec<Individual>> {
        let objective = Arc::clone(&self.objective);
        chromosomes
            .into_par_iter()
            .map(|chromosome| {
                let fitness = (objective.as_ref())(&chromosome)?;
                Ok(Individual {
                    chromosome,
                    fitness,
                })
            })
            .collect()
    }

    fn diversity_of(population: &Population, chromosome_len: usize) -> f64 {
        let size = population.members.len();
        if size == 0 || chromosome_len == 0 {
            return 0.0;
        }

        let mut means = vec![0.0; chromosome_len];
        for member in &population.members {
            for (mean, gene) in means.iter_mut().zip(&member.chromosome) {
                *mean += gene;
            }
        }
        for mean in &mut means {
            *mean /= size as f64;
        }

        let mut total_variance = 0.0;
        for member in &population.members {
            for (mean, gene) in means.iter().zip(&member.chromosome) {
                let diff = gene - mean;
                total_variance += diff * diff / size as f64;
            }
        }

        (total_variance / chromosome_len as f64).sqrt()
    }

    /// Replace everything below the elite set with fresh randoms when
    /// the population has collapsed onto its elites
    fn maybe_restart(&mut self, pop_idx: usize) -> Result<()> {
        let Some(threshold) = self.config.diversity_restart_threshold else {
            return Ok(());
        };

        let diversity = Self::diversity_of(&self.populations[pop_idx], self.chromosome_len);
        if diversity >= threshold {
            return Ok(());
        }

        log::debug!(
            "population {}: diversity {:.4} below restart threshold {:.4}, reseeding non-elites",
            pop_idx,
            diversity,
            threshold
        );

        let elite_count = self.elite_count();
        let refill = self.config.population_size.saturating_sub(elite_count);
        let fresh: Vec<Chromosome> = (0..refill).map(|_| self.random_chromosome()).collect();
        let mut scored = self.score_batch(fresh)?;

        let population = &mut self.populations[pop_idx];
        population.members.truncate(elite_count);
        population.members.append(&mut scored);
        population.sort();
        Ok(())
    }
}

impl Evolver for RandomKeyGa {
    fn initialize(&mut self) -> Result<()> {
        if self.initialized {
            return Ok(());
        }

        for _ in 0..self.config.num_populations {
            let chromosomes: Vec<Chromosome> = (0..self.config.population_size)
                .map(|_| self.random_chromosome())
                .collect();
            let members = self.score_batch(chromosomes)?;
            let mut population = Population { members };
            population.sort();
            self.populations.push(population);
        }

        self.initialized = true;
        Ok(())
    }

    fn evolve_one_generation(&mut self) -> Result<()> {
        if !self.initialized {
            return Err(EvotuneError::Evolver(
                "evolve called before initialize".to_string(),
            ));
        }

        for pop_idx in 0..self.populations.len() {
            if self.populations[pop_idx].members.is_empty() {
                return Err(EvotuneError::Evolver(format!(
                    "population {} is empty",
                    pop_idx
                )));
            }

            let elite_count = self.elite_count();
            let mutant_count = self.mutant_count();
            let offspring_count = self
                .config
                .population_size
                .saturating_sub(elite_count + mutant_count);

            let mut next: Vec<Chromosome> = Vec::with_capacity(mutant_count + offspring_count);
            for _ in 0..mutant_count {
                let mutant = self.random_chromosome();
                next.push(mutant);
            }

            let parents = std::mem::take(&mut self.populations[pop_idx].members);
            for _ in 0..offspring_count {
                next.push(breed(
                    &parents,
                    elite_count,
                    self.config.elite_inherit_prob,
                    &mut self.rng,
                ));
            }
            self.populations[pop_idx].members = parents;

            let mut scored = self.score_batch(next)?;

            let population = &mut self.populations[pop_idx];
            population.members.truncate(elite_count);
            population.members.append(&mut scored);
            population.sort();

            // Elite refinement
            for elite_idx in 0..elite_count.min(self.populations[pop_idx].members.len()) {
                let member = self.populations[pop_idx].members[elite_idx].clone();
                let (chromosome, fitness) = self.local_search.refine(
                    &member.chromosome,
                    member.fitness,
                    self.objective.as_ref(),
                    &mut self.rng,
                )?;
                self.populations[pop_idx].members[elite_idx] = Individual {
                    chromosome,
                    fitness,
                };
            }
            self.populations[pop_idx].sort();

            self.maybe_restart(pop_idx)?;
        }

        Ok(())
    }

    fn best_fitness(&self) -> Result<f64> {
        self.populations
            .iter()
            .filter_map(Population::best)
            .map(|ind| ind.fitness)
            .fold(None, |acc: Option<f64>, f| {
                Some(acc.map_or(f, |a| a.max(f)))
            })
            .ok_or_else(|| EvotuneError::Evolver("no scored population".to_string()))
    }

    fn best_chromosome(&self) -> Result<Chromosome> {
        self.populations
            .iter()
            .filter_map(Population::best)
            .max_by(|a, b| {
                a.fitness
                    .partial_cmp(&b.fitness)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|ind| ind.chromosome.clone())
            .ok_or_else(|| EvotuneError::Evolver("no scored population".to_string()))
    }

    fn num_populations(&self) -> usize {
        self.populations.len()
    }

    fn population_diversity(&self, pop_idx: usize) -> Result<f64> {
        let population = self.populations.get(pop_idx).ok_or_else(|| {
            EvotuneError::Evolver(format!("no population at index {}", pop_idx))
        })?;
        Ok(Self::diversity_of(population, self.chromosome_len))
    }
}

/// Parameterized uniform crossover of an elite parent and a non-elite
/// parent; each gene comes from the elite with probability `rho`.
/// `members` must be sorted by descending fitness.
fn breed(members: &[Individual], elite_count: usize, rho: f64, rng: &mut StdRng) -> Chromosome {
    let elite_count = elite_count.min(members.len());
    let elite = &members[rng.gen_range(0..elite_count)].chromosome;

    let other = if members.len() > elite_count {
        &members[rng.gen_range(elite_count..members.len())].chromosome
    } else {
        &members[rng.gen_range(0..members.len())].chromosome
    };

    elite
        .iter()
        .zip(other.iter())
        .map(|(&e, &o)| if rng.gen::<f64>() < rho { e } else { o })
        .collect()
}
