use crate::error::{EvotuneError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Training data shared read-only across all evaluations.
///
/// Row-major features with one target per row. Evaluations never
/// mutate the dataset; folds are materialized as row subsets.
#[derive(Debug, Clone)]
pub struct Dataset {
    features: Vec<Vec<f64>>,
    targets: Vec<f64>,
}

impl Dataset {
    pub fn new(features: Vec<Vec<f64>>, targets: Vec<f64>) -> Result<Self> {
        if features.len() != targets.len() {
            return Err(EvotuneError::Validation(format!(
                "feature rows ({}) and targets ({}) differ in length",
                features.len(),
                targets.len()
            )));
        }
        if let Some(first) = features.first() {
            let width = first.len();
            if features.iter().any(|row| row.len() != width) {
                return Err(EvotuneError::Validation(
                    "feature rows have inconsistent widths".to_string(),
                ));
            }
        }
        Ok(Self { features, targets })
    }

    pub fn n_samples(&self) -> usize {
        self.targets.len()
    }

    pub fn n_features(&self) -> usize {
        self.features.first().map_or(0, |row| row.len())
    }

    pub fn row(&self, idx: usize) -> &[f64] {
        &self.features[idx]
    }

    pub fn target(&self, idx: usize) -> f64 {
        self.targets[idx]
    }

    pub fn rows(&self) -> impl Iterator<Item = (&[f64], f64)> {
        self.features
            .iter()
            .map(Vec::as_slice)
            .zip(self.targets.iter().copied())
    }

    /// Materialize the rows at the given indices as a new dataset
    pub fn subset(&self, indices: &[usize]) -> Dataset {
        Dataset {
            features: indices.iter().map(|&i| self.features[i].clone()).collect(),
            targets: indices.iter().map(|&i| self.targets[i]).collect(),
        }
    }

    /// Deterministic two-class blobs for tests and demos: class 0
    /// scattered around the origin, class 1 around (4, 4, ...). The
    /// classes are linearly separable for any reasonable spread.
    pub fn synthetic_blobs(n_per_class: usize, n_features: usize, seed: u64) -> Dataset {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut features = Vec::with_capacity(n_per_class * 2);
        let mut targets = Vec::with_capacity(n_per_class * 2);

        for class in 0..2 {
            let center = if class == 0 { 0.0 } else { 4.0 };
            for _ in 0..n_per_class {
                let row: Vec<f64> = (0..n_features)
                    .map(|_| center + rng.gen::<f64>() - 0.5)
                    .collect();
                features.push(row);
                targets.push(class as f64);
            }
        }

        Dataset { features, targets }
    }
}
