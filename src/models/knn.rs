use crate::engines::evaluation::{Dataset, Estimator, EstimatorError};
use crate::types::ParamConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Metric {
    Euclidean,
    Manhattan,
    Chebyshev,
}

impl Metric {
    fn parse(name: &str) -> Result<Self, EstimatorError> {
        match name {
            "euclidean" => Ok(Metric::Euclidean),
            "manhattan" => Ok(Metric::Manhattan),
            "chebyshev" => Ok(Metric::Chebyshev),
            other => Err(EstimatorError(format!("unknown metric '{}'", other))),
        }
    }

    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        match self {
            Metric::Euclidean => a
                .iter()
                .zip(b)
                .map(|(x, y)| (x - y) * (x - y))
                .sum::<f64>()
                .sqrt(),
            Metric::Manhattan => a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum(),
            Metric::Chebyshev => a
                .iter()
                .zip(b)
                .map(|(x, y)| (x - y).abs())
                .fold(0.0, f64::max),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Weighting {
    Uniform,
    Distance,
}

impl Weighting {
    fn parse(name: &str) -> Result<Self, EstimatorError> {
        match name {
            "uniform" => Ok(Weighting::Uniform),
            "distance" => Ok(Weighting::Distance),
            other => Err(EstimatorError(format!("unknown weighting '{}'", other))),
        }
    }
}

/// k-nearest-neighbours classifier.
///
/// Deterministic on purpose: neighbours are ordered by (distance, row
/// index) and vote ties resolve to the lower class label, so repeated
/// fits of the same configuration always score identically. Tunable
/// parameters: `n_neighbors` (positive integer), `metric`
/// (`euclidean` / `manhattan` / `chebyshev`), `weighting`
/// (`uniform` / `distance`).
#[derive(Debug, Clone)]
pub struct KnnClassifier {
    n_neighbors: usize,
    metric: Metric,
    weighting: Weighting,
    train: Option<Dataset>,
}

impl KnnClassifier {
    pub fn new() -> Self {
        Self {
            n_neighbors: 5,
            metric: Metric::Euclidean,
            weighting: Weighting::Uniform,
            train: None,
        }
    }

    fn predict_row(&self, train: &Dataset, row: &[f64]) -> f64 {
        let mut neighbours: Vec<(f64, usize)> = (0..train.n_samples())
            .map(|i| (self.metric.distance(train.row(i), row), i))
            .collect();
        neighbours.sort_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.1.cmp(&b.1))
        });

        let mut votes: Vec<(f64, f64)> = Vec::new(); // (label, weight)
        for &(distance, idx) in neighbours.iter().take(self.n_neighbors) {
            let weight = match self.weighting {
                Weighting::Uniform => 1.0,
                Weighting::Distance => 1.0 / (distance + 1e-9),
            };
            let label = train.target(idx);
            match votes.iter_mut().find(|(l, _)| *l == label) {
                Some((_, w)) => *w += weight,
                None => votes.push((label, weight)),
            }
        }

        votes
            .into_iter()
            .max_by(|a, b| {
                a.1.partial_cmp(&b.1)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    // Heavier weight wins; equal weight goes to the lower label
                    .then(b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal))
            })
            .map(|(label, _)| label)
            .unwrap_or(0.0)
    }
}

impl Default for KnnClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Estimator for KnnClassifier {
    fn clone_unfitted(&self) -> Box<dyn Estimator> {
        Box::new(KnnClassifier {
            train: None,
            ..self.clone()
        })
    }

    fn set_params(&mut self, params: &ParamConfig) -> Result<(), EstimatorError> {
        for (name, value) in params {
            match name.as_str() {
                "n_neighbors" => {
                    let k = value
                        .as_int()
                        .ok_or_else(|| EstimatorError("n_neighbors must be an integer".into()))?;
                    if k < 1 {
                        return Err(EstimatorError(format!("n_neighbors must be >= 1, got {}", k)));
                    }
                    self.n_neighbors = k as usize;
                }
                "metric" => {
                    let name = value
                        .as_str()
                        .ok_or_else(|| EstimatorError("metric must be a string".into()))?;
                    self.metric = Metric::parse(name)?;
                }
                "weighting" => {
                    let name = value
                        .as_str()
                        .ok_or_else(|| EstimatorError("weighting must be a string".into()))?;
                    self.weighting = Weighting::parse(name)?;
                }
                other => {
                    return Err(EstimatorError(format!("unknown parameter '{}'", other)));
                }
            }
        }
        Ok(())
    }

    fn fit(&mut self, data: &Dataset) -> Result<(), EstimatorError> {
        if data.n_samples() == 0 {
            return Err(EstimatorError("cannot fit on an empty dataset".into()));
        }
        if self.n_neighbors > data.n_samples() {
            return Err(EstimatorError(format!(
                "n_neighbors ({}) exceeds sample count ({})",
                self.n_neighbors,
                data.n_samples()
            )));
        }
        self.train = Some(data.clone());
        Ok(())
    }

    fn score(&self, data: &Dataset) -> f64 {
        let Some(train) = &self.train else {
            return 0.0;
        };
        if data.n_samples() == 0 {
            return 0.0;
        }

        let correct = data
            .rows()
            .filter(|(row, target)| self.predict_row(train, row) == *target)
            .count();
        correct as f64 / data.n_samples() as f64
    }
}
