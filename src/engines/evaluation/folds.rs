use crate::error::{EvotuneError, Result};

/// Single cross-validation fold: train on one index set, score on the
/// held-out set.
#[derive(Debug, Clone)]
pub struct FoldSplit {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
    pub fold_num: usize,
}

/// Deterministic contiguous k-fold plan.
///
/// Fold boundaries depend only on the sample count, so a fixed dataset
/// always yields the same folds and the same cross-validated score.
#[derive(Debug, Clone)]
pub struct KFoldPlan {
    n_folds: usize,
}

impl KFoldPlan {
    pub fn new(n_folds: usize) -> Result<Self> {
        if n_folds < 2 {
            return Err(EvotuneError::Validation(format!(
                "cross-validation needs at least 2 folds, got {}",
                n_folds
            )));
        }
        Ok(Self { n_folds })
    }

    pub fn n_folds(&self) -> usize {
        self.n_folds
    }

    pub fn split(&self, n_samples: usize) -> Result<Vec<FoldSplit>> {
        if n_samples < self.n_folds {
            return Err(EvotuneError::Validation(format!(
                "cannot split {} samples into {} folds",
                n_samples, self.n_folds
            )));
        }

        let base = n_samples / self.n_folds;
        let remainder = n_samples % self.n_folds;

        let mut splits = Vec::with_capacity(self.n_folds);
        let mut start = 0;
        for fold_num in 0..self.n_folds {
            // First `remainder` folds take one extra sample
            let size = base + usize::from(fold_num < remainder);
            let end = start + size;

            let test: Vec<usize> = (start..end).collect();
            let train: Vec<usize> = (0..start).chain(end..n_samples).collect();

            splits.push(FoldSplit {
                train,
                test,
                fold_num,
            });
            start = end;
        }

        Ok(splits)
    }
}
