use crate::engines::decoding::chromosome::Chromosome;
use crate::error::{EvotuneError, Result};
use crate::space::{ParamDomain, ParamSpace};
use crate::types::{ParamConfig, ParamValue};

/// Genotype-to-phenotype mapping.
///
/// Pure and deterministic: the same space and chromosome always decode
/// to the same configuration, with no shared mutable state, so workers
/// may decode concurrently.
#[derive(Debug, Clone)]
pub struct Decoder {
    space: ParamSpace,
}

impl Decoder {
    pub fn new(space: ParamSpace) -> Self {
        Self { space }
    }

    pub fn space(&self) -> &ParamSpace {
        &self.space
    }

    pub fn chromosome_len(&self) -> usize {
        self.space.len()
    }

    /// Decode a chromosome into a concrete configuration.
    ///
    /// Gene `i` selects a value for the `i`-th declared parameter:
    /// - `Categorical` / `DiscreteInt`: nearest-rounding of
    ///   `gene * (len - 1)`. The first and last value get roughly half
    ///   the selection width of interior values; retained quantization
    ///   behavior, not a bug.
    /// - `Boolean`: always the first declared value, as 0/1. The gene
    ///   reserves the slot but does not choose; boolean parameters are
    ///   effectively excluded from the search.
    /// - `Range`: linear interpolation `low + gene * (high - low)`.
    ///
    /// A chromosome whose length differs from the space is a caller
    /// bug and fails with `ShapeMismatch`.
    pub fn decode(&self, chromosome: &Chromosome) -> Result<ParamConfig> {
        if chromosome.len() != self.space.len() {
            return Err(EvotuneError::ShapeMismatch {
                expected: self.space.len(),
                actual: chromosome.len(),
            });
        }

        let mut params = ParamConfig::with_capacity(self.space.len());

        for ((name, domain), &gene) in self.space.iter().zip(chromosome.iter()) {
            let value = match domain {
                ParamDomain::Categorical(values) => {
                    let idx = round_index(gene, values.len());
                    ParamValue::Str(values[idx].clone())
                }
                ParamDomain::DiscreteInt(values) => {
                    let idx = round_index(gene, values.len());
                    ParamValue::Int(values[idx])
                }
                ParamDomain::Boolean(values) => {
                    ParamValue::Int(if values[0] { 1 } else { 0 })
                }
                ParamDomain::Range { low, high } => {
                    ParamValue::Float(low + gene * (high - low))
                }
            };
            params.insert(name.to_string(), value);
        }

        Ok(params)
    }
}

/// Map a gene in [0,1) onto `len` slots by nearest rounding.
/// Clamped so a gene of exactly 1.0 cannot overrun the list.
fn round_index(gene: f64, len: usize) -> usize {
    let idx = (gene * (len - 1) as f64).round() as usize;
    idx.min(len - 1)
}
