//! Weighted random choice over a finite set of `(item, weight)` pairs.
//!
//! Shared by transmission-source attribution (which infected person is
//! credited with a new infection) and commute mode assignment (which mode of
//! transport a person uses, weighted by census counts).
//!
//! Item `i` is returned with probability `w_i / Σw`.  Zero-weight items are
//! never returned.  Sampling draws from the caller's RNG only, so a seeded
//! source reproduces the same sequence of choices.

use rand::Rng;
use rand::distributions::{Distribution, WeightedError, WeightedIndex};

use crate::{EpiError, EpiResult, non_negative};

/// A reusable weighted sampler: validate and build the cumulative table
/// once, then draw as many times as needed.
#[derive(Clone, Debug)]
pub struct WeightedChoice<T> {
    items: Vec<T>,
    index: WeightedIndex<f64>,
}

impl<T> WeightedChoice<T> {
    /// Build a sampler from `(item, weight)` pairs.
    ///
    /// Fails with [`EpiError::EmptyOrZeroWeight`] when there are no pairs or
    /// every weight is zero, and with [`EpiError::InvalidNumericInput`] when
    /// a weight is negative or not finite, or the weights overflow on summing.
    pub fn new(weighted: impl IntoIterator<Item = (T, f64)>) -> EpiResult<Self> {
        let (items, weights): (Vec<T>, Vec<f64>) = weighted.into_iter().unzip();
        let index = weighted_index(&weights)?;
        Ok(Self { items, index })
    }

    /// Draw one item.
    #[inline]
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        &self.items[self.index.sample(rng)]
    }

    /// The candidate items in input order (zero-weight items included).
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`: construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One-shot weighted choice over a borrowed slice of `(item, weight)` pairs.
pub fn choose<'a, T, R: Rng + ?Sized>(
    weighted: &'a [(T, f64)],
    rng:      &mut R,
) -> EpiResult<&'a T> {
    let weights: Vec<f64> = weighted.iter().map(|(_, w)| *w).collect();
    let index = weighted_index(&weights)?;
    Ok(&weighted[index.sample(rng)].0)
}

fn weighted_index(weights: &[f64]) -> EpiResult<WeightedIndex<f64>> {
    for &w in weights {
        non_negative("weight", w)?;
    }
    let total: f64 = weights.iter().sum();
    if !total.is_finite() {
        return Err(EpiError::InvalidNumericInput { what: "weight sum", value: total });
    }
    WeightedIndex::new(weights).map_err(|e| match e {
        WeightedError::NoItem | WeightedError::AllWeightsZero => EpiError::EmptyOrZeroWeight,
        other => EpiError::Configuration(format!("weighted choice: {other}")),
    })
}
