//! Fluent builder for a [`Population`].
//!
//! # Usage
//!
//! ```rust
//! use epi_population::PopulationBuilder;
//!
//! let population = PopulationBuilder::new(100)
//!     .susceptibility(0.8)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(population.len(), 100);
//! assert_eq!(population.infected_count(), 0);
//! ```

use epi_core::EpiResult;

use crate::Population;

/// Builds `count` susceptible persons sharing one default susceptibility,
/// optionally overridden per person.
pub struct PopulationBuilder {
    count:          usize,
    susceptibility: f64,
    overrides:      Vec<(usize, f64)>,
}

impl PopulationBuilder {
    /// Create a builder for `count` persons with susceptibility `1.0`.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            susceptibility: 1.0,
            overrides:      Vec::new(),
        }
    }

    /// Default susceptibility for every person.
    pub fn susceptibility(mut self, value: f64) -> Self {
        self.susceptibility = value;
        self
    }

    /// Override the susceptibility of the person at `index`.  Indices past
    /// `count` are ignored.
    pub fn with_susceptibility(mut self, index: usize, value: f64) -> Self {
        self.overrides.push((index, value));
        self
    }

    /// Validate every susceptibility and construct the store.
    pub fn build(self) -> EpiResult<Population> {
        let mut population = Population::new();
        for i in 0..self.count {
            let value = self
                .overrides
                .iter()
                .rev()
                .find(|(idx, _)| *idx == i)
                .map_or(self.susceptibility, |(_, v)| *v);
            population.add(value)?;
        }
        Ok(population)
    }
}
