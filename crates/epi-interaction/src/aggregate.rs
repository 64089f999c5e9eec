//! Per-tick infectiousness aggregation and source sampling.

use std::ops::Range;

use rand::Rng;

use epi_core::{EpiError, EpiResult, PersonId, SimTime, WeightedChoice};
use epi_groups::Group;
use epi_population::Population;

use crate::SourceAttribution;

/// Ephemeral state for one group's tick.
///
/// Built by [`TimestepContext::aggregate`] and dropped when the tick ends.
/// Nothing here is persisted between ticks.
pub struct TimestepContext {
    /// Elapsed simulated time covered by this tick.
    pub delta_time: f64,

    /// Absolute simulated time stamped on every infection this tick.
    pub current_time: SimTime,

    /// Aggregate infectiousness per grouping, index-aligned with
    /// `group.groupings()`.
    pub probabilities: Vec<f64>,

    /// `(person, infectiousness)` for every infected member, grouping by
    /// grouping, flattened across the whole group.
    pub weights: Vec<(PersonId, f64)>,

    /// `weights[grouping_ranges[g]]` are the entries contributed by grouping `g`.
    grouping_ranges: Vec<Range<usize>>,

    group_sampler:     Option<WeightedChoice<PersonId>>,
    grouping_samplers: Vec<Option<WeightedChoice<PersonId>>>,
}

impl TimestepContext {
    /// Aggregate the infectiousness of `group`'s currently infected members.
    ///
    /// Contributions are normalised by the size of the *whole* group,
    /// `1 / max(1, group.size())`, so a grouping's exposure is diluted by
    /// everyone present, not just its own members.  A member missing from
    /// `population` is `PersonNotFound`.
    pub fn aggregate(
        group:        &Group,
        population:   &Population,
        delta_time:   f64,
        current_time: SimTime,
    ) -> EpiResult<Self> {
        let norm = 1.0 / group.size().max(1) as f64;
        let n = group.n_groupings();

        let mut probabilities = Vec::with_capacity(n);
        let mut weights = Vec::new();
        let mut grouping_ranges = Vec::with_capacity(n);

        for grouping in group.groupings() {
            let start = weights.len();
            let mut summed = 0.0;
            for person in grouping.infected(population)? {
                let individual = person.infectiousness();
                summed += individual * norm;
                weights.push((person.id(), individual));
            }
            probabilities.push(summed);
            grouping_ranges.push(start..weights.len());
        }

        Ok(Self {
            delta_time,
            current_time,
            probabilities,
            weights,
            grouping_ranges,
            group_sampler:     None,
            grouping_samplers: vec![None; n],
        })
    }

    /// Weights contributed by one grouping.
    pub fn grouping_weights(&self, grouping: usize) -> &[(PersonId, f64)] {
        &self.weights[self.grouping_ranges[grouping].clone()]
    }

    /// Draw the person credited with an infection caused by `source_grouping`.
    ///
    /// The sampler is built on first use and reused for the rest of the tick.
    /// Fails with `EmptyOrZeroWeight` only if called when no eligible
    /// infected person has positive infectiousness, which the evaluator's
    /// guard rules out.
    pub fn select_infecter<R: Rng + ?Sized>(
        &mut self,
        source_grouping: usize,
        attribution:     SourceAttribution,
        rng:             &mut R,
    ) -> EpiResult<PersonId> {
        let (slot, range) = match attribution {
            SourceAttribution::GroupWide => (&mut self.group_sampler, 0..self.weights.len()),
            SourceAttribution::SourceGrouping => (
                &mut self.grouping_samplers[source_grouping],
                self.grouping_ranges[source_grouping].clone(),
            ),
        };
        if slot.is_none() {
            *slot = Some(WeightedChoice::new(self.weights[range].iter().copied())?);
        }
        let Some(sampler) = slot.as_ref() else {
            return Err(EpiError::EmptyOrZeroWeight);
        };
        Ok(*sampler.choose(rng))
    }
}
