//! One simulation tick for a group, and for every group of a supergroup.

use std::ops::AddAssign;

use log::debug;
use rand::Rng;

use epi_core::{EpiResult, SimTime, non_negative};
use epi_groups::{Group, Supergroup};
use epi_population::Population;

use crate::{InteractionOptions, PairSweep, TimestepContext, evaluate_pair};

/// Diagnostic counts from one or more group ticks.  Not needed for
/// correctness; the engine's effect is the mutation of `Population`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct TimestepSummary {
    /// Groups that were actually processed (`must_timestep() == true`).
    pub groups_processed:  usize,
    /// `evaluate_pair` calls made, including no-op ones.
    pub pairs_evaluated:   usize,
    /// Accepted transmissions (re-infections included).
    pub new_infections:    usize,
}

impl AddAssign for TimestepSummary {
    fn add_assign(&mut self, rhs: Self) {
        self.groups_processed += rhs.groups_processed;
        self.pairs_evaluated += rhs.pairs_evaluated;
        self.new_infections += rhs.new_infections;
    }
}

/// Run exactly one tick for `group`.
///
/// Does nothing when `group.must_timestep()` is false.  Otherwise aggregates
/// infectiousness once, then evaluates grouping pairs according to
/// `options.pair_sweep`.  A negative or non-finite `delta_time` is rejected
/// before any person is touched.
pub fn run_timestep<R: Rng + ?Sized>(
    group:        &Group,
    population:   &mut Population,
    delta_time:   f64,
    current_time: SimTime,
    rng:          &mut R,
    options:      &InteractionOptions,
) -> EpiResult<TimestepSummary> {
    let mut summary = TimestepSummary::default();
    non_negative("delta_time", delta_time)?;
    if !group.must_timestep() {
        return Ok(summary);
    }
    group.validate()?;

    let mut ctx = TimestepContext::aggregate(group, population, delta_time, current_time)?;
    debug!(
        "{} {} at {current_time}: probabilities {:?}",
        group.spec(),
        group.id(),
        ctx.probabilities
    );

    let n = group.n_groupings();
    for i in 0..n {
        for j in 0..n {
            summary.new_infections += evaluate_pair(group, population, &mut ctx, i, j, options, rng)?;
            summary.pairs_evaluated += 1;
            if i != j && options.pair_sweep == PairSweep::Duplicated {
                summary.new_infections +=
                    evaluate_pair(group, population, &mut ctx, j, i, options, rng)?;
                summary.pairs_evaluated += 1;
            }
        }
    }
    summary.groups_processed = 1;
    Ok(summary)
}

/// Tick every group of a supergroup.
pub trait SupergroupTimestep {
    /// Run [`run_timestep`] for each group in insertion order and sum the
    /// summaries.  Stops at the first error.
    fn timestep_all<R: Rng + ?Sized>(
        &self,
        population:   &mut Population,
        delta_time:   f64,
        current_time: SimTime,
        rng:          &mut R,
        options:      &InteractionOptions,
    ) -> EpiResult<TimestepSummary>;
}

impl SupergroupTimestep for Supergroup {
    fn timestep_all<R: Rng + ?Sized>(
        &self,
        population:   &mut Population,
        delta_time:   f64,
        current_time: SimTime,
        rng:          &mut R,
        options:      &InteractionOptions,
    ) -> EpiResult<TimestepSummary> {
        let mut total = TimestepSummary::default();
        for group in self {
            total += run_timestep(group, population, delta_time, current_time, rng, options)?;
        }
        debug!(
            "{} supergroup at {current_time}: {} groups processed, {} new infections",
            self.spec(),
            total.groups_processed,
            total.new_infections
        );
        Ok(total)
    }
}
