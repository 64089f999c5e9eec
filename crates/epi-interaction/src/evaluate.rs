//! Transmission from one grouping to another.

use log::trace;
use rand::Rng;

use epi_core::EpiResult;
use epi_groups::Group;
use epi_population::Population;

use crate::{InteractionOptions, TimestepContext, transmission_probability};

/// Decide, for every member of grouping `recipient`, whether grouping
/// `source` infects them this tick.  Returns the number of infections.
///
/// No-op when `intensity[source][recipient] <= 0` or
/// `probabilities[source] <= 0`.  Otherwise one uniform draw is taken per
/// evaluated recipient; when it falls at or below the hazard probability, a
/// source person is drawn by infectiousness, the recipient is marked infected
/// at `ctx.current_time` and credited to that source, the source's
/// `times_infected_others` is incremented and the infection is appended to
/// the recipient's history under the group's spec.
pub fn evaluate_pair<R: Rng + ?Sized>(
    group:      &Group,
    population: &mut Population,
    ctx:        &mut TimestepContext,
    source:     usize,
    recipient:  usize,
    options:    &InteractionOptions,
    rng:        &mut R,
) -> EpiResult<usize> {
    let intensity = group.intensity().get(source, recipient);
    let exposure = ctx.probabilities[source];
    if intensity <= 0.0 || exposure <= 0.0 {
        return Ok(0);
    }

    let mut infections = 0;
    for &person_id in group.groupings()[recipient].members() {
        let person = population.get(person_id)?;
        if options.skip_infected_recipients && person.is_infected() {
            continue;
        }

        let probability =
            transmission_probability(ctx.delta_time, person.susceptibility(), intensity, exposure)?;
        trace!(
            "{} {}: grouping {source} -> {recipient}, exposure {exposure:.4}, intensity {intensity}, \
             {person_id} p = {probability:.4}",
            group.spec(),
            group.id(),
        );

        let draw: f64 = rng.r#gen();
        if probability > 0.0 && draw <= probability {
            let infecter = ctx.select_infecter(source, options.attribution, rng)?;

            let infected = population.get_mut(person_id)?;
            infected.infect_at(ctx.current_time, Some(infecter));
            infected
                .counter_mut()
                .update_infection_data(ctx.current_time, group.spec().clone());

            population.get_mut(infecter)?.counter_mut().increment_infected();
            infections += 1;
        }
    }
    Ok(infections)
}
