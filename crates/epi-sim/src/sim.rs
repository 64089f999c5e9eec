//! The `Simulation` struct and its step loop.

use log::info;

use epi_core::{PersonId, SimClock, SimConfig, SimRng, SimTime, Step};
use epi_groups::Supergroup;
use epi_interaction::{InteractionOptions, SupergroupTimestep, TimestepSummary};
use epi_population::Population;

use crate::{InfectionEvent, SimObserver, SimResult, StepSummary};

/// The main simulation runner.
///
/// Each step runs every supergroup, in the order they were added, through the
/// transmission engine with `delta_time = config.step_duration` and
/// `current_time` = the clock time at the start of the step.  A person who
/// belongs to several groups sees the infections produced by earlier groups
/// of the same step.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulation {
    /// Global configuration (step duration, total steps, seed, …).
    pub config: SimConfig,

    /// Step counter and step → time mapping.
    pub clock: SimClock,

    /// Every person, indexed by `PersonId`.
    pub population: Population,

    /// Run in this order every step.
    pub supergroups: Vec<Supergroup>,

    pub options: InteractionOptions,

    rng: SimRng,

    /// `infection_history.len()` per person at the end of the previous step.
    history_lens: Vec<usize>,
}

impl Simulation {
    pub(crate) fn new(
        config:      SimConfig,
        population:  Population,
        supergroups: Vec<Supergroup>,
        options:     InteractionOptions,
    ) -> Self {
        let history_lens = population
            .iter()
            .map(|p| p.counter().infection_history.len())
            .collect();
        Self {
            clock: config.make_clock(),
            rng: SimRng::new(config.seed),
            config,
            population,
            supergroups,
            options,
            history_lens,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Mark `ids` infected at `time` with the given infectiousness.  No
    /// source is credited and no history entry is recorded.
    pub fn seed_infections(
        &mut self,
        ids:            &[PersonId],
        time:           SimTime,
        infectiousness: f64,
    ) -> SimResult<()> {
        for &id in ids {
            self.population.seed_infection(id, time, infectiousness)?;
        }
        info!("seeded {} infections at {time}", ids.len());
        Ok(())
    }

    /// The first supergroup whose spec label is `spec`.
    pub fn supergroup(&self, spec: &str) -> Option<&Supergroup> {
        self.supergroups.iter().find(|sg| sg.spec().as_str() == spec)
    }

    /// Mutable access for interventions between steps (closing groups…).
    pub fn supergroup_mut(&mut self, spec: &str) -> Option<&mut Supergroup> {
        self.supergroups.iter_mut().find(|sg| sg.spec().as_str() == spec)
    }

    /// Run the simulation from the current step to `config.end_step()`.
    ///
    /// Calls observer hooks at every step boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_step < self.config.end_step() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.clock.current_step);
        Ok(())
    }

    /// Run exactly `n` steps from the current position (ignores `end_step`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    // ── Core step processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_step;
        let time = self.clock.current_time();

        observer.on_step_start(now, time);
        let totals = self.process_step(time)?;
        self.report_infections(now, observer);

        let summary = StepSummary {
            step:             now,
            time,
            groups_processed: totals.groups_processed,
            new_infections:   totals.new_infections,
            total_infected:   self.population.infected_count(),
        };
        info!(
            "{now} ({time}): {} groups, {} new infections, {} infected",
            summary.groups_processed, summary.new_infections, summary.total_infected
        );
        observer.on_step_end(&summary);

        if self.config.output_interval_steps > 0
            && now.0.is_multiple_of(self.config.output_interval_steps)
        {
            observer.on_snapshot(now, &self.population);
        }
        self.clock.advance();
        Ok(())
    }

    fn process_step(&mut self, time: SimTime) -> SimResult<TimestepSummary> {
        let delta_time = self.config.step_duration;
        let mut totals = TimestepSummary::default();
        for supergroup in &self.supergroups {
            totals += supergroup.timestep_all(
                &mut self.population,
                delta_time,
                time,
                self.rng.inner(),
                &self.options,
            )?;
        }
        Ok(totals)
    }

    /// Emit one event per history record added since the previous step.
    fn report_infections<O: SimObserver>(&mut self, step: Step, observer: &mut O) {
        self.history_lens.resize(self.population.len(), 0);
        for (person, seen) in self.population.iter().zip(self.history_lens.iter_mut()) {
            let history = &person.counter().infection_history;
            for record in &history[*seen..] {
                observer.on_infection(&InfectionEvent {
                    step,
                    time:       record.time,
                    recipient:  person.id(),
                    source:     person.infected_by(),
                    group_spec: record.group_spec.clone(),
                });
            }
            *seen = history.len();
        }
    }
}
