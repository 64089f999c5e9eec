//! Simulation observer trait for progress reporting and data collection.

use epi_core::{GroupSpec, PersonId, SimTime, Step};
use epi_population::Population;

/// One accepted transmission, reported after the step that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct InfectionEvent {
    pub step:       Step,
    pub time:       SimTime,
    pub recipient:  PersonId,
    /// Person credited with the infection.  When a recipient is infected
    /// more than once in a step, every event carries the last credited source.
    pub source:     Option<PersonId>,
    pub group_spec: GroupSpec,
}

/// Totals for one completed step.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct StepSummary {
    pub step:             Step,
    /// Clock time at the start of the step.
    pub time:             SimTime,
    /// Groups that ran (empty and closed groups are skipped).
    pub groups_processed: usize,
    /// Accepted transmissions this step, re-infections included.
    pub new_infections:   usize,
    /// Persons flagged infected once the step finished.
    pub total_infected:   usize,
}

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] at key
/// points in the step loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_step_end(&mut self, summary: &StepSummary) {
///         println!("{}: {} new, {} infected",
///                  summary.step, summary.new_infections, summary.total_infected);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each step, before any group runs.
    fn on_step_start(&mut self, _step: Step, _time: SimTime) {}

    /// Called once per infection produced during the step, in ascending
    /// recipient order, before [`on_step_end`](Self::on_step_end).
    fn on_infection(&mut self, _event: &InfectionEvent) {}

    /// Called at the end of each step.
    fn on_step_end(&mut self, _summary: &StepSummary) {}

    /// Called at snapshot intervals (every `config.output_interval_steps`
    /// steps) with read-only access to every person.
    fn on_snapshot(&mut self, _step: Step, _population: &Population) {}

    /// Called once after the final step completes.
    fn on_sim_end(&mut self, _final_step: Step) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
