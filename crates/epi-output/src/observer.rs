//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use log::warn;

use epi_core::Step;
use epi_population::Population;
use epi_sim::{InfectionEvent, SimObserver, StepSummary};

use crate::row::{InfectionRow, PersonSnapshotRow, StepSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes infection events, step summaries and person
/// snapshots to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!("output write failed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_infection(&mut self, event: &InfectionEvent) {
        let row = InfectionRow {
            step:       event.step.0,
            time:       event.time.days(),
            recipient:  event.recipient.0,
            source:     event.source.map(|s| s.0),
            group_spec: event.group_spec.to_string(),
        };
        let result = self.writer.write_infection(&row);
        self.store_err(result);
    }

    fn on_step_end(&mut self, summary: &StepSummary) {
        let row = StepSummaryRow {
            step:           summary.step.0,
            time:           summary.time.days(),
            new_infections: summary.new_infections as u64,
            total_infected: summary.total_infected as u64,
        };
        let result = self.writer.write_step_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, step: Step, population: &Population) {
        let rows: Vec<PersonSnapshotRow> = population
            .iter()
            .map(|person| PersonSnapshotRow {
                person_id:             person.id().0,
                step:                  step.0,
                infected:              person.is_infected(),
                infection_time:        person.infection_time().map(|t| t.days()),
                infected_by:           person.infected_by().map(|p| p.0),
                times_infected_others: person.counter().times_infected_others,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_step: Step) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
