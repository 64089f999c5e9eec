//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `infections.csv`
//! - `step_summaries.csv`
//! - `person_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{InfectionRow, OutputResult, PersonSnapshotRow, StepSummaryRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    infections: Writer<File>,
    summaries:  Writer<File>,
    snapshots:  Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut infections = Writer::from_path(dir.join("infections.csv"))?;
        infections.write_record(["step", "time", "recipient", "source", "group_spec"])?;

        let mut summaries = Writer::from_path(dir.join("step_summaries.csv"))?;
        summaries.write_record(["step", "time", "new_infections", "total_infected"])?;

        let mut snapshots = Writer::from_path(dir.join("person_snapshots.csv"))?;
        snapshots.write_record([
            "person_id",
            "step",
            "infected",
            "infection_time",
            "infected_by",
            "times_infected_others",
        ])?;

        Ok(Self {
            infections,
            summaries,
            snapshots,
            finished: false,
        })
    }
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_infection(&mut self, row: &InfectionRow) -> OutputResult<()> {
        self.infections.write_record(&[
            row.step.to_string(),
            row.time.to_string(),
            row.recipient.to_string(),
            opt(row.source),
            row.group_spec.clone(),
        ])?;
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.step.to_string(),
            row.time.to_string(),
            row.new_infections.to_string(),
            row.total_infected.to_string(),
        ])?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[PersonSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.person_id.to_string(),
                row.step.to_string(),
                (row.infected as u8).to_string(),
                opt(row.infection_time),
                opt(row.infected_by),
                row.times_infected_others.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.infections.flush()?;
        self.summaries.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
