//! `epi-output` — simulation output writers for the epi transmission workspace.
//!
//! | Backend | Files created                                                       |
//! |---------|---------------------------------------------------------------------|
//! | CSV     | `infections.csv`, `step_summaries.csv`, `person_snapshots.csv`      |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `epi_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use epi_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{InfectionRow, PersonSnapshotRow, StepSummaryRow};
pub use writer::OutputWriter;
