//! Census commute table loader.
//!
//! # CSV format
//!
//! One row per area.  The area code sits in the `geography code` column;
//! every configured mode is counted from the first column whose header
//! contains the mode's description.  Other columns are ignored.
//!
//! ```csv
//! date,geography,geography code,"Method: Bus, minibus or coach; measures: Value",Method: Bicycle; measures: Value
//! 2011,Leeds 001,E02002330,120,15
//! 2011,Leeds 002,E02002331,98,40
//! ```
//!
//! Header lookup happens once, before any row is read, so a missing column
//! fails fast.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use log::debug;

use epi_core::{EpiError, EpiResult};

use crate::{ModeOfTransport, ModeRegistry, RegionalGenerator};

pub const AREA_COLUMN: &str = "geography code";

// ── Schema ────────────────────────────────────────────────────────────────────

/// Resolved column positions for one table.
struct CommuteSchema {
    area:  usize,
    modes: Vec<(usize, ModeOfTransport)>,
}

impl CommuteSchema {
    fn resolve(headers: &csv::StringRecord, registry: &ModeRegistry) -> EpiResult<Self> {
        let headers: Vec<&str> = headers.iter().collect();
        let area = headers.iter().position(|h| *h == AREA_COLUMN).ok_or_else(|| {
            EpiError::Configuration(format!("commute table has no '{AREA_COLUMN}' column"))
        })?;
        let modes = registry
            .iter()
            .map(|mode| {
                mode.column_in(&headers).map(|col| (col, mode.clone())).ok_or_else(|| {
                    EpiError::Configuration(format!(
                        "no commute column header contains '{mode}'"
                    ))
                })
            })
            .collect::<EpiResult<_>>()?;
        Ok(Self { area, modes })
    }

    fn parse_row(&self, row: &csv::StringRecord, line: u64) -> EpiResult<RegionalGenerator> {
        let field = |col: usize| {
            row.get(col).ok_or_else(|| {
                EpiError::Parse(format!("line {line}: missing column {col}"))
            })
        };
        let area = field(self.area)?;
        let weighted_modes = self
            .modes
            .iter()
            .map(|(col, mode)| {
                let raw = field(*col)?;
                raw.trim()
                    .parse::<u32>()
                    .map(|count| (count, mode.clone()))
                    .map_err(|_| {
                        EpiError::Parse(format!(
                            "line {line}: invalid count {raw:?} for '{mode}' in area {area}"
                        ))
                    })
            })
            .collect::<EpiResult<_>>()?;
        Ok(RegionalGenerator::new(area, weighted_modes))
    }
}

// ── CommuteGenerator ──────────────────────────────────────────────────────────

/// Regional mode generators keyed by area code.
#[derive(Clone, Debug, Default)]
pub struct CommuteGenerator {
    regional: HashMap<String, RegionalGenerator>,
}

impl CommuteGenerator {
    pub fn new(regional: impl IntoIterator<Item = RegionalGenerator>) -> Self {
        Self {
            regional: regional.into_iter().map(|g| (g.area().to_owned(), g)).collect(),
        }
    }

    pub fn from_file(path: &Path, registry: &ModeRegistry) -> EpiResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, registry)
    }

    /// Like [`from_file`](Self::from_file) but accepts any `Read` source.
    pub fn from_reader<R: Read>(reader: R, registry: &ModeRegistry) -> EpiResult<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let headers = csv_reader
            .headers()
            .map_err(|e| EpiError::Parse(e.to_string()))?
            .clone();
        let schema = CommuteSchema::resolve(&headers, registry)?;

        let mut regional = HashMap::new();
        let mut row = csv::StringRecord::new();
        loop {
            match csv_reader.read_record(&mut row) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => return Err(EpiError::Parse(e.to_string())),
            }
            let line = row.position().map_or(0, |p| p.line());
            let generator = schema.parse_row(&row, line)?;
            regional.insert(generator.area().to_owned(), generator);
        }

        debug!(
            "loaded commute table: {} areas, {} modes",
            regional.len(),
            schema.modes.len()
        );
        Ok(Self { regional })
    }

    /// The generator for `area`.
    pub fn regional_gen(&self, area: &str) -> EpiResult<&RegionalGenerator> {
        self.regional
            .get(area)
            .ok_or_else(|| EpiError::Configuration(format!("no commute data for area '{area}'")))
    }

    pub fn areas(&self) -> impl Iterator<Item = &str> + '_ {
        self.regional.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.regional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regional.is_empty()
    }
}
