//! Contact intensities per group specification.
//!
//! ```yaml
//! intensities:
//!   household:            # dense: one row per source grouping
//!     - [1.0, 0.5]
//!     - [0.5, 1.0]
//!   company:              # sparse: source -> recipient -> value
//!     0: {0: 2.0, 1: 0.3}
//!     1: {1: 1.0}
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use epi_core::{EpiError, EpiResult, GroupSpec};
use epi_groups::IntensityMatrix;

use crate::ConfigResult;

/// One group type's intensities as written in the document.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IntensitySpec {
    /// Full matrix, one row per source grouping.
    Dense(Vec<Vec<f64>>),
    /// `{source: {recipient: value}}`; entries not listed are zero.
    Sparse(BTreeMap<usize, BTreeMap<usize, f64>>),
}

impl IntensitySpec {
    /// Resolve to an `n × n` matrix for a group with `n` groupings.
    pub fn to_matrix(&self, n: usize) -> EpiResult<IntensityMatrix> {
        match self {
            IntensitySpec::Dense(rows) => {
                if rows.len() != n {
                    return Err(EpiError::Configuration(format!(
                        "intensity matrix has {} rows but the group has {n} groupings",
                        rows.len()
                    )));
                }
                IntensityMatrix::from_rows(rows.clone())
            }
            IntensitySpec::Sparse(entries) => {
                let mut matrix = IntensityMatrix::zeros(n);
                for (&source, row) in entries {
                    for (&recipient, &value) in row {
                        if source >= n || recipient >= n {
                            return Err(EpiError::Configuration(format!(
                                "intensity entry ({source}, {recipient}) out of range for {n} groupings"
                            )));
                        }
                        matrix.set(source, recipient, value)?;
                    }
                }
                Ok(matrix)
            }
        }
    }
}

/// The `intensities:` section: group spec label → intensities.
///
/// Loaded once at setup.  Lookups never fall back to a default: a label
/// without an entry is a configuration error.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct IntensityConfig {
    #[serde(default)]
    intensities: BTreeMap<String, IntensitySpec>,
}

impl IntensityConfig {
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        Ok(serde_yml::from_str(yaml)?)
    }

    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Register or replace the intensities for `spec`.
    pub fn insert(&mut self, spec: &GroupSpec, intensities: IntensitySpec) {
        self.intensities.insert(spec.as_str().to_owned(), intensities);
    }

    pub fn contains(&self, spec: &GroupSpec) -> bool {
        self.intensities.contains_key(spec.as_str())
    }

    /// Configured labels, sorted.
    pub fn specs(&self) -> impl Iterator<Item = &str> + '_ {
        self.intensities.keys().map(String::as_str)
    }

    /// The `n_groupings × n_groupings` matrix configured for `spec`.
    pub fn intensity_matrix(&self, spec: &GroupSpec, n_groupings: usize) -> EpiResult<IntensityMatrix> {
        let entry = self.intensities.get(spec.as_str()).ok_or_else(|| {
            EpiError::Configuration(format!("group spec '{spec}' has no configured intensities"))
        })?;
        entry.to_matrix(n_groupings)
    }
}
