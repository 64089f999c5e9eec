//! Pairwise contact intensities between the groupings of a group.

use std::fmt;

use epi_core::{EpiError, EpiResult, non_negative};

/// A square matrix of non-negative contact intensities indexed by
/// `(source_grouping, recipient_grouping)`.
///
/// Stored row-major.  Entries need not be symmetric: `get(i, j)` is the
/// strength with which grouping `i` exposes grouping `j`.
#[derive(Clone, PartialEq)]
pub struct IntensityMatrix {
    dim:    usize,
    values: Vec<f64>,
}

impl IntensityMatrix {
    /// Build from rows.  Every row must have `rows.len()` entries and every
    /// entry must be finite and `>= 0`.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> EpiResult<Self> {
        let dim = rows.len();
        let mut values = Vec::with_capacity(dim * dim);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != dim {
                return Err(EpiError::Configuration(format!(
                    "intensity matrix row {i} has {} entries, expected {dim}",
                    row.len()
                )));
            }
            for v in row {
                values.push(non_negative("intensity", v)?);
            }
        }
        Ok(Self { dim, values })
    }

    /// An `n × n` matrix of zeros.
    pub fn zeros(dim: usize) -> Self {
        Self { dim, values: vec![0.0; dim * dim] }
    }

    /// An `n × n` matrix with every entry equal to `value` (well-mixed group).
    pub fn uniform(dim: usize, value: f64) -> EpiResult<Self> {
        let value = non_negative("intensity", value)?;
        Ok(Self { dim, values: vec![value; dim * dim] })
    }

    /// Number of groupings this matrix covers.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Intensity with which grouping `source` exposes grouping `recipient`.
    ///
    /// # Panics
    /// Panics if either index is `>= dim()`.
    #[inline]
    pub fn get(&self, source: usize, recipient: usize) -> f64 {
        assert!(source < self.dim && recipient < self.dim, "intensity index out of range");
        self.values[source * self.dim + recipient]
    }

    pub fn set(&mut self, source: usize, recipient: usize, value: f64) -> EpiResult<()> {
        if source >= self.dim || recipient >= self.dim {
            return Err(EpiError::Configuration(format!(
                "intensity index ({source}, {recipient}) outside {0}x{0} matrix",
                self.dim
            )));
        }
        self.values[source * self.dim + recipient] = non_negative("intensity", value)?;
        Ok(())
    }

    /// Iterator over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.values.chunks(self.dim.max(1)).take(self.dim)
    }
}

impl fmt::Debug for IntensityMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}
