//! Per-area weighted mode sampling.

use rand::Rng;

use epi_core::{EpiError, EpiResult, WeightedChoice};

use crate::ModeOfTransport;

/// Modes of transport for one area, weighted by the number of residents
/// using each.
#[derive(Clone, Debug)]
pub struct RegionalGenerator {
    area:           String,
    weighted_modes: Vec<(u32, ModeOfTransport)>,
    /// `None` when nobody in the area commutes by any listed mode.
    sampler:        Option<WeightedChoice<ModeOfTransport>>,
}

impl RegionalGenerator {
    pub fn new(area: impl Into<String>, weighted_modes: Vec<(u32, ModeOfTransport)>) -> Self {
        let sampler = WeightedChoice::new(
            weighted_modes.iter().map(|(count, mode)| (mode.clone(), f64::from(*count))),
        )
        .ok();
        Self { area: area.into(), weighted_modes, sampler }
    }

    pub fn area(&self) -> &str {
        &self.area
    }

    pub fn weighted_modes(&self) -> &[(u32, ModeOfTransport)] {
        &self.weighted_modes
    }

    /// Residents counted across all modes.
    pub fn total(&self) -> u64 {
        self.weighted_modes.iter().map(|(count, _)| u64::from(*count)).sum()
    }

    pub fn modes(&self) -> impl Iterator<Item = &ModeOfTransport> + '_ {
        self.weighted_modes.iter().map(|(_, mode)| mode)
    }

    /// Share of residents per mode, in mode order.  All zeros when the
    /// area has no counted residents.
    pub fn weights(&self) -> Vec<f64> {
        let total = self.total();
        if total == 0 {
            return vec![0.0; self.weighted_modes.len()];
        }
        self.weighted_modes
            .iter()
            .map(|(count, _)| f64::from(*count) / total as f64)
            .collect()
    }

    /// Draw a mode with probability proportional to its count.
    pub fn weighted_random_choice<R: Rng + ?Sized>(&self, rng: &mut R) -> EpiResult<&ModeOfTransport> {
        self.sampler
            .as_ref()
            .map(|s| s.choose(rng))
            .ok_or(EpiError::EmptyOrZeroWeight)
    }
}
