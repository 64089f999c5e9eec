//! `epi-commute` — assigns each person a mode of transport, weighted by
//! census counts for their area.
//!
//! | Module         | Contents                                             |
//! |----------------|------------------------------------------------------|
//! | [`mode`]       | `ModeOfTransport`, `ModeRegistry`                    |
//! | [`regional`]   | `RegionalGenerator` — one area's weighted modes      |
//! | [`generator`]  | `CommuteGenerator` — all areas, CSV loading          |
//!
//! ```text
//! modes.yaml ──► ModesConfig ──► ModeRegistry ─┐
//!                                              ├─► CommuteGenerator
//! commute.csv ─────────────────────────────────┘        │
//!                        regional_gen(area).weighted_random_choice(rng)
//! ```

pub mod generator;
pub mod mode;
pub mod regional;

#[cfg(test)]
mod tests;

pub use generator::{AREA_COLUMN, CommuteGenerator};
pub use mode::{ModeOfTransport, ModeRegistry};
pub use regional::RegionalGenerator;
