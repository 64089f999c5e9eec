//! `epi-groups` — social groups and their internal contact structure.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                    |
//! |----------------|-------------------------------------------------------------|
//! | [`intensity`]  | `IntensityMatrix` — square, non-negative, maybe asymmetric  |
//! | [`grouping`]   | `Grouping` — ordered sub-population of a group              |
//! | [`group`]      | `Group`, `GroupBuilder`                                     |
//! | [`supergroup`] | `Supergroup` — all groups of one specification              |
//!
//! # Invariants
//!
//! `GroupBuilder::build` is the only way to obtain a `Group` and it fails
//! fast when:
//!
//! - no intensity matrix was supplied,
//! - the matrix dimension differs from the number of groupings,
//! - a person appears in more than one grouping of the same group.
//!
//! The transmission engine can therefore index `intensity[i][j]` for any
//! pair of grouping indices without re-checking shapes mid-tick.

pub mod group;
pub mod grouping;
pub mod intensity;
pub mod supergroup;

#[cfg(test)]
mod tests;

pub use group::{Group, GroupBuilder};
pub use grouping::Grouping;
pub use intensity::IntensityMatrix;
pub use supergroup::Supergroup;
