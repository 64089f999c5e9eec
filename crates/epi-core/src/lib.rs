//! `epi-core` — foundational types for the epi transmission workspace.
//!
//! This crate is a dependency of every other `epi-*` crate.  It has no
//! `epi-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `PersonId`, `GroupId`                                 |
//! | [`label`]       | `GroupSpec` (group-type label)                        |
//! | [`time`]        | `SimTime`, `Step`, `SimClock`, `SimConfig`            |
//! | [`rng`]         | `SimRng` (seeded simulation RNG)                      |
//! | [`choice`]      | `WeightedChoice<T>`, one-shot [`choose`]              |
//! | [`error`]       | `EpiError`, `EpiResult`, numeric guards               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod choice;
pub mod error;
pub mod ids;
pub mod label;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use choice::{WeightedChoice, choose};
pub use error::{EpiError, EpiResult, non_negative};
pub use ids::{GroupId, PersonId};
pub use label::GroupSpec;
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, SimTime, Step};
