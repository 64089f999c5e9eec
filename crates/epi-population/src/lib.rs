//! `epi-population` — person records and the population store.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`person`]   | `Person`, `InfectionCounter`, `InfectionRecord`               |
//! | [`store`]    | `Population` (owns every `Person`, indexed by `PersonId`)     |
//! | [`builder`]  | `PopulationBuilder` (fluent construction)                     |
//!
//! Groups never own persons: they hold `PersonId`s and the engine borrows the
//! `Population` mutably for the duration of one tick.  A person who belongs
//! to several groups (household and workplace) therefore has exactly one
//! copy of their infection state, and a change made while processing one
//! group is visible to every group processed after it.

pub mod builder;
pub mod person;
pub mod store;


pub use builder::PopulationBuilder;
pub use person::{InfectionCounter, InfectionRecord, Person};
pub use store::Population;
