//! `epi-config` — YAML configuration loaded once at setup.
//!
//! | Module          | Document                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`intensity`]   | `intensities:` — group spec → contact matrix          |
//! | [`interaction`] | `interaction:` options plus `intensities:`            |
//! | [`modes`]       | list of modes of transport                            |
//!
//! Loading returns [`ConfigError`]; resolving a matrix for a group returns
//! `EpiError`.  `ConfigError` converts into `EpiError` so callers can use a
//! single `?` chain.

pub mod error;
pub mod intensity;
pub mod interaction;
pub mod modes;

#[cfg(test)]
mod tests;

pub use error::{ConfigError, ConfigResult};
pub use intensity::{IntensityConfig, IntensitySpec};
pub use interaction::InteractionConfig;
pub use modes::{ModeEntry, ModesConfig};
