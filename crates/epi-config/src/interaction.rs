//! Full interaction document: engine options plus intensities.
//!
//! ```yaml
//! interaction:
//!   pair_sweep: once_per_ordered_pair
//!   attribution: source_grouping
//!   skip_infected_recipients: true
//! intensities:
//!   household: [[1.0]]
//! ```
//!
//! Every `interaction` key is optional; omitted keys keep the
//! `InteractionOptions::default()` behaviour.

use std::path::Path;

use log::debug;
use serde::Deserialize;

use epi_interaction::InteractionOptions;

use crate::{ConfigResult, IntensityConfig};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct InteractionConfig {
    #[serde(default, rename = "interaction")]
    pub options: InteractionOptions,

    #[serde(flatten)]
    pub intensities: IntensityConfig,
}

impl InteractionConfig {
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: Self = serde_yml::from_str(yaml)?;
        debug!(
            "interaction config: {:?}, intensities for [{}]",
            config.options,
            config.intensities.specs().collect::<Vec<_>>().join(", ")
        );
        Ok(config)
    }

    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }
}
