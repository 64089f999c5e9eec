//! Modes of transport recognised in census commute tables.
//!
//! ```yaml
//! - description: Work mainly at or from home
//! - description: Underground, metro, light rail, tram
//! - description: Bus, minibus or coach
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::ConfigResult;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ModeEntry {
    /// Matched as a substring of the census column headers.
    pub description: String,
}

/// The mode list in document order.  Duplicates are kept here and collapsed
/// by the registry that consumes them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ModesConfig {
    pub modes: Vec<ModeEntry>,
}

impl ModesConfig {
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        Ok(serde_yml::from_str(yaml)?)
    }

    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn descriptions(&self) -> impl Iterator<Item = &str> + '_ {
        self.modes.iter().map(|m| m.description.as_str())
    }
}
