//! Modes of transport and the registry that hands out shared handles.

use std::fmt;
use std::sync::Arc;

use epi_config::ModesConfig;

/// A mode of transport, identified by its description.
///
/// Cheap to clone: all handles for one description share the same
/// allocation when obtained from a [`ModeRegistry`].
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModeOfTransport(Arc<str>);

impl ModeOfTransport {
    pub fn new(description: impl AsRef<str>) -> Self {
        Self(Arc::from(description.as_ref()))
    }

    pub fn description(&self) -> &str {
        &self.0
    }

    /// Index of the first header that contains this description.
    pub fn column_in<S: AsRef<str>>(&self, headers: &[S]) -> Option<usize> {
        headers.iter().position(|h| h.as_ref().contains(self.description()))
    }
}

impl PartialEq<str> for ModeOfTransport {
    fn eq(&self, other: &str) -> bool {
        self.description() == other
    }
}

impl PartialEq<&str> for ModeOfTransport {
    fn eq(&self, other: &&str) -> bool {
        self.description() == *other
    }
}

impl fmt::Display for ModeOfTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for ModeOfTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<ModeOfTransport {}>", self.0)
    }
}

/// Every mode known to a run, one handle per description, in first-seen
/// order.  Built once at setup and passed to whoever needs modes.
#[derive(Clone, Debug, Default)]
pub struct ModeRegistry {
    modes: Vec<ModeOfTransport>,
}

impl ModeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ModesConfig) -> Self {
        let mut registry = Self::new();
        for description in config.descriptions() {
            registry.intern(description);
        }
        registry
    }

    /// The handle for `description`, registering it on first use.  Asking
    /// twice returns the same handle.
    pub fn intern(&mut self, description: &str) -> ModeOfTransport {
        if let Some(existing) = self.get(description) {
            return existing.clone();
        }
        let mode = ModeOfTransport::new(description);
        self.modes.push(mode.clone());
        mode
    }

    pub fn get(&self, description: &str) -> Option<&ModeOfTransport> {
        self.modes.iter().find(|m| m.description() == description)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ModeOfTransport> {
        self.modes.iter()
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}

impl<'a> IntoIterator for &'a ModeRegistry {
    type Item     = &'a ModeOfTransport;
    type IntoIter = std::slice::Iter<'a, ModeOfTransport>;

    fn into_iter(self) -> Self::IntoIter {
        self.modes.iter()
    }
}
