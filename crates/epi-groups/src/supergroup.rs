//! Collections of groups sharing one specification.

use epi_core::{EpiError, EpiResult, GroupId, GroupSpec};

use crate::Group;

/// All groups of one specification (every household, every company…).
///
/// Groups keep their insertion order; the simulation processes them in that
/// order every step, which fixes the order in which shared persons observe
/// each other's state changes.
#[derive(Clone, Debug)]
pub struct Supergroup {
    spec:   GroupSpec,
    groups: Vec<Group>,
}

impl Supergroup {
    pub fn new(spec: GroupSpec) -> Self {
        Self { spec, groups: Vec::new() }
    }

    pub fn spec(&self) -> &GroupSpec {
        &self.spec
    }

    /// Add a group.  Rejects groups of a different specification and
    /// duplicate group IDs.
    pub fn add(&mut self, group: Group) -> EpiResult<()> {
        if group.spec() != &self.spec {
            return Err(EpiError::Configuration(format!(
                "cannot add {} group {} to the {} supergroup",
                group.spec(),
                group.id(),
                self.spec
            )));
        }
        if self.get(group.id()).is_some() {
            return Err(EpiError::Configuration(format!(
                "{} supergroup already contains {}",
                self.spec,
                group.id()
            )));
        }
        self.groups.push(group);
        Ok(())
    }

    /// Move every group of `other` into `self`.
    pub fn extend(&mut self, other: Supergroup) -> EpiResult<()> {
        for group in other.groups {
            self.add(group)?;
        }
        Ok(())
    }

    pub fn get(&self, id: GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| g.id() == id)
    }

    pub fn get_mut(&mut self, id: GroupId) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| g.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Group> {
        self.groups.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Drop every group.
    pub fn clear(&mut self) {
        self.groups.clear();
    }
}

impl<'a> IntoIterator for &'a Supergroup {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
