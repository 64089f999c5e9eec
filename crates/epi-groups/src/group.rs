//! Groups and their validating builder.

use std::collections::HashSet;

use epi_core::{EpiError, EpiResult, GroupId, GroupSpec, PersonId};

use crate::{Grouping, IntensityMatrix};

/// A social context (household, company, school…) partitioned into
/// groupings with pairwise contact intensities.
///
/// Build with [`GroupBuilder`].
#[derive(Clone, Debug)]
pub struct Group {
    id:        GroupId,
    spec:      GroupSpec,
    groupings: Vec<Grouping>,
    intensity: IntensityMatrix,
    closed:    bool,
}

impl Group {
    #[inline]
    pub fn id(&self) -> GroupId {
        self.id
    }

    #[inline]
    pub fn spec(&self) -> &GroupSpec {
        &self.spec
    }

    #[inline]
    pub fn groupings(&self) -> &[Grouping] {
        &self.groupings
    }

    #[inline]
    pub fn n_groupings(&self) -> usize {
        self.groupings.len()
    }

    #[inline]
    pub fn intensity(&self) -> &IntensityMatrix {
        &self.intensity
    }

    /// Total member count across all groupings.
    pub fn size(&self) -> usize {
        self.groupings.iter().map(Grouping::len).sum()
    }

    /// `false` for empty or closed groups: the engine skips them entirely.
    pub fn must_timestep(&self) -> bool {
        !self.closed && self.size() > 0
    }

    /// Stop processing this group (school closure, quarantine).
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn reopen(&mut self) {
        self.closed = false;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Re-check the matrix/grouping shape invariant.
    pub fn validate(&self) -> EpiResult<()> {
        check_dimensions(&self.spec, self.groupings.len(), &self.intensity)
    }
}

// ── GroupBuilder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Group`].
///
/// ```rust
/// use epi_core::{GroupId, GroupSpec, PersonId};
/// use epi_groups::{GroupBuilder, IntensityMatrix};
///
/// let group = GroupBuilder::new(GroupId(0), GroupSpec::new("household"))
///     .grouping("adults",   vec![PersonId(0), PersonId(1)])
///     .grouping("children", vec![PersonId(2)])
///     .intensity(IntensityMatrix::from_rows(vec![vec![1.0, 0.5], vec![0.8, 1.0]]).unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(group.size(), 3);
/// assert!(group.must_timestep());
/// ```
pub struct GroupBuilder {
    id:        GroupId,
    spec:      GroupSpec,
    groupings: Vec<Grouping>,
    intensity: Option<IntensityMatrix>,
}

impl GroupBuilder {
    pub fn new(id: GroupId, spec: GroupSpec) -> Self {
        Self {
            id,
            spec,
            groupings: Vec::new(),
            intensity: None,
        }
    }

    /// Append a grouping.  Grouping order defines the matrix index.
    pub fn grouping(mut self, name: impl Into<String>, members: Vec<PersonId>) -> Self {
        self.groupings.push(Grouping::new(name, members));
        self
    }

    pub fn intensity(mut self, matrix: IntensityMatrix) -> Self {
        self.intensity = Some(matrix);
        self
    }

    /// Validate and return the group.
    pub fn build(self) -> EpiResult<Group> {
        let intensity = self.intensity.ok_or_else(|| {
            EpiError::Configuration(format!("group spec {:?} has no configured intensities", self.spec.as_str()))
        })?;
        check_dimensions(&self.spec, self.groupings.len(), &intensity)?;

        let mut seen = HashSet::new();
        for grouping in &self.groupings {
            for &id in grouping.members() {
                if !seen.insert(id) {
                    return Err(EpiError::Configuration(format!(
                        "{id} appears in more than one grouping of {} group {}",
                        self.spec, self.id
                    )));
                }
            }
        }

        Ok(Group {
            id:        self.id,
            spec:      self.spec,
            groupings: self.groupings,
            intensity,
            closed:    false,
        })
    }
}

fn check_dimensions(spec: &GroupSpec, n_groupings: usize, intensity: &IntensityMatrix) -> EpiResult<()> {
    if intensity.dim() != n_groupings {
        return Err(EpiError::Configuration(format!(
            "{spec} intensity matrix is {0}x{0} but the group has {n_groupings} groupings",
            intensity.dim()
        )));
    }
    Ok(())
}
