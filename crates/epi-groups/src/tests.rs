//! Unit tests for epi-groups.

use epi_core::{GroupId, GroupSpec, PersonId};

use crate::{Group, GroupBuilder, IntensityMatrix};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn ids(range: std::ops::Range<u32>) -> Vec<PersonId> {
    range.map(PersonId).collect()
}

fn household(id: u32) -> Group {
    GroupBuilder::new(GroupId(id), GroupSpec::new("household"))
        .grouping("adults", ids(0..2))
        .grouping("children", ids(2..5))
        .intensity(IntensityMatrix::from_rows(vec![vec![1.0, 0.5], vec![2.0, 1.0]]).unwrap())
        .build()
        .unwrap()
}

// ── IntensityMatrix ───────────────────────────────────────────────────────────

#[cfg(test)]
mod intensity_tests {
    use epi_core::EpiError;

    use super::*;

    #[test]
    fn asymmetric_entries_are_kept() {
        let m = IntensityMatrix::from_rows(vec![vec![0.0, 1.0], vec![3.0, 0.0]]).unwrap();
        assert_eq!(m.dim(), 2);
        assert_eq!(m.get(0, 1), 1.0);
        assert_eq!(m.get(1, 0), 3.0);
    }

    #[test]
    fn ragged_rows_are_a_configuration_error() {
        let err = IntensityMatrix::from_rows(vec![vec![1.0, 1.0], vec![1.0]]).unwrap_err();
        assert!(matches!(err, EpiError::Configuration(_)));
    }

    #[test]
    fn negative_entry_is_invalid_input() {
        let err = IntensityMatrix::from_rows(vec![vec![-1.0]]).unwrap_err();
        assert!(matches!(err, EpiError::InvalidNumericInput { what: "intensity", .. }));
    }

    #[test]
    fn set_checks_bounds_and_sign() {
        let mut m = IntensityMatrix::zeros(2);
        m.set(1, 0, 0.25).unwrap();
        assert_eq!(m.get(1, 0), 0.25);
        assert!(m.set(2, 0, 1.0).is_err());
        assert!(m.set(0, 0, -0.5).is_err());
    }

    #[test]
    fn uniform_fills_every_entry() {
        let m = IntensityMatrix::uniform(3, 0.5).unwrap();
        assert!(m.rows().all(|row| row.iter().all(|&v| v == 0.5)));
        assert_eq!(m.rows().count(), 3);
    }
}

// ── Group / GroupBuilder ──────────────────────────────────────────────────────

#[cfg(test)]
mod group_tests {
    use epi_core::{EpiError, SimTime};
    use epi_population::PopulationBuilder;

    use super::*;

    #[test]
    fn size_counts_all_groupings() {
        let g = household(0);
        assert_eq!(g.size(), 5);
        assert_eq!(g.n_groupings(), 2);
        assert_eq!(g.groupings()[1].name(), "children");
        assert!(g.must_timestep());
        assert!(g.validate().is_ok());
    }

    #[test]
    fn mismatched_matrix_fails_fast() {
        let err = GroupBuilder::new(GroupId(0), GroupSpec::new("school"))
            .grouping("teachers", ids(0..1))
            .grouping("pupils", ids(1..4))
            .intensity(IntensityMatrix::uniform(3, 1.0).unwrap())
            .build()
            .unwrap_err();
        assert!(matches!(err, EpiError::Configuration(_)));
    }

    #[test]
    fn missing_intensities_fail_fast() {
        let err = GroupBuilder::new(GroupId(0), GroupSpec::new("school"))
            .grouping("pupils", ids(0..4))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("no configured intensities"));
    }

    #[test]
    fn overlapping_groupings_rejected() {
        let err = GroupBuilder::new(GroupId(0), GroupSpec::new("company"))
            .grouping("a", ids(0..3))
            .grouping("b", ids(2..4))
            .intensity(IntensityMatrix::uniform(2, 1.0).unwrap())
            .build()
            .unwrap_err();
        assert!(matches!(err, EpiError::Configuration(_)));
    }

    #[test]
    fn empty_or_closed_groups_skip_timestep() {
        let empty = GroupBuilder::new(GroupId(1), GroupSpec::new("company"))
            .grouping("workers", Vec::new())
            .intensity(IntensityMatrix::uniform(1, 1.0).unwrap())
            .build()
            .unwrap();
        assert_eq!(empty.size(), 0);
        assert!(!empty.must_timestep());

        let mut g = household(2);
        g.close();
        assert!(g.is_closed());
        assert!(!g.must_timestep());
        g.reopen();
        assert!(g.must_timestep());
    }

    #[test]
    fn infected_subset_is_derived_from_population() {
        let mut pop = PopulationBuilder::new(5).build().unwrap();
        let g = household(0);
        assert!(g.groupings()[1].infected(&pop).unwrap().is_empty());

        pop.seed_infection(PersonId(3), SimTime(0.0), 1.0).unwrap();
        let infected: Vec<PersonId> =
            g.groupings()[1].infected(&pop).unwrap().iter().map(|p| p.id()).collect();
        assert_eq!(infected, vec![PersonId(3)]);
        assert!(g.groupings()[0].infected(&pop).unwrap().is_empty());
    }

    #[test]
    fn infected_subset_reports_missing_members() {
        let pop = PopulationBuilder::new(3).build().unwrap();
        let g = household(0);
        assert!(g.groupings()[0].infected(&pop).is_ok());
        assert!(matches!(
            g.groupings()[1].infected(&pop),
            Err(EpiError::PersonNotFound(PersonId(3)))
        ));
    }
}

// ── Supergroup ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod supergroup_tests {
    use crate::Supergroup;

    use super::*;

    #[test]
    fn add_and_lookup() {
        let mut sg = Supergroup::new(GroupSpec::new("household"));
        sg.add(household(0)).unwrap();
        sg.add(household(1)).unwrap();
        assert_eq!(sg.len(), 2);
        assert!(sg.get(GroupId(1)).is_some());
        assert!(sg.get(GroupId(7)).is_none());
        let order: Vec<GroupId> = sg.iter().map(Group::id).collect();
        assert_eq!(order, vec![GroupId(0), GroupId(1)]);
    }

    #[test]
    fn rejects_wrong_spec_and_duplicate_ids() {
        let mut sg = Supergroup::new(GroupSpec::new("company"));
        assert!(sg.add(household(0)).is_err());

        let mut hh = Supergroup::new(GroupSpec::new("household"));
        hh.add(household(0)).unwrap();
        assert!(hh.add(household(0)).is_err());
    }

    #[test]
    fn extend_merges_and_clear_empties() {
        let mut a = Supergroup::new(GroupSpec::new("household"));
        a.add(household(0)).unwrap();
        let mut b = Supergroup::new(GroupSpec::new("household"));
        b.add(household(1)).unwrap();
        a.extend(b).unwrap();
        assert_eq!(a.len(), 2);
        a.clear();
        assert!(a.is_empty());
    }
}
