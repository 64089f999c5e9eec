//! Unit tests for configuration loading.

use epi_core::{EpiError, GroupSpec};

use crate::*;

const INTENSITIES: &str = "
intensities:
  household:
    - [1.0, 0.5]
    - [0.25, 1.0]
  company:
    0: {0: 2.0, 1: 0.3}
    2: {2: 1}
";

// ── Intensities ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod intensity_tests {
    use super::*;

    fn config() -> IntensityConfig {
        IntensityConfig::from_yaml_str(INTENSITIES).unwrap()
    }

    #[test]
    fn dense_matrix_kept_asymmetric() {
        let m = config().intensity_matrix(&GroupSpec::new("household"), 2).unwrap();
        assert_eq!(m.dim(), 2);
        assert_eq!(m.get(0, 1), 0.5);
        assert_eq!(m.get(1, 0), 0.25);
    }

    #[test]
    fn sparse_matrix_fills_zeros() {
        let m = config().intensity_matrix(&GroupSpec::new("company"), 3).unwrap();
        assert_eq!(m.get(0, 0), 2.0);
        assert_eq!(m.get(0, 1), 0.3);
        assert_eq!(m.get(2, 2), 1.0);
        assert_eq!(m.get(1, 1), 0.0);
        assert_eq!(m.get(1, 0), 0.0);
    }

    #[test]
    fn sparse_index_out_of_range_rejected() {
        let err = config().intensity_matrix(&GroupSpec::new("company"), 2).unwrap_err();
        assert!(matches!(err, EpiError::Configuration(_)));
    }

    #[test]
    fn dense_dimension_mismatch_rejected() {
        let err = config().intensity_matrix(&GroupSpec::new("household"), 3).unwrap_err();
        assert!(matches!(err, EpiError::Configuration(_)));
    }

    #[test]
    fn unknown_spec_is_an_error() {
        let cfg = config();
        assert!(!cfg.contains(&GroupSpec::new("school")));
        let err = cfg.intensity_matrix(&GroupSpec::new("school"), 1).unwrap_err();
        assert!(err.to_string().contains("no configured intensities"));
    }

    #[test]
    fn negative_entry_rejected() {
        let cfg = IntensityConfig::from_yaml_str("intensities:\n  pub: [[-1.0]]\n").unwrap();
        let err = cfg.intensity_matrix(&GroupSpec::new("pub"), 1).unwrap_err();
        assert!(matches!(err, EpiError::InvalidNumericInput { .. }));
    }

    #[test]
    fn specs_are_sorted() {
        assert_eq!(config().specs().collect::<Vec<_>>(), vec!["company", "household"]);
    }

    #[test]
    fn insert_overrides() {
        let mut cfg = config();
        cfg.insert(&GroupSpec::new("household"), IntensitySpec::Dense(vec![vec![3.0]]));
        let m = cfg.intensity_matrix(&GroupSpec::new("household"), 1).unwrap();
        assert_eq!(m.get(0, 0), 3.0);
    }

    #[test]
    fn malformed_yaml_is_reported() {
        let err = IntensityConfig::from_yaml_str("intensities: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml { .. }));
        assert!(matches!(EpiError::from(err), EpiError::Parse(_)));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("interaction.yaml");
        std::fs::write(&path, INTENSITIES).unwrap();
        assert_eq!(IntensityConfig::from_file(&path).unwrap(), config());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = IntensityConfig::from_file(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(matches!(EpiError::from(err), EpiError::Io(_)));
    }
}

// ── Interaction document ──────────────────────────────────────────────────────

#[cfg(test)]
mod interaction_tests {
    use epi_interaction::{InteractionOptions, PairSweep, SourceAttribution};

    use super::*;

    #[test]
    fn options_default_when_absent() {
        let cfg = InteractionConfig::from_yaml_str(INTENSITIES).unwrap();
        assert_eq!(cfg.options, InteractionOptions::default());
        assert!(cfg.intensities.contains(&GroupSpec::new("company")));
    }

    #[test]
    fn options_parsed() {
        let yaml = format!(
            "interaction:\n  pair_sweep: once_per_ordered_pair\n  attribution: source_grouping\n{INTENSITIES}"
        );
        let cfg = InteractionConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(cfg.options.pair_sweep, PairSweep::OncePerOrderedPair);
        assert_eq!(cfg.options.attribution, SourceAttribution::SourceGrouping);
        assert!(!cfg.options.skip_infected_recipients);
        assert!(cfg.intensities.intensity_matrix(&GroupSpec::new("household"), 2).is_ok());
    }

    #[test]
    fn unknown_sweep_rejected() {
        let err = InteractionConfig::from_yaml_str("interaction:\n  pair_sweep: sometimes\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml { .. }));
    }
}

// ── Modes of transport ────────────────────────────────────────────────────────

#[cfg(test)]
mod modes_tests {
    use super::*;

    #[test]
    fn list_in_document_order() {
        let cfg = ModesConfig::from_yaml_str(
            "- description: Bus, minibus or coach\n- description: Bicycle\n- description: Bicycle\n",
        )
        .unwrap();
        assert_eq!(
            cfg.descriptions().collect::<Vec<_>>(),
            vec!["Bus, minibus or coach", "Bicycle", "Bicycle"]
        );
    }

    #[test]
    fn entry_without_description_rejected() {
        assert!(ModesConfig::from_yaml_str("- name: Bus\n").is_err());
    }
}
