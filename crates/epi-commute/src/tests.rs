//! Unit tests for commute mode assignment.

use std::io::Cursor;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::rngs::mock::StepRng;

use epi_config::ModesConfig;
use epi_core::EpiError;

use crate::*;

const MODES: &str = "
- description: Bus, minibus or coach
- description: Bicycle
- description: Work mainly at or from home
";

const TABLE: &str = "\
date,geography,geography code,\"Method: Bus, minibus or coach; measures: Value\",Method: Bicycle; measures: Value,Method: Bicycle (electric); measures: Value,Method: Work mainly at or from home; measures: Value
2011,Leeds 001,E02002330,120,15,99,5
2011,Leeds 002,E02002331,0,40,1,0
2011,Leeds 003,E02002332,0,0,0,0
";

fn registry() -> ModeRegistry {
    ModeRegistry::from_config(&ModesConfig::from_yaml_str(MODES).unwrap())
}

fn generator() -> CommuteGenerator {
    CommuteGenerator::from_reader(Cursor::new(TABLE), &registry()).unwrap()
}

// ── Modes ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod mode_tests {
    use super::*;

    #[test]
    fn equality_by_description() {
        let a = ModeOfTransport::new("Bicycle");
        assert_eq!(a, ModeOfTransport::new("Bicycle"));
        assert_ne!(a, ModeOfTransport::new("Bus"));
        assert!(a == "Bicycle");
        assert_eq!(a.to_string(), "Bicycle");
        assert_eq!(format!("{a:?}"), "<ModeOfTransport Bicycle>");
    }

    #[test]
    fn first_containing_header_wins() {
        let headers = ["Bicycle (electric)", "Bicycle", "Bus"];
        assert_eq!(ModeOfTransport::new("Bicycle").column_in(&headers), Some(0));
        assert_eq!(ModeOfTransport::new("Train").column_in(&headers), None);
    }

    #[test]
    fn registry_deduplicates() {
        let cfg = ModesConfig::from_yaml_str("- description: Bus\n- description: Bus\n").unwrap();
        let mut reg = ModeRegistry::from_config(&cfg);
        assert_eq!(reg.len(), 1);
        let again = reg.intern("Bus");
        assert_eq!(reg.len(), 1);
        assert_eq!(&again, reg.get("Bus").unwrap());
        reg.intern("Train");
        assert_eq!(
            reg.iter().map(|m| m.description()).collect::<Vec<_>>(),
            vec!["Bus", "Train"]
        );
    }
}

// ── Regional generator ────────────────────────────────────────────────────────

#[cfg(test)]
mod regional_tests {
    use super::*;

    fn bus_and_bike(bus: u32, bike: u32) -> RegionalGenerator {
        RegionalGenerator::new(
            "A1",
            vec![(bus, ModeOfTransport::new("Bus")), (bike, ModeOfTransport::new("Bicycle"))],
        )
    }

    #[test]
    fn totals_and_weights() {
        let g = bus_and_bike(30, 10);
        assert_eq!(g.area(), "A1");
        assert_eq!(g.total(), 40);
        assert_eq!(g.weights(), vec![0.75, 0.25]);
        assert_eq!(g.modes().map(|m| m.description()).collect::<Vec<_>>(), vec!["Bus", "Bicycle"]);
    }

    #[test]
    fn zero_count_mode_never_chosen() {
        let g = bus_and_bike(0, 10);
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..1_000 {
            assert_eq!(g.weighted_random_choice(&mut rng).unwrap(), &"Bicycle");
        }
    }

    #[test]
    fn empty_area_cannot_choose() {
        let g = bus_and_bike(0, 0);
        assert_eq!(g.weights(), vec![0.0, 0.0]);
        assert!(matches!(
            g.weighted_random_choice(&mut StepRng::new(0, 0)),
            Err(EpiError::EmptyOrZeroWeight)
        ));
    }

    #[test]
    fn frequencies_follow_counts() {
        let g = bus_and_bike(3, 1);
        let mut rng = SmallRng::seed_from_u64(11);
        let n = 40_000;
        let bus = (0..n)
            .filter(|_| g.weighted_random_choice(&mut rng).unwrap() == &"Bus")
            .count();
        let share = bus as f64 / n as f64;
        assert!((share - 0.75).abs() < 0.01, "bus share {share}");
    }
}

// ── CSV loading ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod generator_tests {
    use super::*;

    #[test]
    fn loads_every_area() {
        let generator = generator();
        assert_eq!(generator.len(), 3);
        let mut areas: Vec<_> = generator.areas().collect();
        areas.sort_unstable();
        assert_eq!(areas, vec!["E02002330", "E02002331", "E02002332"]);
    }

    #[test]
    fn counts_follow_registry_order() {
        let generator = generator();
        let leeds = generator.regional_gen("E02002330").unwrap();
        let counts: Vec<(u32, &str)> = leeds
            .weighted_modes()
            .iter()
            .map(|(n, m)| (*n, m.description()))
            .collect();
        // "Bicycle" resolves to the plain column, not the electric one after it.
        assert_eq!(
            counts,
            vec![(120, "Bus, minibus or coach"), (15, "Bicycle"), (5, "Work mainly at or from home")]
        );
    }

    #[test]
    fn shares_handles_with_registry() {
        let reg = registry();
        let generator = CommuteGenerator::from_reader(Cursor::new(TABLE), &reg).unwrap();
        let chosen = generator
            .regional_gen("E02002331")
            .unwrap()
            .weighted_random_choice(&mut StepRng::new(0, 0))
            .unwrap();
        assert_eq!(chosen, reg.get("Bicycle").unwrap());
    }

    #[test]
    fn unknown_area_is_configuration_error() {
        assert!(matches!(
            generator().regional_gen("W00000001"),
            Err(EpiError::Configuration(_))
        ));
    }

    #[test]
    fn missing_area_column_rejected() {
        let table = "code,Bus\nA1,3\n";
        let mut reg = ModeRegistry::new();
        reg.intern("Bus");
        let err = CommuteGenerator::from_reader(Cursor::new(table), &reg).unwrap_err();
        assert!(matches!(err, EpiError::Configuration(_)));
    }

    #[test]
    fn missing_mode_column_rejected() {
        let table = "geography code,Bus\nA1,3\n";
        let mut reg = ModeRegistry::new();
        reg.intern("Train");
        let err = CommuteGenerator::from_reader(Cursor::new(table), &reg).unwrap_err();
        assert!(err.to_string().contains("Train"));
    }

    #[test]
    fn non_integer_count_is_parse_error() {
        let table = "geography code,Bus\nA1,lots\n";
        let mut reg = ModeRegistry::new();
        reg.intern("Bus");
        let err = CommuteGenerator::from_reader(Cursor::new(table), &reg).unwrap_err();
        assert!(matches!(err, EpiError::Parse(ref msg) if msg.contains("lots")));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("commute.csv");
        std::fs::write(&path, TABLE).unwrap();
        let generator = CommuteGenerator::from_file(&path, &registry()).unwrap();
        assert_eq!(generator.regional_gen("E02002332").unwrap().total(), 0);
    }
}
