//! Integration tests for epi-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{InfectionRow, PersonSnapshotRow, StepSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn read(dir: &TempDir, file: &str) -> (Vec<String>, Vec<csv::StringRecord>) {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        let rows = rdr.records().map(|r| r.unwrap()).collect();
        (headers, rows)
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("infections.csv").exists());
        assert!(dir.path().join("step_summaries.csv").exists());
        assert!(dir.path().join("person_snapshots.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(read(&dir, "infections.csv").0, ["step", "time", "recipient", "source", "group_spec"]);
        assert_eq!(
            read(&dir, "step_summaries.csv").0,
            ["step", "time", "new_infections", "total_infected"]
        );
        assert_eq!(
            read(&dir, "person_snapshots.csv").0,
            ["person_id", "step", "infected", "infection_time", "infected_by", "times_infected_others"]
        );
    }

    #[test]
    fn csv_infection_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_infection(&InfectionRow {
            step:       4,
            time:       2.5,
            recipient:  17,
            source:     Some(3),
            group_spec: "household".into(),
        })
        .unwrap();
        w.write_infection(&InfectionRow {
            step:       4,
            time:       2.5,
            recipient:  18,
            source:     None,
            group_spec: "care_home".into(),
        })
        .unwrap();
        w.finish().unwrap();

        let (_, rows) = read(&dir, "infections.csv");
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "2.5");
        assert_eq!(&rows[0][2], "17");
        assert_eq!(&rows[0][3], "3");
        assert_eq!(&rows[0][4], "household");
        assert_eq!(&rows[1][3], ""); // no source
    }

    #[test]
    fn csv_step_summary_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_step_summary(&StepSummaryRow { step: 3, time: 1.5, new_infections: 7, total_infected: 12 })
            .unwrap();
        w.finish().unwrap();

        let (_, rows) = read(&dir, "step_summaries.csv");
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "1.5");
        assert_eq!(&rows[0][2], "7");
        assert_eq!(&rows[0][3], "12");
    }

    #[test]
    fn csv_snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[
            PersonSnapshotRow {
                person_id:             0,
                step:                  2,
                infected:              true,
                infection_time:        Some(0.0),
                infected_by:           None,
                times_infected_others: 2,
            },
            PersonSnapshotRow {
                person_id:             1,
                step:                  2,
                infected:              false,
                infection_time:        None,
                infected_by:           None,
                times_infected_others: 0,
            },
        ])
        .unwrap();
        w.finish().unwrap();

        let (_, rows) = read(&dir, "person_snapshots.csv");
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][2], "1");
        assert_eq!(&rows[0][3], "0");
        assert_eq!(&rows[0][5], "2");
        assert_eq!(&rows[1][2], "0");
        assert_eq!(&rows[1][3], "");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_missing_directory_errors() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("absent")).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use tempfile::TempDir;

    use epi_core::{GroupId, GroupSpec, PersonId, SimConfig, SimTime};
    use epi_groups::{GroupBuilder, IntensityMatrix, Supergroup};
    use epi_interaction::{InteractionOptions, PairSweep};
    use epi_population::PopulationBuilder;
    use epi_sim::{SimBuilder, SimObserver};

    use crate::{CsvWriter, InfectionRow, OutputError, OutputResult, OutputWriter, PersonSnapshotRow,
                SimOutputObserver, StepSummaryRow};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    /// Fails every write after the first `ok` calls.
    struct FailingWriter {
        ok:    usize,
        calls: usize,
    }

    impl FailingWriter {
        fn tick(&mut self) -> OutputResult<()> {
            self.calls += 1;
            if self.calls > self.ok {
                Err(OutputError::Io(std::io::Error::other(format!("write {} refused", self.calls))))
            } else {
                Ok(())
            }
        }
    }

    impl OutputWriter for FailingWriter {
        fn write_infection(&mut self, _row: &InfectionRow) -> OutputResult<()> {
            self.tick()
        }
        fn write_step_summary(&mut self, _row: &StepSummaryRow) -> OutputResult<()> {
            self.tick()
        }
        fn write_snapshots(&mut self, _rows: &[PersonSnapshotRow]) -> OutputResult<()> {
            self.tick()
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.tick()
        }
    }

    #[test]
    fn first_error_kept() {
        let mut obs = SimOutputObserver::new(FailingWriter { ok: 1, calls: 0 });
        let summary = epi_sim::StepSummary::default();
        obs.on_step_end(&summary); // ok
        obs.on_step_end(&summary); // write 2 refused
        obs.on_step_end(&summary); // write 3 refused
        let err = obs.take_error().expect("stored error");
        assert!(err.to_string().contains("write 2 refused"));
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().calls, 3);
    }

    #[test]
    fn integration_csv() {
        let config = SimConfig {
            start_time:            SimTime(0.0),
            step_duration:         1.0,
            total_steps:           4,
            seed:                  1,
            output_interval_steps: 2,
        };

        let household = GroupBuilder::new(GroupId(0), GroupSpec::new("household"))
            .grouping("adults", vec![PersonId(0)])
            .grouping("children", vec![PersonId(1), PersonId(2)])
            .intensity(IntensityMatrix::from_rows(vec![vec![0.0, 1000.0], vec![0.0, 0.0]]).unwrap())
            .build()
            .unwrap();
        let mut households = Supergroup::new(GroupSpec::new("household"));
        households.add(household).unwrap();

        let options = InteractionOptions {
            pair_sweep:               PairSweep::OncePerOrderedPair,
            skip_infected_recipients: true,
            ..Default::default()
        };
        let population = PopulationBuilder::new(3).build().unwrap();
        let mut sim = SimBuilder::new(config, population, options)
            .supergroup(households)
            .build()
            .unwrap();
        sim.seed_infections(&[PersonId(0)], SimTime(0.0), 1.0).unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        let count = |file: &str| {
            csv::Reader::from_path(dir.path().join(file)).unwrap().records().count()
        };
        // Both children infected by the adult in step 0.
        assert_eq!(count("infections.csv"), 2);
        assert_eq!(count("step_summaries.csv"), 4);
        // output_interval = 2 → snapshots at steps 0 and 2 (2 × 3 persons).
        assert_eq!(count("person_snapshots.csv"), 6);

        let mut rdr = csv::Reader::from_path(dir.path().join("infections.csv")).unwrap();
        for record in rdr.records() {
            let record = record.unwrap();
            assert_eq!(&record[3], "0");
            assert_eq!(&record[4], "household");
        }
    }
}
