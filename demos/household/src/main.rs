//! household — small-town example for the epi transmission workspace.
//!
//! 240 people in 60 households of two adults and two children.  Adults
//! commute by a census-weighted mode of transport and, unless they work from
//! home, share one of six companies; children attend one of two schools.
//! Two seeded cases spread for four weeks at half-day steps.

mod logging;
mod town;

use std::collections::BTreeMap;
use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use log::info;

use epi_commute::{CommuteGenerator, ModeRegistry};
use epi_config::{InteractionConfig, ModesConfig};
use epi_core::{PersonId, SimConfig, SimRng, SimTime, Step};
use epi_output::{CsvWriter, OutputWriter, SimOutputObserver};
use epi_population::Population;
use epi_sim::{InfectionEvent, SimBuilder, SimObserver, StepSummary};

use town::{TownPlan, build_town, start_shedding};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:                  u64 = 42;
const STEP_DURATION:         f64 = 0.5; // days
const SIM_DAYS:              u64 = 28;
const STEPS_PER_DAY:         u64 = 2;
const OUTPUT_INTERVAL_STEPS: u64 = 14;  // weekly snapshot
const INFECTIOUSNESS:        f64 = 1.0;
const INITIAL_CASES:         [PersonId; 2] = [PersonId(0), PersonId(121)];

const PLAN: TownPlan = TownPlan {
    households:           60,
    companies:            6,
    schools:              2,
    child_susceptibility: 0.6,
};

// ── Embedded configuration ────────────────────────────────────────────────────

const INTERACTION_YAML: &str = "
interaction:
  pair_sweep: once_per_ordered_pair
  attribution: source_grouping
  skip_infected_recipients: true
intensities:
  household:
    - [1.0, 0.8]
    - [0.8, 1.5]
  company:
    - [0.6]
  school:
    0: {0: 2.0, 1: 0.2}
    1: {0: 0.2, 1: 2.0}
";

const MODES_YAML: &str = "
- description: Work mainly at or from home
- description: Bus, minibus or coach
- description: Bicycle
- description: On foot
";

const COMMUTE_CSV: &str = "\
date,geography,geography code,Method: Work mainly at or from home; measures: Value,\"Method: Bus, minibus or coach; measures: Value\",Method: Bicycle; measures: Value,Method: On foot; measures: Value
2011,Leeds 001,E02002330,46,310,52,188
2011,Leeds 002,E02002331,21,96,130,240
";

// ── Observer wrapper to count events ──────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:    SimOutputObserver<W>,
    by_spec:  BTreeMap<String, usize>,
    steps:    usize,
    infected: usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, by_spec: BTreeMap::new(), steps: 0, infected: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_infection(&mut self, event: &InfectionEvent) {
        *self.by_spec.entry(event.group_spec.to_string()).or_insert(0) += 1;
        self.inner.on_infection(event);
    }

    fn on_step_end(&mut self, summary: &StepSummary) {
        self.steps += 1;
        self.infected = summary.total_infected;
        self.inner.on_step_end(summary);
    }

    fn on_snapshot(&mut self, step: Step, population: &Population) {
        self.inner.on_snapshot(step, population);
    }

    fn on_sim_end(&mut self, final_step: Step) {
        self.inner.on_sim_end(final_step);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    logging::init()?;

    println!("=== household — contact-based transmission ===");
    println!(
        "Households: {}  |  Days: {SIM_DAYS}  |  Step: {STEP_DURATION} d  |  Seed: {SEED}",
        PLAN.households
    );
    println!();

    // 1. Configuration.
    let interaction = InteractionConfig::from_yaml_str(INTERACTION_YAML)?;
    let registry = ModeRegistry::from_config(&ModesConfig::from_yaml_str(MODES_YAML)?);
    let commute = CommuteGenerator::from_reader(Cursor::new(COMMUTE_CSV), &registry)?;
    info!("{} modes of transport, {} commute areas", registry.len(), commute.len());

    // 2. Town.  Commute draws use their own stream so the epidemic does not
    //    depend on how many adults were placed.
    let mut root = SimRng::new(SEED);
    let mut commute_rng = root.child(1);
    let town = build_town(&PLAN, &interaction.intensities, &commute, &mut commute_rng)?;

    println!("{:<32} {:>6}", "Mode of transport", "Adults");
    println!("{}", "-".repeat(39));
    for (mode, count) in &town.mode_counts {
        println!("{:<32} {:>6}", mode.description(), count);
    }
    println!();

    // 3. Simulation.
    let config = SimConfig {
        start_time:            SimTime::ZERO,
        step_duration:         STEP_DURATION,
        total_steps:           SIM_DAYS * STEPS_PER_DAY,
        seed:                  SEED,
        output_interval_steps: OUTPUT_INTERVAL_STEPS,
    };
    let mut builder = SimBuilder::new(config, town.population, interaction.options);
    for supergroup in town.supergroups {
        builder = builder.supergroup(supergroup);
    }
    let mut sim = builder.build()?;
    sim.seed_infections(&INITIAL_CASES, SimTime::ZERO, INFECTIOUSNESS)?;

    // 4. Output.
    std::fs::create_dir_all("output/household")?;
    let writer = CsvWriter::new(Path::new("output/household"))?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    // 5. Run day by day; new cases start shedding the following day.
    let t0 = Instant::now();
    while sim.clock.current_step < sim.config.end_step() {
        sim.run_steps(STEPS_PER_DAY, &mut obs)?;
        let shedding = start_shedding(&mut sim.population, INFECTIOUSNESS)?;
        if shedding > 0 {
            info!("day {}: {shedding} new cases now infectious", sim.clock.elapsed_days());
        }
    }
    obs.on_sim_end(sim.clock.current_step);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    println!("Simulation complete in {:.3} s ({} steps)", elapsed.as_secs_f64(), obs.steps);
    println!(
        "Infected at end: {} of {} ({:.1}%)",
        obs.infected,
        sim.population.len(),
        100.0 * obs.infected as f64 / sim.population.len() as f64
    );
    println!();

    println!("{:<12} {:>10}", "Setting", "Infections");
    println!("{}", "-".repeat(23));
    for (spec, count) in &obs.by_spec {
        println!("{spec:<12} {count:>10}");
    }
    println!();

    let mut spreaders: Vec<_> = sim
        .population
        .iter()
        .filter(|p| p.counter().times_infected_others > 0)
        .collect();
    spreaders.sort_by_key(|p| std::cmp::Reverse(p.counter().times_infected_others));
    println!("{:<14} {:>8}", "Top spreaders", "Infected");
    println!("{}", "-".repeat(23));
    for p in spreaders.iter().take(5) {
        println!("{:<14} {:>8}", p.id().to_string(), p.counter().times_infected_others);
    }

    Ok(())
}
