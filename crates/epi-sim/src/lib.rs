//! `epi-sim` — step loop orchestrator for the epi transmission workspace.
//!
//! # Step loop
//!
//! ```text
//! for step in 0..config.total_steps:
//!   time = start_time + step · step_duration
//!   ① Groups   — for each supergroup (insertion order), for each group:
//!                  run_timestep(group, population, step_duration, time, rng, options)
//!   ② Events   — history records added this step → on_infection
//!   ③ Summary  — on_step_end, then on_snapshot every output_interval_steps
//! ```
//!
//! All groups share one `&mut Population` and one seeded RNG, so a run is
//! reproducible from `config.seed` and group order alone.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use epi_core::{SimConfig, SimTime};
//! use epi_interaction::InteractionOptions;
//! use epi_population::PopulationBuilder;
//! use epi_sim::{NoopObserver, SimBuilder};
//!
//! let population = PopulationBuilder::new(1_000).build()?;
//! let mut sim = SimBuilder::new(config, population, InteractionOptions::default())
//!     .supergroup(households)
//!     .build()?;
//! sim.seed_infections(&seeds, SimTime::ZERO, 1.0)?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{InfectionEvent, NoopObserver, SimObserver, StepSummary};
pub use sim::Simulation;
