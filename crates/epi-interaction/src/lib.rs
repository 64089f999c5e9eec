//! `epi-interaction` — the contact-based transmission engine.
//!
//! # Per-group timestep
//!
//! ```text
//! run_timestep(group, population, delta_time, current_time, rng, options):
//!   if !group.must_timestep(): return
//!   ① Aggregate — for each grouping g (in order):
//!        probabilities[g] = Σ infectiousness(p) / max(1, group.size)
//!                           over infected p in g
//!        weights         += (p, infectiousness(p))   (one flat list)
//!   ② Sweep     — for i in 0..n, for j in 0..n:
//!        evaluate(i → j)
//!        if i != j and sweep == Duplicated: evaluate(j → i)
//!   ③ Evaluate  — skip if intensity[i][j] <= 0 or probabilities[i] <= 0;
//!        for each member p of grouping j:
//!          prob = 1 − exp(−Δt · susceptibility(p) · intensity[i][j] · probabilities[i])
//!          if uniform() <= prob: credit a source drawn by weight,
//!                                mark p infected, update counters
//! ```
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`options`]   | `InteractionOptions`, `PairSweep`, `SourceAttribution`      |
//! | [`hazard`]    | `transmission_probability`                                  |
//! | [`aggregate`] | `TimestepContext` — per-tick probabilities and weights      |
//! | [`evaluate`]  | `evaluate_pair` — one (source, recipient) grouping pair     |
//! | [`timestep`]  | `run_timestep`, `SupergroupTimestep`, `TimestepSummary`     |
//!
//! # Randomness
//!
//! Every entry point takes `&mut R where R: rand::Rng + ?Sized`.  Pass a
//! seeded generator for reproducible runs, or
//! `rand::rngs::mock::StepRng` in tests to force draws.

pub mod aggregate;
pub mod evaluate;
pub mod hazard;
pub mod options;
pub mod timestep;


pub use aggregate::TimestepContext;
pub use evaluate::evaluate_pair;
pub use hazard::transmission_probability;
pub use options::{InteractionOptions, PairSweep, SourceAttribution};
pub use timestep::{SupergroupTimestep, TimestepSummary, run_timestep};
