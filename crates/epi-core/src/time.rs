//! Simulation time model.
//!
//! # Design
//!
//! Steps are counted with an integer `Step`; the simulated clock time of a
//! step is held as a real number of days in `SimTime`:
//!
//!   time = start_time + step * step_duration
//!
//! The engine itself only ever sees two reals per tick: the absolute
//! `current_time` and the elapsed `delta_time` used by the hazard model.

use std::fmt;

// ── SimTime ──────────────────────────────────────────────────────────────────

/// Absolute simulated time, in days since the reference origin.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    #[inline]
    pub fn days(self) -> f64 {
        self.0
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {:.3}", self.0)
    }
}

// ── Step ─────────────────────────────────────────────────────────────────────

/// An absolute simulation step counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step(pub u64);

impl Step {
    pub const ZERO: Step = Step(0);
}

impl std::ops::Add<u64> for Step {
    type Output = Step;
    #[inline]
    fn add(self, rhs: u64) -> Step {
        Step(self.0 + rhs)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between step counts and simulated time.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Simulated time of step 0.
    pub start_time: SimTime,
    /// Days covered by one step (the `delta_time` handed to every group).
    pub step_duration: f64,
    /// The current step — advanced by `SimClock::advance()` each iteration.
    pub current_step: Step,
}

impl SimClock {
    pub fn new(start_time: SimTime, step_duration: f64) -> Self {
        Self {
            start_time,
            step_duration,
            current_step: Step::ZERO,
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_step = self.current_step + 1;
    }

    /// Simulated time at the start of the current step.
    #[inline]
    pub fn current_time(&self) -> SimTime {
        self.time_of(self.current_step)
    }

    #[inline]
    pub fn time_of(&self, step: Step) -> SimTime {
        self.start_time + step.0 as f64 * self.step_duration
    }

    /// Whole days elapsed since `start_time`.
    pub fn elapsed_days(&self) -> u64 {
        (self.current_time() - self.start_time).max(0.0).floor() as u64
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.current_step, self.current_time())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Simulated time of step 0.
    pub start_time: SimTime,

    /// Days per step.  Must be positive.
    pub step_duration: f64,

    /// Total steps to simulate.  Two weeks at half-day steps: 28.
    pub total_steps: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Snapshot every N steps.  `0` disables snapshots.
    pub output_interval_steps: u64,
}

impl SimConfig {
    /// The step at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_step(&self) -> Step {
        Step(self.total_steps)
    }

    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.start_time, self.step_duration)
    }
}
