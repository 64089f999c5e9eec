//! Fluent builder for constructing a [`Simulation`].

use log::debug;

use epi_core::SimConfig;
use epi_groups::Supergroup;
use epi_interaction::InteractionOptions;
use epi_population::Population;

use crate::{SimError, SimResult, Simulation};

/// Fluent builder for [`Simulation`].
///
/// # Required inputs
///
/// - [`SimConfig`] — step duration, total steps, seed, …
/// - [`Population`] — every person any group refers to
/// - [`InteractionOptions`] — engine switches (`Default` for the established
///   behaviour)
/// - at least one [`Supergroup`], added with [`supergroup`](Self::supergroup)
///
/// # Example
///
/// ```rust,ignore
/// let population = PopulationBuilder::new(n).build()?;
/// let mut sim = SimBuilder::new(config, population, InteractionOptions::default())
///     .supergroup(households)
///     .supergroup(companies)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:      SimConfig,
    population:  Population,
    options:     InteractionOptions,
    supergroups: Vec<Supergroup>,
}

impl SimBuilder {
    pub fn new(config: SimConfig, population: Population, options: InteractionOptions) -> Self {
        Self { config, population, options, supergroups: Vec::new() }
    }

    /// Append a supergroup.  Supergroups run in the order they are added.
    pub fn supergroup(mut self, supergroup: Supergroup) -> Self {
        self.supergroups.push(supergroup);
        self
    }

    /// Validate inputs and return a ready-to-run [`Simulation`].
    pub fn build(self) -> SimResult<Simulation> {
        let step = self.config.step_duration;
        if !(step.is_finite() && step > 0.0) {
            return Err(SimError::Config(format!(
                "step duration must be positive, got {step}"
            )));
        }
        if self.supergroups.is_empty() {
            return Err(SimError::Config("no supergroups to simulate".into()));
        }

        for supergroup in &self.supergroups {
            for group in supergroup {
                group.validate()?;
                for grouping in group.groupings() {
                    if let Some(missing) = grouping
                        .members()
                        .iter()
                        .find(|&&id| !self.population.contains(id))
                    {
                        return Err(SimError::Config(format!(
                            "{} {} grouping '{}' refers to unknown {missing}",
                            group.spec(),
                            group.id(),
                            grouping.name()
                        )));
                    }
                }
            }
        }

        debug!(
            "built simulation: {} persons, {} supergroups, {} steps of {} days",
            self.population.len(),
            self.supergroups.len(),
            self.config.total_steps,
            step
        );
        Ok(Simulation::new(self.config, self.population, self.supergroups, self.options))
    }
}
