//! Per-person infection state.

use epi_core::{EpiResult, GroupSpec, PersonId, SimTime, non_negative};

/// One recorded infection of a person.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfectionRecord {
    pub time:       SimTime,
    /// Type label of the group in which the infection happened.
    pub group_spec: GroupSpec,
}

/// Bookkeeping counters updated by the transmission engine.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfectionCounter {
    /// How many infections this person has been credited with.
    pub times_infected_others: u32,
    /// Every infection this person received, oldest first.
    pub infection_history: Vec<InfectionRecord>,
}

impl InfectionCounter {
    #[inline]
    pub fn increment_infected(&mut self) {
        self.times_infected_others += 1;
    }

    pub fn update_infection_data(&mut self, time: SimTime, group_spec: GroupSpec) {
        self.infection_history.push(InfectionRecord { time, group_spec });
    }
}

/// An individual.
///
/// `susceptibility` and `infectiousness` are validated non-negative on every
/// write, so the hazard model can rely on them.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    id:             PersonId,
    susceptibility: f64,
    infectiousness: f64,
    infected:       bool,
    infection_time: Option<SimTime>,
    infected_by:    Option<PersonId>,
    counter:        InfectionCounter,
}

impl Person {
    /// A susceptible, uninfected person.
    pub fn new(id: PersonId, susceptibility: f64) -> EpiResult<Self> {
        Ok(Self {
            id,
            susceptibility: non_negative("susceptibility", susceptibility)?,
            infectiousness: 0.0,
            infected:       false,
            infection_time: None,
            infected_by:    None,
            counter:        InfectionCounter::default(),
        })
    }

    #[inline]
    pub fn id(&self) -> PersonId {
        self.id
    }

    #[inline]
    pub fn susceptibility(&self) -> f64 {
        self.susceptibility
    }

    /// Current transmission probability contributed while infected.
    #[inline]
    pub fn infectiousness(&self) -> f64 {
        self.infectiousness
    }

    pub fn set_infectiousness(&mut self, value: f64) -> EpiResult<()> {
        self.infectiousness = non_negative("infectiousness", value)?;
        Ok(())
    }

    #[inline]
    pub fn is_infected(&self) -> bool {
        self.infected
    }

    pub fn infection_time(&self) -> Option<SimTime> {
        self.infection_time
    }

    /// Who was credited with the most recent infection.  `None` for seeded
    /// cases and people never infected.
    pub fn infected_by(&self) -> Option<PersonId> {
        self.infected_by
    }

    pub fn counter(&self) -> &InfectionCounter {
        &self.counter
    }

    pub fn counter_mut(&mut self) -> &mut InfectionCounter {
        &mut self.counter
    }

    /// Mark infected at `time`.  Re-infecting an infected person overwrites
    /// the time and source.
    pub fn infect_at(&mut self, time: SimTime, source: Option<PersonId>) {
        self.infected = true;
        self.infection_time = Some(time);
        self.infected_by = source;
    }
}
