//! The `Population` store: owner of every `Person`.
//!
//! Persons live in one `Vec` and the `PersonId` value is the index into it:
//!
//! ```ignore
//! let p = population.get(id)?;   // O(1)
//! ```
//!
//! Groups and groupings only hold IDs.  The transmission engine takes
//! `&mut Population` for one tick, so two groups can never mutate the same
//! person concurrently.

use epi_core::{EpiError, EpiResult, PersonId, SimTime};

use crate::Person;

/// Storage for all persons in a simulation.
#[derive(Clone, Debug, Default)]
pub struct Population {
    people: Vec<Person>,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a susceptible person and return their ID.
    pub fn add(&mut self, susceptibility: f64) -> EpiResult<PersonId> {
        let id = PersonId::try_from(self.people.len())
            .map_err(|_| EpiError::Configuration("population exceeds u32::MAX persons".into()))?;
        self.people.push(Person::new(id, susceptibility)?);
        Ok(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: PersonId) -> bool {
        id.index() < self.people.len()
    }

    pub fn get(&self, id: PersonId) -> EpiResult<&Person> {
        self.people.get(id.index()).ok_or(EpiError::PersonNotFound(id))
    }

    pub fn get_mut(&mut self, id: PersonId) -> EpiResult<&mut Person> {
        self.people.get_mut(id.index()).ok_or(EpiError::PersonNotFound(id))
    }

    /// Iterator over every person in ascending `PersonId` order.
    pub fn iter(&self) -> impl Iterator<Item = &Person> + '_ {
        self.people.iter()
    }

    /// Number of persons currently flagged infected.
    pub fn infected_count(&self) -> usize {
        self.people.iter().filter(|p| p.is_infected()).count()
    }

    /// Seed an infection from outside the contact engine (initial cases,
    /// imported cases).  No source is credited and no history entry is made.
    pub fn seed_infection(
        &mut self,
        id:             PersonId,
        time:           SimTime,
        infectiousness: f64,
    ) -> EpiResult<()> {
        let person = self.get_mut(id)?;
        person.set_infectiousness(infectiousness)?;
        person.infect_at(time, None);
        Ok(())
    }
}
