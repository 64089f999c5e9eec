//! Sub-populations within a group.

use epi_core::{EpiResult, PersonId};
use epi_population::{Person, Population};

/// An ordered sub-population of a [`Group`](crate::Group): the teachers and
/// pupils of a school, the adults and children of a household.
///
/// Holds member IDs only.  The infected subset is derived from the
/// population each time it is asked for, so it is always current.
#[derive(Clone, Debug, Default)]
pub struct Grouping {
    name:    String,
    members: Vec<PersonId>,
}

impl Grouping {
    pub fn new(name: impl Into<String>, members: Vec<PersonId>) -> Self {
        Self { name: name.into(), members }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn members(&self) -> &[PersonId] {
        &self.members
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, id: PersonId) -> bool {
        self.members.contains(&id)
    }

    /// Members currently flagged infected, in membership order.  A member
    /// missing from `population` is `PersonNotFound`.
    pub fn infected<'a>(&self, population: &'a Population) -> EpiResult<Vec<&'a Person>> {
        let mut infected = Vec::new();
        for &id in &self.members {
            let person = population.get(id)?;
            if person.is_infected() {
                infected.push(person);
            }
        }
        Ok(infected)
    }
}
