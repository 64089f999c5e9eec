//! Synthetic town: households, companies and schools.
//!
//! Household `h` holds persons `4h..4h+4`: two adults, then two children.
//! Even households live in the first area, odd ones in the second.  Adults
//! draw a commute mode from their area's census counts; anyone who works
//! from home is not placed in a company.

use std::collections::BTreeMap;

use epi_commute::{CommuteGenerator, ModeOfTransport};
use epi_config::IntensityConfig;
use epi_core::{EpiResult, GroupId, GroupSpec, PersonId, SimRng};
use epi_groups::{GroupBuilder, Supergroup};
use epi_population::{Population, PopulationBuilder};

pub const AREAS: [&str; 2] = ["E02002330", "E02002331"];
pub const WORK_FROM_HOME: &str = "Work mainly at or from home";

pub struct TownPlan {
    pub households:           usize,
    pub companies:            usize,
    pub schools:              usize,
    pub child_susceptibility: f64,
}

pub struct Town {
    pub population:  Population,
    pub supergroups: Vec<Supergroup>,
    pub mode_counts: BTreeMap<ModeOfTransport, usize>,
}

fn person(i: usize) -> PersonId {
    PersonId(i as u32)
}

pub fn build_town(
    plan:        &TownPlan,
    intensities: &IntensityConfig,
    commute:     &CommuteGenerator,
    rng:         &mut SimRng,
) -> EpiResult<Town> {
    let person_count = plan.households * 4;
    let mut builder = PopulationBuilder::new(person_count);
    for h in 0..plan.households {
        builder = builder
            .with_susceptibility(4 * h + 2, plan.child_susceptibility)
            .with_susceptibility(4 * h + 3, plan.child_susceptibility);
    }
    let population = builder.build()?;

    // ── Households ────────────────────────────────────────────────────────
    let spec = GroupSpec::from_type_name("Household");
    let mut households = Supergroup::new(spec.clone());
    for h in 0..plan.households {
        let group = GroupBuilder::new(GroupId(h as u32), spec.clone())
            .grouping("adults", vec![person(4 * h), person(4 * h + 1)])
            .grouping("children", vec![person(4 * h + 2), person(4 * h + 3)])
            .intensity(intensities.intensity_matrix(&spec, 2)?)
            .build()?;
        households.add(group)?;
    }

    // ── Commute and companies ─────────────────────────────────────────────
    let mut mode_counts = BTreeMap::new();
    let mut workers: Vec<Vec<PersonId>> = vec![Vec::new(); plan.companies];
    let mut placed = 0;
    for h in 0..plan.households {
        let area = commute.regional_gen(AREAS[h % AREAS.len()])?;
        for adult in [4 * h, 4 * h + 1] {
            let mode = area.weighted_random_choice(rng.inner())?;
            *mode_counts.entry(mode.clone()).or_insert(0) += 1;
            if *mode != WORK_FROM_HOME {
                workers[placed % plan.companies].push(person(adult));
                placed += 1;
            }
        }
    }

    let spec = GroupSpec::from_type_name("Company");
    let mut companies = Supergroup::new(spec.clone());
    for (c, members) in workers.into_iter().enumerate() {
        let group = GroupBuilder::new(GroupId(c as u32), spec.clone())
            .grouping("workers", members)
            .intensity(intensities.intensity_matrix(&spec, 1)?)
            .build()?;
        companies.add(group)?;
    }

    // ── Schools ───────────────────────────────────────────────────────────
    let spec = GroupSpec::from_type_name("School");
    let mut schools = Supergroup::new(spec.clone());
    for s in 0..plan.schools {
        let households = (s..plan.households).step_by(plan.schools);
        let (younger, older): (Vec<_>, Vec<_>) = households
            .map(|h| (person(4 * h + 3), person(4 * h + 2)))
            .unzip();
        let group = GroupBuilder::new(GroupId(s as u32), spec.clone())
            .grouping("year_1", younger)
            .grouping("year_2", older)
            .intensity(intensities.intensity_matrix(&spec, 2)?)
            .build()?;
        schools.add(group)?;
    }

    Ok(Town {
        population,
        supergroups: vec![households, companies, schools],
        mode_counts,
    })
}

/// Persons infected this run who have not been given an infectiousness yet.
/// Disease progression is outside the engine; the demo uses a flat value.
pub fn start_shedding(population: &mut Population, infectiousness: f64) -> EpiResult<usize> {
    let pending: Vec<PersonId> = population
        .iter()
        .filter(|p| p.is_infected() && p.infectiousness() == 0.0)
        .map(|p| p.id())
        .collect();
    for &id in &pending {
        population.get_mut(id)?.set_infectiousness(infectiousness)?;
    }
    Ok(pending.len())
}
