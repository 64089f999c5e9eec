//! Plain data row types written by output backends.

/// One accepted transmission.
#[derive(Debug, Clone, PartialEq)]
pub struct InfectionRow {
    pub step:       u64,
    /// Simulated days.
    pub time:       f64,
    pub recipient:  u32,
    /// `None` is written as an empty field.
    pub source:     Option<u32>,
    pub group_spec: String,
}

/// Summary statistics for one simulation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSummaryRow {
    pub step:           u64,
    pub time:           f64,
    pub new_infections: u64,
    pub total_infected: u64,
}

/// A person's infection state at a snapshot step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersonSnapshotRow {
    pub person_id:             u32,
    pub step:                  u64,
    pub infected:              bool,
    /// `None` when never infected.
    pub infection_time:        Option<f64>,
    pub infected_by:           Option<u32>,
    pub times_infected_others: u32,
}
