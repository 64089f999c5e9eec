//! Behavioural switches for the transmission engine.
//!
//! The defaults keep the model's established behaviour, including two
//! quirks that inflate transmission (see each variant).  The alternatives
//! are opt-in so results stay comparable with earlier runs.

/// How the orchestrator walks grouping pairs within one tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PairSweep {
    /// Visit the full `i × j` grid and, for every `i != j`, evaluate the
    /// reverse pair `(j, i)` again inside the same iteration.  Each
    /// off-diagonal ordered pair is therefore evaluated twice per tick.
    #[default]
    Duplicated,
    /// Evaluate every ordered pair `(i, j)` exactly once per tick.
    OncePerOrderedPair,
}

/// Which infected persons may be credited as the source of an infection
/// that grouping `i` caused in grouping `j`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SourceAttribution {
    /// Draw from every infected person in the group, whichever grouping
    /// they belong to.
    #[default]
    GroupWide,
    /// Draw only from the infected members of the source grouping `i`.
    SourceGrouping,
}

/// Engine options.  `Default` gives the established behaviour.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InteractionOptions {
    pub pair_sweep: PairSweep,

    pub attribution: SourceAttribution,

    /// When `false`, already-infected recipients are evaluated like anyone
    /// else and may be re-infected (time, source and history updated again).
    pub skip_infected_recipients: bool,
}
