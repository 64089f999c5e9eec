//! Continuous-time hazard → per-tick infection probability.

use epi_core::{EpiResult, non_negative};

/// Probability that a recipient is infected during one tick:
///
/// ```text
/// 1 − exp(−delta_time · susceptibility · intensity · exposure)
/// ```
///
/// `exposure` is the aggregated infectiousness of the source grouping.  The
/// result lies in `[0, 1]`, is exactly `0` when any factor is `0`, and
/// approaches `1` as the product grows.  Negative or non-finite inputs are
/// rejected with `InvalidNumericInput`.
#[inline]
pub fn transmission_probability(
    delta_time:     f64,
    susceptibility: f64,
    intensity:      f64,
    exposure:       f64,
) -> EpiResult<f64> {
    let rate = non_negative("delta_time", delta_time)?
        * non_negative("susceptibility", susceptibility)?
        * non_negative("intensity", intensity)?
        * non_negative("exposure", exposure)?;
    Ok(-(-rate).exp_m1())
}
